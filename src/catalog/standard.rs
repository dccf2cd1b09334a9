//! The classic 40-square board.

use crate::core::{ColorGroup, Square, SquareId, SquareKind};

use super::SquareCatalog;

/// (name, kind, colour group, price, description)
type Row = (&'static str, &'static str, Option<&'static str>, Option<u32>, Option<&'static str>);

const STANDARD_BOARD: [Row; 40] = [
    ("GO", "corner", None, None, Some("Collect $200 salary as you pass")),
    ("Mediterranean Avenue", "property", Some("brown"), Some(60), None),
    ("Community Chest", "community_chest", None, None, None),
    ("Baltic Avenue", "property", Some("brown"), Some(60), None),
    ("Income Tax", "tax", None, None, Some("Pay $200")),
    ("Reading Railroad", "railroad", None, Some(200), Some("Bus Ticket")),
    ("Oriental Avenue", "property", Some("lightblue"), Some(100), None),
    ("Chance", "chance", None, None, None),
    ("Vermont Avenue", "property", Some("lightblue"), Some(100), None),
    ("Connecticut Avenue", "property", Some("lightblue"), Some(120), None),
    ("Jail / Just Visiting", "corner", None, None, None),
    ("St. Charles Place", "property", Some("pink"), Some(140), None),
    ("Electric Company", "utility", None, Some(150), None),
    ("States Avenue", "property", Some("pink"), Some(140), None),
    ("Virginia Avenue", "property", Some("pink"), Some(160), None),
    ("Pennsylvania Railroad", "railroad", None, Some(200), Some("Bus Ticket")),
    ("St. James Place", "property", Some("orange"), Some(180), None),
    ("Community Chest", "community_chest", None, None, None),
    ("Tennessee Avenue", "property", Some("orange"), Some(180), None),
    ("New York Avenue", "property", Some("orange"), Some(200), None),
    ("Free Parking", "corner", None, None, None),
    ("Kentucky Avenue", "property", Some("red"), Some(220), None),
    ("Chance", "chance", None, None, None),
    ("Indiana Avenue", "property", Some("red"), Some(220), None),
    ("Illinois Avenue", "property", Some("red"), Some(240), None),
    ("B&O Railroad", "railroad", None, Some(200), Some("Bus Ticket")),
    ("Atlantic Avenue", "property", Some("yellow"), Some(260), None),
    ("Ventnor Avenue", "property", Some("yellow"), Some(260), None),
    ("Water Works", "utility", None, Some(150), None),
    ("Marvin Gardens", "property", Some("yellow"), Some(280), None),
    ("Go To Jail", "corner", None, None, Some("Go directly to Jail")),
    ("Pacific Avenue", "property", Some("green"), Some(300), None),
    ("North Carolina Avenue", "property", Some("green"), Some(300), None),
    ("Community Chest", "community_chest", None, None, None),
    ("Pennsylvania Avenue", "property", Some("green"), Some(320), None),
    ("Short Line", "railroad", None, Some(200), Some("Bus Ticket")),
    ("Chance", "chance", None, None, None),
    ("Park Place", "property", Some("darkblue"), Some(350), None),
    ("Luxury Tax", "tax", None, None, Some("Pay $100")),
    ("Boardwalk", "property", Some("darkblue"), Some(400), None),
];

impl SquareCatalog {
    /// The classic board: GO at 0, Jail at 10, Free Parking at 20,
    /// Go To Jail at 30, railroads (bus tickets) at 5, 15, 25 and 35.
    #[must_use]
    pub fn standard() -> Self {
        let squares = STANDARD_BOARD
            .iter()
            .enumerate()
            .map(|(position, &(name, kind, color, price, description))| Square {
                id: SquareId::new(position as u32),
                name: name.to_string(),
                kind: SquareKind::from(kind),
                color: color.map(ColorGroup::from),
                price,
                description: description.map(str::to_string),
            })
            .collect();
        Self::from_ordered(squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_is_valid() {
        let board = SquareCatalog::standard();
        assert_eq!(board.len(), 40);
        assert!(SquareCatalog::new(board.all().to_vec()).is_ok());
    }

    #[test]
    fn test_landmarks() {
        let board = SquareCatalog::standard();
        assert_eq!(board.find_by_name("GO").unwrap().id, SquareId::new(0));
        assert_eq!(board.find_by_name("Jail / Just Visiting").unwrap().id, SquareId::new(10));
        assert_eq!(board.find_by_name("Free Parking").unwrap().id, SquareId::new(20));
        assert_eq!(board.find_by_name("Go To Jail").unwrap().id, SquareId::new(30));
    }

    #[test]
    fn test_railroads() {
        let board = SquareCatalog::standard();
        let railroads: Vec<_> = board
            .find_by_kind(&SquareKind::Railroad)
            .map(|s| s.id.raw())
            .collect();
        assert_eq!(railroads, [5, 15, 25, 35]);
    }

    #[test]
    fn test_every_property_has_a_known_colour() {
        let board = SquareCatalog::standard();
        for square in board.find_by_kind(&SquareKind::Property) {
            assert!(
                square.color.as_ref().and_then(ColorGroup::hex).is_some(),
                "{} has no colour",
                square.name
            );
            assert!(square.display_price().is_some());
        }
    }
}
