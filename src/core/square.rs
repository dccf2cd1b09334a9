//! Square definitions - static board data.
//!
//! A `Square` is one fixed position on the board. Squares are loaded once
//! into a [`SquareCatalog`](crate::catalog::SquareCatalog) and never change
//! afterwards; everything else in the crate refers to them by `SquareId`.

use serde::{Deserialize, Serialize};

use super::color::ColorGroup;

/// Board position of a square.
///
/// Ids are contiguous from `0` (GO) to `N - 1` and wrap around, so the
/// square after `N - 1` is `0` again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SquareId(pub u32);

impl SquareId {
    /// Create a new square ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SquareId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// Category tag of a square (`type` in the board dataset).
///
/// Tags the crate does not know are preserved in `Other` so a newer
/// dataset still loads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SquareKind {
    Property,
    Chance,
    CommunityChest,
    Railroad,
    Utility,
    Tax,
    Corner,
    Other(String),
}

impl SquareKind {
    /// Dataset tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SquareKind::Property => "property",
            SquareKind::Chance => "chance",
            SquareKind::CommunityChest => "community_chest",
            SquareKind::Railroad => "railroad",
            SquareKind::Utility => "utility",
            SquareKind::Tax => "tax",
            SquareKind::Corner => "corner",
            SquareKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for SquareKind {
    fn from(tag: &str) -> Self {
        match tag {
            "property" => SquareKind::Property,
            "chance" => SquareKind::Chance,
            "community_chest" => SquareKind::CommunityChest,
            "railroad" => SquareKind::Railroad,
            "utility" => SquareKind::Utility,
            "tax" => SquareKind::Tax,
            "corner" => SquareKind::Corner,
            other => SquareKind::Other(other.to_string()),
        }
    }
}

impl From<String> for SquareKind {
    fn from(tag: String) -> Self {
        match SquareKind::from(tag.as_str()) {
            SquareKind::Other(_) => SquareKind::Other(tag),
            known => known,
        }
    }
}

impl From<SquareKind> for String {
    fn from(kind: SquareKind) -> Self {
        match kind {
            SquareKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SquareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static square definition.
///
/// ## Example
///
/// ```
/// use board_guide::core::{ColorGroup, Square, SquareId, SquareKind};
///
/// let boardwalk = Square::new(SquareId::new(39), "Boardwalk", SquareKind::Property)
///     .with_color(ColorGroup::DarkBlue)
///     .with_price(400);
///
/// assert_eq!(boardwalk.color_hex(), "#0000FF");
/// assert_eq!(boardwalk.price, Some(400));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Board position.
    pub id: SquareId,

    /// Display name. Some names carry rules meaning (`GO`, `Go To Jail`, ...).
    pub name: String,

    /// Category tag.
    #[serde(rename = "type")]
    pub kind: SquareKind,

    /// Colour group, for properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorGroup>,

    /// Purchase price, for buyable squares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Square {
    /// Create a new square definition.
    #[must_use]
    pub fn new(id: SquareId, name: impl Into<String>, kind: SquareKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            color: None,
            price: None,
            description: None,
        }
    }

    /// Set the colour group (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorGroup>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the purchase price (builder pattern).
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Display colour, falling back to the neutral colour.
    #[must_use]
    pub fn color_hex(&self) -> &'static str {
        ColorGroup::hex_or_neutral(self.color.as_ref())
    }

    /// Price worth showing. A zero price is treated as "not for sale".
    #[must_use]
    pub fn display_price(&self) -> Option<u32> {
        self.price.filter(|&p| p > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_id() {
        let id = SquareId::new(12);
        assert_eq!(id.raw(), 12);
        assert_eq!(id.index(), 12);
        assert_eq!(format!("{}", id), "Square(12)");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(SquareKind::from("community_chest"), SquareKind::CommunityChest);
        assert_eq!(SquareKind::CommunityChest.as_str(), "community_chest");
        assert_eq!(SquareKind::from("speed_die"), SquareKind::Other("speed_die".into()));
        assert_eq!(String::from(SquareKind::Other("bus".into())), "bus");
    }

    #[test]
    fn test_square_builder() {
        let square = Square::new(SquareId::new(5), "Reading Railroad", SquareKind::Railroad)
            .with_price(200)
            .with_description("Bus Ticket");

        assert_eq!(square.name, "Reading Railroad");
        assert_eq!(square.display_price(), Some(200));
        assert_eq!(square.description.as_deref(), Some("Bus Ticket"));
        assert_eq!(square.color_hex(), "#CCCCCC");
    }

    #[test]
    fn test_zero_price_hidden() {
        let square = Square::new(SquareId::new(0), "GO", SquareKind::Corner).with_price(0);
        assert_eq!(square.display_price(), None);
    }

    #[test]
    fn test_square_serialization() {
        let json = r#"{
            "id": 1,
            "name": "Mediterranean Avenue",
            "type": "property",
            "color": "brown",
            "price": 60
        }"#;
        let square: Square = serde_json::from_str(json).unwrap();

        assert_eq!(square.id, SquareId::new(1));
        assert_eq!(square.kind, SquareKind::Property);
        assert_eq!(square.color, Some(ColorGroup::Brown));
        assert_eq!(square.description, None);

        let back = serde_json::to_value(&square).unwrap();
        assert_eq!(back["type"], "property");
        assert!(back.get("description").is_none());
    }
}
