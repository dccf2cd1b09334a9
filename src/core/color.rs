//! Property colour groups and their display colours.
//!
//! Unknown group names are kept as `Unknown` and render with the neutral
//! colour rather than failing to load.

use serde::{Deserialize, Serialize};

/// Display colour used when a square has no (known) colour group.
pub const NEUTRAL_HEX: &str = "#CCCCCC";

/// Fixed group -> display colour table.
const GROUP_HEX: [(ColorGroup, &str); 8] = [
    (ColorGroup::Brown, "#8B4513"),
    (ColorGroup::LightBlue, "#87CEEB"),
    (ColorGroup::Pink, "#FF1493"),
    (ColorGroup::Orange, "#FFA500"),
    (ColorGroup::Red, "#FF0000"),
    (ColorGroup::Yellow, "#FFFF00"),
    (ColorGroup::Green, "#00A550"),
    (ColorGroup::DarkBlue, "#0000FF"),
];

/// Property colour group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Unknown(String),
}

impl ColorGroup {
    /// Dataset name of the group.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ColorGroup::Brown => "brown",
            ColorGroup::LightBlue => "lightblue",
            ColorGroup::Pink => "pink",
            ColorGroup::Orange => "orange",
            ColorGroup::Red => "red",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Green => "green",
            ColorGroup::DarkBlue => "darkblue",
            ColorGroup::Unknown(name) => name,
        }
    }

    /// Display colour, or `None` for unknown groups.
    #[must_use]
    pub fn hex(&self) -> Option<&'static str> {
        GROUP_HEX
            .iter()
            .find(|(group, _)| group == self)
            .map(|(_, hex)| *hex)
    }

    /// Display colour for an optional group, falling back to [`NEUTRAL_HEX`].
    #[must_use]
    pub fn hex_or_neutral(color: Option<&ColorGroup>) -> &'static str {
        color.and_then(ColorGroup::hex).unwrap_or(NEUTRAL_HEX)
    }
}

impl From<&str> for ColorGroup {
    fn from(name: &str) -> Self {
        match name {
            "brown" => ColorGroup::Brown,
            "lightblue" => ColorGroup::LightBlue,
            "pink" => ColorGroup::Pink,
            "orange" => ColorGroup::Orange,
            "red" => ColorGroup::Red,
            "yellow" => ColorGroup::Yellow,
            "green" => ColorGroup::Green,
            "darkblue" => ColorGroup::DarkBlue,
            other => ColorGroup::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ColorGroup {
    fn from(name: String) -> Self {
        match ColorGroup::from(name.as_str()) {
            ColorGroup::Unknown(_) => ColorGroup::Unknown(name),
            known => known,
        }
    }
}

impl From<ColorGroup> for String {
    fn from(color: ColorGroup) -> Self {
        match color {
            ColorGroup::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}
