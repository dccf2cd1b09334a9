//! Movement results as produced by the turn engine.
//!
//! A `MovementResult` describes one completed (or, for the bus, pending)
//! move. The guide only reads it; the dice and turn logic that builds it
//! lives elsewhere. Field names follow the engine's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::core::{Square, SquareId};

/// Movement mode, from the speed die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Plain dice movement.
    Normal,
    /// Mr. Monopoly: advance to the next unowned property.
    MrMonopoly,
    /// Question mark: a Chance/Community Chest style jump.
    QuestionMark,
    /// Bus ticket: the player picks normal movement or the bus.
    Bus,
}

impl MoveKind {
    /// Wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveKind::Normal => "normal",
            MoveKind::MrMonopoly => "mr_monopoly",
            MoveKind::QuestionMark => "question_mark",
            MoveKind::Bus => "bus",
        }
    }

    /// Whether results of this kind carry bus options.
    #[must_use]
    pub const fn is_bus(self) -> bool {
        matches!(self, MoveKind::Bus)
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alternative of a bus choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    /// Where this choice lands.
    pub destination: SquareId,
    /// Spaces moved to get there.
    pub movement: u32,
    /// Whether this choice passes GO.
    #[serde(rename = "passedGO", default)]
    pub passed_go: bool,
}

impl MoveOption {
    #[must_use]
    pub fn new(destination: SquareId, movement: u32, passed_go: bool) -> Self {
        Self {
            destination,
            movement,
            passed_go,
        }
    }
}

/// The two outcomes offered by a bus ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusOptions {
    /// Move with the dice as usual.
    pub normal: MoveOption,
    /// Ride to the next bus-ticket railroad.
    pub bus: MoveOption,
}

/// Outcome of one player's move.
///
/// ## Example
///
/// ```
/// use board_guide::core::SquareId;
/// use board_guide::movement::{MoveKind, MovementResult};
///
/// let result = MovementResult::new(MoveKind::Normal, SquareId::new(0), SquareId::new(3))
///     .with_path([0, 1, 2, 3].map(SquareId::new))
///     .with_action("check_property_ownership");
///
/// assert_eq!(result.steps(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementResult {
    /// Movement mode.
    #[serde(rename = "type")]
    pub kind: MoveKind,

    /// Where the move started. Always present for non-bus results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<SquareId>,

    /// Where the move ended. Always present for non-bus results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<SquareId>,

    /// Squares walked, inclusive of start and destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<SquareId>>,

    /// The move wrapped around past GO.
    #[serde(rename = "passedGO", default)]
    pub passed_go: bool,

    /// The engine's copy of the destination square.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landed_square: Option<Square>,

    /// Follow-up action tags, in the order they apply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_actions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,

    /// The two choices of a bus result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BusOptions>,
}

impl MovementResult {
    /// Create a single-destination result.
    #[must_use]
    pub fn new(kind: MoveKind, start: SquareId, destination: SquareId) -> Self {
        Self {
            kind,
            start_position: Some(start),
            destination: Some(destination),
            path: None,
            passed_go: false,
            landed_square: None,
            special_actions: Vec::new(),
            message: None,
            tip: None,
            options: None,
        }
    }

    /// Create a bus-choice result.
    #[must_use]
    pub fn bus(options: BusOptions) -> Self {
        Self {
            kind: MoveKind::Bus,
            start_position: None,
            destination: None,
            path: None,
            passed_go: false,
            landed_square: None,
            special_actions: Vec::new(),
            message: None,
            tip: None,
            options: Some(options),
        }
    }

    /// Set the walked path (builder pattern).
    #[must_use]
    pub fn with_path(mut self, path: impl IntoIterator<Item = SquareId>) -> Self {
        self.path = Some(path.into_iter().collect());
        self
    }

    /// Set the passed-GO flag (builder pattern).
    #[must_use]
    pub fn with_passed_go(mut self, passed_go: bool) -> Self {
        self.passed_go = passed_go;
        self
    }

    /// Attach the engine's copy of the landed square (builder pattern).
    #[must_use]
    pub fn with_landed_square(mut self, square: Square) -> Self {
        self.landed_square = Some(square);
        self
    }

    /// Append a special-action tag (builder pattern).
    #[must_use]
    pub fn with_action(mut self, tag: impl Into<String>) -> Self {
        self.special_actions.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Attach bus options (builder pattern).
    #[must_use]
    pub fn with_options(mut self, options: BusOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Spaces moved according to the path, or `None` without a path.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Whether a special-action tag is present.
    #[must_use]
    pub fn has_action(&self, tag: &str) -> bool {
        self.special_actions.iter().any(|a| a == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(MoveKind::MrMonopoly.as_str(), "mr_monopoly");
        assert_eq!(format!("{}", MoveKind::QuestionMark), "question_mark");
        assert!(MoveKind::Bus.is_bus());
        assert!(!MoveKind::Normal.is_bus());
    }

    #[test]
    fn test_builder() {
        let result = MovementResult::new(MoveKind::MrMonopoly, SquareId::new(3), SquareId::new(6))
            .with_path([3, 4, 5, 6].map(SquareId::new))
            .with_action("check_property_ownership")
            .with_message("Mr. Monopoly moves you")
            .with_tip("Buy it!");

        assert_eq!(result.steps(), Some(3));
        assert!(result.has_action("check_property_ownership"));
        assert!(!result.has_action("in_jail"));
        assert_eq!(result.tip.as_deref(), Some("Buy it!"));
        assert!(result.options.is_none());
    }

    #[test]
    fn test_steps_without_path() {
        let result = MovementResult::new(MoveKind::Normal, SquareId::new(1), SquareId::new(4));
        assert_eq!(result.steps(), None);
    }

    #[test]
    fn test_engine_json() {
        let json = r#"{
            "type": "normal",
            "startPosition": 38,
            "destination": 2,
            "path": [38, 39, 0, 1, 2],
            "passedGO": true,
            "specialActions": ["collect_go", "draw_community_chest"],
            "message": "You rolled 4"
        }"#;
        let result: MovementResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.kind, MoveKind::Normal);
        assert_eq!(result.start_position, Some(SquareId::new(38)));
        assert!(result.passed_go);
        assert_eq!(result.special_actions.len(), 2);
        assert_eq!(result.tip, None);
    }

    #[test]
    fn test_bus_json() {
        let json = r#"{
            "type": "bus",
            "options": {
                "normal": {"destination": 5, "movement": 3, "passedGO": false},
                "bus": {"destination": 15, "movement": 10, "passedGO": false}
            }
        }"#;
        let result: MovementResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.kind, MoveKind::Bus);
        let options = result.options.unwrap();
        assert_eq!(options.normal.destination, SquareId::new(5));
        assert_eq!(options.bus.movement, 10);
        assert_eq!(result.start_position, None);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<MovementResult>(r#"{"type": "teleport"}"#).is_err());
    }

    #[test]
    fn test_serializes_engine_field_names() {
        let result = MovementResult::new(MoveKind::Normal, SquareId::new(0), SquareId::new(1))
            .with_passed_go(true);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["type"], "normal");
        assert_eq!(value["startPosition"], 0);
        assert_eq!(value["passedGO"], true);
        assert!(value.get("options").is_none());
    }
}
