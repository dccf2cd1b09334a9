//! Presentation model for a movement result.
//!
//! A `MovementView` is plain data for a rendering layer: every square is
//! already resolved, every label already chosen. Views serialize with a
//! `mode` tag (`empty`, `single` or `dual_choice`).

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Square, SquareId, SquareKind};
use crate::rules::RuleBundle;

use super::actions::ActionLabels;
use super::result::MoveKind;

/// Colour of path steps between the two endpoints.
pub const PATH_STEP_HEX: &str = "#DDDDDD";

/// A fully described square, as shown at either end of a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SquareCard {
    /// Caption above the card ("Starting Position", "Destination", ...).
    pub label: &'static str,
    pub id: SquareId,
    pub name: String,
    pub kind: SquareKind,
    /// Only set for squares with a non-zero price.
    pub price: Option<u32>,
    pub description: Option<String>,
    pub color_hex: &'static str,
    pub highlighted: bool,
}

impl SquareCard {
    #[must_use]
    pub fn new(square: &Square, label: &'static str, highlighted: bool) -> Self {
        Self {
            label,
            id: square.id,
            name: square.name.clone(),
            kind: square.kind.clone(),
            price: square.display_price(),
            description: square.description.clone(),
            color_hex: square.color_hex(),
            highlighted,
        }
    }
}

/// Position of a step within the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRole {
    Start,
    Intermediate,
    End,
}

/// One square along the path. Only the id is shown; the endpoints carry
/// their square's colour so they stand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub id: SquareId,
    pub role: StepRole,
    pub color_hex: &'static str,
}

/// Passed-GO notice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoBadge {
    pub icon: &'static str,
    pub text: String,
}

impl GoBadge {
    /// Badge for a completed move.
    #[must_use]
    pub fn collected(salary: u32) -> Self {
        Self {
            icon: "🚀",
            text: format!("You passed GO! Collect ${salary}"),
        }
    }

    /// Badge for a bus choice that would pass GO.
    #[must_use]
    pub fn preview(salary: u32) -> Self {
        Self {
            icon: "🚀",
            text: format!("Passed GO! +${salary}"),
        }
    }
}

/// A normal, Mr. Monopoly or question-mark move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SingleMoveView {
    pub kind: MoveKind,
    pub title: &'static str,
    pub message: Option<String>,
    pub start: SquareCard,
    pub landed: SquareCard,
    /// Empty when the result had no path or stayed in place.
    pub path: Vec<PathStep>,
    /// Spaces moved; `None` when the result had no path.
    pub steps: Option<usize>,
    pub go_badge: Option<GoBadge>,
    pub special_actions: ActionLabels,
    pub tip: Option<String>,
}

impl SingleMoveView {
    #[must_use]
    pub fn passed_go(&self) -> bool {
        self.go_badge.is_some()
    }

    /// Summary line under the path, e.g. "Moved 7 spaces".
    #[must_use]
    pub fn path_summary(&self) -> Option<String> {
        if self.path.is_empty() {
            return None;
        }
        self.steps.map(|steps| format!("Moved {steps} spaces"))
    }
}

/// Which side of a bus choice an option is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Normal,
    Bus,
}

impl Choice {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Choice::Normal => "Normal Movement",
            Choice::Bus => "Take the Bus",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Choice::Normal => "🎲",
            Choice::Bus => "🚌",
        }
    }
}

/// One resolved alternative of a bus choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub choice: Choice,
    pub heading: &'static str,
    pub icon: &'static str,
    pub square: SquareCard,
    pub movement: u32,
    pub summary: String,
    pub go_badge: Option<GoBadge>,
}

impl ChoiceOption {
    #[must_use]
    pub fn passed_go(&self) -> bool {
        self.go_badge.is_some()
    }
}

/// A bus ticket: two destinations for the player to pick between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DualChoiceView {
    pub title: &'static str,
    pub message: Option<String>,
    pub normal: ChoiceOption,
    pub bus: ChoiceOption,
    pub rules: &'static RuleBundle,
    pub tip: Option<String>,
}

impl DualChoiceView {
    /// Both options, normal movement first.
    #[must_use]
    pub fn options(&self) -> [&ChoiceOption; 2] {
        [&self.normal, &self.bus]
    }
}

/// Presentation of one movement result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MovementView {
    /// No result: render nothing.
    Empty,
    Single(SingleMoveView),
    DualChoice(DualChoiceView),
}

impl MovementView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, MovementView::Empty)
    }

    #[must_use]
    pub fn as_single(&self) -> Option<&SingleMoveView> {
        match self {
            MovementView::Single(view) => Some(view),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_dual_choice(&self) -> Option<&DualChoiceView> {
        match self {
            MovementView::DualChoice(view) => Some(view),
            _ => None,
        }
    }

    /// Squares whose rules are worth showing next to this view:
    /// start and landed square for a move, both destinations for a choice.
    #[must_use]
    pub fn rule_targets(&self) -> SmallVec<[SquareId; 2]> {
        let mut targets = SmallVec::new();
        let ids = match self {
            MovementView::Empty => return targets,
            MovementView::Single(view) => [view.start.id, view.landed.id],
            MovementView::DualChoice(view) => [view.normal.square.id, view.bus.square.id],
        };
        for id in ids {
            if !targets.contains(&id) {
                targets.push(id);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorGroup;

    #[test]
    fn test_square_card() {
        let square = Square::new(SquareId::new(1), "Mediterranean Avenue", SquareKind::Property)
            .with_color(ColorGroup::Brown)
            .with_price(60);
        let card = SquareCard::new(&square, "Destination", true);

        assert_eq!(card.name, "Mediterranean Avenue");
        assert_eq!(card.price, Some(60));
        assert_eq!(card.color_hex, "#8B4513");
        assert!(card.highlighted);
    }

    #[test]
    fn test_badges() {
        assert_eq!(GoBadge::collected(200).text, "You passed GO! Collect $200");
        assert_eq!(GoBadge::preview(400).text, "Passed GO! +$400");
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(Choice::Normal.heading(), "Normal Movement");
        assert_eq!(Choice::Bus.icon(), "🚌");
    }

    #[test]
    fn test_empty_view() {
        let view = MovementView::Empty;
        assert!(view.is_empty());
        assert!(view.as_single().is_none());
        assert!(view.rule_targets().is_empty());
        assert_eq!(serde_json::to_value(&view).unwrap()["mode"], "empty");
    }
}
