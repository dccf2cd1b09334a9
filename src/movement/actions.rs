//! Special-action tags and their display labels.
//!
//! The engine attaches follow-up tags (`draw_chance_card`, `in_jail`, ...)
//! to a result. Only tags in the label table are shown; anything else is
//! dropped so a newer engine can add tags without breaking older guides.

use std::borrow::Cow;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

/// Follow-up action the player has to take after moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAction {
    DrawChanceCard,
    CheckPropertyOwnership,
    CollectGo,
    InJail,
}

impl SpecialAction {
    /// Wire tag for this action.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            SpecialAction::DrawChanceCard => "draw_chance_card",
            SpecialAction::CheckPropertyOwnership => "check_property_ownership",
            SpecialAction::CollectGo => "collect_go",
            SpecialAction::InJail => "in_jail",
        }
    }

    /// Parse a wire tag. Unknown tags give `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        label_for(tag).map(|label| label.action)
    }
}

/// Display label for one special action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionLabel {
    pub action: SpecialAction,
    pub icon: &'static str,
    pub text: Cow<'static, str>,
}

/// Labels shown for a result, in the engine's order. The vocabulary has
/// four tags, so this never spills to the heap for well-formed results.
pub type ActionLabels = SmallVec<[ActionLabel; 4]>;

const ACTION_TABLE: [ActionLabel; 4] = [
    ActionLabel {
        action: SpecialAction::DrawChanceCard,
        icon: "📜",
        text: Cow::Borrowed("Draw a Chance card"),
    },
    ActionLabel {
        action: SpecialAction::CheckPropertyOwnership,
        icon: "🏠",
        text: Cow::Borrowed("Check property ownership"),
    },
    ActionLabel {
        action: SpecialAction::CollectGo,
        icon: "💰",
        text: Cow::Borrowed("Collect $200 for passing GO"),
    },
    ActionLabel {
        action: SpecialAction::InJail,
        icon: "🔒",
        text: Cow::Borrowed("You are in Jail"),
    },
];

static LABELS_BY_TAG: LazyLock<FxHashMap<&'static str, ActionLabel>> = LazyLock::new(|| {
    ACTION_TABLE
        .into_iter()
        .map(|label| (label.action.tag(), label))
        .collect()
});

/// Label for a wire tag, if the tag is known.
#[must_use]
pub fn label_for(tag: &str) -> Option<ActionLabel> {
    LABELS_BY_TAG.get(tag).cloned()
}

/// Labels for a list of tags, keeping their order and dropping unknown ones.
///
/// The `collect_go` label quotes `go_salary` so it agrees with the
/// passed-GO badge.
pub fn render_actions<S: AsRef<str>>(tags: &[S], go_salary: u32) -> ActionLabels {
    tags.iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            let label = label_for(tag);
            if label.is_none() {
                warn!(tag, "dropping unrecognized special action");
            }
            label
        })
        .map(|mut label| {
            if label.action == SpecialAction::CollectGo {
                label.text = Cow::Owned(format!("Collect ${go_salary} for passing GO"));
            }
            label
        })
        .collect()
}
