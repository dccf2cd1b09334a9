//! Rule bundles: the static guidance shown for a square category.

use serde::{Deserialize, Serialize};

/// Identifies one of the compiled-in rule bundles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleKey {
    Go,
    Jail,
    GoToJail,
    Chance,
    CommunityChest,
    FreeParking,
    IncomeTax,
    LuxuryTax,
}

impl BundleKey {
    /// Every bundle key, in classification priority order.
    pub const ALL: [BundleKey; 8] = [
        BundleKey::Go,
        BundleKey::Jail,
        BundleKey::GoToJail,
        BundleKey::FreeParking,
        BundleKey::Chance,
        BundleKey::CommunityChest,
        BundleKey::IncomeTax,
        BundleKey::LuxuryTax,
    ];

    /// Square name (or category name) the bundle is filed under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BundleKey::Go => "GO",
            BundleKey::Jail => "Jail / Just Visiting",
            BundleKey::GoToJail => "Go To Jail",
            BundleKey::Chance => "Chance",
            BundleKey::CommunityChest => "Community Chest",
            BundleKey::FreeParking => "Free Parking",
            BundleKey::IncomeTax => "Income Tax",
            BundleKey::LuxuryTax => "Luxury Tax",
        }
    }

    /// Landing here ends the turn even after rolling doubles.
    #[must_use]
    pub const fn cancels_doubles_roll(self) -> bool {
        matches!(self, BundleKey::GoToJail)
    }
}

impl std::fmt::Display for BundleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One branching situation and what to do about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub title: &'static str,
    pub description: &'static str,
}

/// Rules, scenarios and tips for a square category.
///
/// The last scenario of every bundle covers what happens after rolling
/// doubles onto the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RuleBundle {
    pub icon: &'static str,
    pub title: &'static str,
    pub main_rules: &'static [&'static str],
    pub scenarios: &'static [Scenario],
    pub tips: &'static [&'static str],
}

impl RuleBundle {
    /// The closing "rolled doubles" scenario, if the bundle has one.
    #[must_use]
    pub fn doubles_scenario(&self) -> Option<&'static Scenario> {
        let scenarios: &'static [Scenario] = self.scenarios;
        scenarios
            .last()
            .filter(|s| s.title.to_lowercase().contains("doubles"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: RuleBundle = RuleBundle {
        icon: "x",
        title: "Sample",
        main_rules: &["Do the thing"],
        scenarios: &[
            Scenario { title: "First", description: "a" },
            Scenario { title: "If You Rolled Doubles", description: "b" },
        ],
        tips: &[],
    };

    #[test]
    fn test_doubles_scenario() {
        assert_eq!(SAMPLE.doubles_scenario().unwrap().description, "b");

        let without = RuleBundle {
            scenarios: &[Scenario { title: "Only", description: "c" }],
            ..SAMPLE
        };
        assert!(without.doubles_scenario().is_none());
    }

    #[test]
    fn test_only_go_to_jail_cancels_doubles() {
        let cancelling: Vec<_> = BundleKey::ALL
            .iter()
            .filter(|k| k.cancels_doubles_roll())
            .collect();
        assert_eq!(cancelling, [&BundleKey::GoToJail]);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(BundleKey::Jail.to_string(), "Jail / Just Visiting");
        let json = serde_json::to_string(&BundleKey::CommunityChest).unwrap();
        assert_eq!(json, "\"community_chest\"");
    }
}
