//! Square-to-rules classification.
//!
//! Classification walks a single ordered chain of `(predicate, bundle)`
//! pairs and stops at the first match. Name checks come before kind checks
//! and the order must not change: a square named `GO` is the GO bundle even
//! if its kind says otherwise.

use tracing::trace;

use crate::core::{Square, SquareKind};

use super::bundle::{BundleKey, RuleBundle};
use super::knowledge;

/// A test against a square's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquarePredicate {
    /// Exact display-name match.
    NameIs(&'static str),
    /// Category match.
    KindIs(SquareKind),
}

impl SquarePredicate {
    /// Check the predicate. Only `name` and `kind` are ever consulted.
    #[must_use]
    pub fn matches(&self, square: &Square) -> bool {
        match self {
            SquarePredicate::NameIs(name) => square.name == *name,
            SquarePredicate::KindIs(kind) => square.kind == *kind,
        }
    }
}

/// Classification chain, highest priority first.
pub static CLASSIFICATION_CHAIN: [(SquarePredicate, BundleKey); 8] = [
    (SquarePredicate::NameIs("GO"), BundleKey::Go),
    (SquarePredicate::NameIs("Jail / Just Visiting"), BundleKey::Jail),
    (SquarePredicate::NameIs("Go To Jail"), BundleKey::GoToJail),
    (SquarePredicate::NameIs("Free Parking"), BundleKey::FreeParking),
    (SquarePredicate::KindIs(SquareKind::Chance), BundleKey::Chance),
    (SquarePredicate::KindIs(SquareKind::CommunityChest), BundleKey::CommunityChest),
    (SquarePredicate::NameIs("Income Tax"), BundleKey::IncomeTax),
    (SquarePredicate::NameIs("Luxury Tax"), BundleKey::LuxuryTax),
];

/// Which bundle applies to `square`, if any.
#[must_use]
pub fn classify_key(square: &Square) -> Option<BundleKey> {
    let key = CLASSIFICATION_CHAIN
        .iter()
        .find(|(predicate, _)| predicate.matches(square))
        .map(|(_, key)| *key);
    trace!(square = %square.id, ?key, "classified square");
    key
}

/// Rules for `square`, or `None` for ordinary squares (properties,
/// railroads, utilities) that carry no special guidance.
///
/// ```
/// use board_guide::core::{Square, SquareId, SquareKind};
/// use board_guide::rules::classify;
///
/// let tax = Square::new(SquareId::new(4), "Income Tax", SquareKind::Tax);
/// assert_eq!(classify(&tax).unwrap().main_rules[0], "Pay $200 to the Bank");
///
/// let park = Square::new(SquareId::new(37), "Park Place", SquareKind::Property);
/// assert!(classify(&park).is_none());
/// ```
#[must_use]
pub fn classify(square: &Square) -> Option<&'static RuleBundle> {
    classify_key(square).and_then(knowledge::bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SquareId;

    fn square(name: &str, kind: SquareKind) -> Square {
        Square::new(SquareId::new(0), name, kind)
    }

    #[test]
    fn test_chain_order_matches_keys() {
        let keys: Vec<_> = CLASSIFICATION_CHAIN.iter().map(|(_, k)| *k).collect();
        assert_eq!(keys, BundleKey::ALL);
    }

    #[test]
    fn test_name_matches() {
        let cases = [
            ("GO", SquareKind::Corner, BundleKey::Go),
            ("Jail / Just Visiting", SquareKind::Corner, BundleKey::Jail),
            ("Go To Jail", SquareKind::Corner, BundleKey::GoToJail),
            ("Free Parking", SquareKind::Corner, BundleKey::FreeParking),
            ("Income Tax", SquareKind::Tax, BundleKey::IncomeTax),
            ("Luxury Tax", SquareKind::Tax, BundleKey::LuxuryTax),
        ];
        for (name, kind, key) in cases {
            assert_eq!(classify_key(&square(name, kind)), Some(key), "{name}");
        }
    }

    #[test]
    fn test_kind_matches_any_name() {
        assert_eq!(classify_key(&square("Chance", SquareKind::Chance)), Some(BundleKey::Chance));
        assert_eq!(classify_key(&square("Chance 2", SquareKind::Chance)), Some(BundleKey::Chance));
        assert_eq!(
            classify_key(&square("Community Chest", SquareKind::CommunityChest)),
            Some(BundleKey::CommunityChest)
        );
    }

    #[test]
    fn test_name_beats_kind() {
        assert_eq!(classify_key(&square("GO", SquareKind::Chance)), Some(BundleKey::Go));
        assert_eq!(
            classify_key(&square("Free Parking", SquareKind::CommunityChest)),
            Some(BundleKey::FreeParking)
        );
    }

    #[test]
    fn test_kind_beats_tax_names() {
        let tax_named_chance = square("Income Tax", SquareKind::Chance);
        assert_eq!(classify_key(&tax_named_chance), Some(BundleKey::Chance));
    }

    #[test]
    fn test_name_match_is_exact() {
        assert_eq!(classify_key(&square("go", SquareKind::Corner)), None);
        assert_eq!(classify_key(&square("Jail", SquareKind::Corner)), None);
        assert_eq!(classify_key(&square("Chance", SquareKind::Property)), None);
    }

    #[test]
    fn test_unmatched() {
        assert!(classify(&square("Park Place", SquareKind::Property)).is_none());
        assert!(classify(&square("Reading Railroad", SquareKind::Railroad)).is_none());
        assert!(classify(&square("Water Works", SquareKind::Utility)).is_none());
        assert!(classify(&square("Super Tax", SquareKind::Tax)).is_none());
    }

    #[test]
    fn test_classify_returns_bundle() {
        let rules = classify(&square("Go To Jail", SquareKind::Corner)).unwrap();
        assert_eq!(rules.title, "Go To Jail");
        assert_eq!(rules.icon, "👮");
    }
}
