//! Square rules guidance.
//!
//! `classify` maps a square to one of eight compiled-in `RuleBundle`s
//! (or `None`) using a priority-ordered predicate chain. Bundles are
//! static data; nothing here allocates per call or can fail.

pub mod bundle;
pub mod classifier;
pub mod knowledge;

pub use bundle::{BundleKey, RuleBundle, Scenario};
pub use classifier::{classify, classify_key, SquarePredicate, CLASSIFICATION_CHAIN};
pub use knowledge::{bundle, knowledge_base, BUS_TICKET};
