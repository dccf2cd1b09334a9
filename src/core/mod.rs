//! Core types: square identity, colour groups, configuration.
//!
//! These are the static building blocks shared by the catalog, the
//! movement interpreter and the rule classifier.

pub mod color;
pub mod config;
pub mod square;

pub use color::{ColorGroup, NEUTRAL_HEX};
pub use config::{GoToJailPolicy, GuideConfig};
pub use square::{Square, SquareId, SquareKind};
