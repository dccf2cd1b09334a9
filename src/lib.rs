//! # board-guide
//!
//! Movement-result interpretation and square rules guidance for a
//! speed-die board game.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `interpret` and `classify` are functions of their inputs.
//!    No hidden state, no I/O, no locking.
//!
//! 2. **Tables as Data**: Titles, action labels, colours, rule bundles and
//!    the classification order are static tables, not branching code.
//!
//! 3. **Forward Compatible**: Unknown action tags, square kinds and colour
//!    groups fall back to defaults instead of failing.
//!
//! ## Flow
//!
//! The turn engine produces a `MovementResult`. The caller hands it to
//! `MovementInterpreter::interpret` (or `Guide::interpret`) with the board's
//! `SquareCatalog` and gets a `MovementView`. Independently, `classify`
//! maps any square to its optional `RuleBundle`.
//!
//! ## Modules
//!
//! - `core`: Square ids, kinds, colour groups, configuration
//! - `catalog`: Validated read-only board lookup
//! - `movement`: Movement results, views and the interpreter
//! - `rules`: Rule bundles and the square classifier
//! - `guide`: `Guide` façade over a shared catalog

pub mod catalog;
pub mod core;
pub mod error;
pub mod guide;
pub mod movement;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ColorGroup, GoToJailPolicy, GuideConfig, Square, SquareId, SquareKind};

pub use crate::catalog::SquareCatalog;

pub use crate::error::{GuideError, PathEnd, Result};

pub use crate::guide::Guide;

pub use crate::movement::{
    interpret, BusOptions, DualChoiceView, MoveKind, MoveOption, MovementInterpreter,
    MovementResult, MovementView, SingleMoveView, SpecialAction,
};

pub use crate::rules::{classify, BundleKey, RuleBundle, Scenario};
