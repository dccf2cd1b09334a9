//! Movement results and their presentation.
//!
//! ## Key Types
//!
//! - `MovementResult`: What the turn engine reports for one move
//! - `MoveKind`: Movement mode (`normal`, `mr_monopoly`, `question_mark`, `bus`)
//! - `MovementView`: Render-ready model (`Empty`, `Single`, `DualChoice`)
//! - `MovementInterpreter`: Builds views against a `SquareCatalog`

pub mod actions;
pub mod interpreter;
pub mod result;
pub mod view;

pub use actions::{label_for, render_actions, ActionLabel, ActionLabels, SpecialAction};
pub use interpreter::{interpret, move_title, MovementInterpreter, BUS_TITLE};
pub use result::{BusOptions, MoveKind, MoveOption, MovementResult};
pub use view::{
    Choice, ChoiceOption, DualChoiceView, GoBadge, MovementView, PathStep, SingleMoveView,
    SquareCard, StepRole, PATH_STEP_HEX,
};
