//! Movement interpretation: `MovementResult` -> `MovementView`.
//!
//! ## Dispatch
//!
//! - `None` input renders as `MovementView::Empty`.
//! - `bus` results resolve both option destinations into a `DualChoiceView`.
//! - Every other kind resolves start and destination into a `SingleMoveView`
//!   with its path, passed-GO badge and special-action labels.
//!
//! Interpretation is pure: the same result and catalog always give the
//! same view, and nothing is cached between calls.

use tracing::{debug, instrument, warn};

use crate::catalog::SquareCatalog;
use crate::core::{GoToJailPolicy, GuideConfig, Square, SquareId};
use crate::error::{GuideError, PathEnd, Result};
use crate::rules::BUS_TICKET;

use super::actions::{render_actions, SpecialAction};
use super::result::{BusOptions, MoveKind, MoveOption, MovementResult};
use super::view::{
    Choice, ChoiceOption, DualChoiceView, GoBadge, MovementView, PathStep, SingleMoveView,
    SquareCard, StepRole, PATH_STEP_HEX,
};

/// Title of a bus choice, whatever the engine's message says.
pub const BUS_TITLE: &str = "🚌 Bus Choice!";

/// Titles of single-destination moves.
const MOVE_TITLES: [(MoveKind, &str); 3] = [
    (MoveKind::MrMonopoly, "🎩 Mr. Monopoly!"),
    (MoveKind::QuestionMark, "❓ Question Mark!"),
    (MoveKind::Normal, "🎲 Movement Result"),
];

const START_LABEL: &str = "Starting Position";
const LANDED_LABEL: &str = "Destination";
const OPTION_LABEL: &str = "You'll land on";

/// Title shown for a move of `kind`. `None` for bus results, which use
/// [`BUS_TITLE`].
#[must_use]
pub fn move_title(kind: MoveKind) -> Option<&'static str> {
    MOVE_TITLES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, title)| *title)
}

/// Turns movement results into views against one catalog.
///
/// ## Example
///
/// ```
/// use board_guide::catalog::SquareCatalog;
/// use board_guide::core::{GuideConfig, SquareId};
/// use board_guide::movement::{MoveKind, MovementInterpreter, MovementResult};
///
/// let catalog = SquareCatalog::standard();
/// let config = GuideConfig::default();
/// let interpreter = MovementInterpreter::new(&catalog, &config);
///
/// let result = MovementResult::new(MoveKind::Normal, SquareId::new(0), SquareId::new(4))
///     .with_path([0, 1, 2, 3, 4].map(SquareId::new));
/// let view = interpreter.interpret(Some(&result)).unwrap();
///
/// let single = view.as_single().unwrap();
/// assert_eq!(single.landed.name, "Income Tax");
/// assert_eq!(single.steps, Some(4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MovementInterpreter<'a> {
    catalog: &'a SquareCatalog,
    config: &'a GuideConfig,
}

impl<'a> MovementInterpreter<'a> {
    #[must_use]
    pub fn new(catalog: &'a SquareCatalog, config: &'a GuideConfig) -> Self {
        Self { catalog, config }
    }

    /// Build the view for `result`.
    ///
    /// Fails with `UnresolvedSquare` when a referenced square is missing
    /// from the catalog, with `InvalidModeOptions` when bus options are
    /// missing from a bus result or present on any other kind, and with
    /// `EmptyPath` when any result carries an empty path.
    #[instrument(level = "debug", skip_all)]
    pub fn interpret(&self, result: Option<&MovementResult>) -> Result<MovementView> {
        let Some(result) = result else {
            debug!("no movement result");
            return Ok(MovementView::Empty);
        };

        debug!(kind = %result.kind, "interpreting movement result");
        if result.path.as_ref().is_some_and(Vec::is_empty) {
            return Err(GuideError::EmptyPath);
        }

        match (result.kind, result.options.as_ref()) {
            (MoveKind::Bus, Some(options)) => {
                self.dual_choice(result, options).map(MovementView::DualChoice)
            }
            (MoveKind::Bus, None) => Err(GuideError::InvalidModeOptions {
                kind: result.kind,
                reason: "bus options are missing",
            }),
            (_, Some(_)) => Err(GuideError::InvalidModeOptions {
                kind: result.kind,
                reason: "only bus results carry options",
            }),
            (_, None) => self.single_move(result).map(MovementView::Single),
        }
    }

    fn dual_choice(
        &self,
        result: &MovementResult,
        options: &BusOptions,
    ) -> Result<DualChoiceView> {
        Ok(DualChoiceView {
            title: BUS_TITLE,
            message: non_empty(&result.message),
            normal: self.choice_option(Choice::Normal, &options.normal)?,
            bus: self.choice_option(Choice::Bus, &options.bus)?,
            rules: &BUS_TICKET,
            tip: non_empty(&result.tip),
        })
    }

    fn choice_option(&self, choice: Choice, option: &MoveOption) -> Result<ChoiceOption> {
        let square = self.catalog.resolve(option.destination)?;
        let summary = match choice {
            Choice::Normal => format!("Move {} spaces", option.movement),
            Choice::Bus => "Jump to next Bus Ticket".to_string(),
        };

        Ok(ChoiceOption {
            choice,
            heading: choice.heading(),
            icon: choice.icon(),
            square: SquareCard::new(square, OPTION_LABEL, false),
            movement: option.movement,
            summary,
            go_badge: option.passed_go.then(|| GoBadge::preview(self.config.go_salary)),
        })
    }

    fn single_move(&self, result: &MovementResult) -> Result<SingleMoveView> {
        let start_id = result.start_position.ok_or(GuideError::MissingPosition {
            kind: result.kind,
            field: "startPosition",
        })?;
        let landed_id = result.destination.ok_or(GuideError::MissingPosition {
            kind: result.kind,
            field: "destination",
        })?;

        let start = self.catalog.resolve(start_id)?;
        let landed = self.catalog.resolve(landed_id)?;
        let forced_to_jail = self.is_forced_to_jail(result, landed_id);

        if let Some(path) = &result.path {
            self.check_path(path, start_id, landed_id, result.passed_go || forced_to_jail)?;
        }

        let suppress_go =
            forced_to_jail && self.config.go_to_jail_policy == GoToJailPolicy::SuppressBadge;
        if suppress_go && result.passed_go {
            warn!(destination = %landed_id, "hiding passed-GO badge on a trip to jail");
        }

        Ok(SingleMoveView {
            kind: result.kind,
            title: move_title(result.kind).unwrap_or(BUS_TITLE),
            message: non_empty(&result.message),
            start: SquareCard::new(start, START_LABEL, false),
            landed: SquareCard::new(landed, LANDED_LABEL, true),
            path: result
                .path
                .as_deref()
                .map(|path| path_steps(path, start, landed))
                .unwrap_or_default(),
            steps: result.steps(),
            go_badge: (result.passed_go && !suppress_go)
                .then(|| GoBadge::collected(self.config.go_salary)),
            special_actions: render_actions(&result.special_actions, self.config.go_salary),
            tip: non_empty(&result.tip),
        })
    }

    /// The result sends the player to jail rather than just visiting.
    fn is_forced_to_jail(&self, result: &MovementResult, landed: SquareId) -> bool {
        landed == self.config.jail_square && result.has_action(SpecialAction::InJail.tag())
    }

    fn check_path(
        &self,
        path: &[SquareId],
        start: SquareId,
        landed: SquareId,
        go_allowed: bool,
    ) -> Result<()> {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return Err(GuideError::EmptyPath);
        };
        if !self.config.validate_paths {
            return Ok(());
        }

        if first != start {
            return Err(GuideError::PathMismatch {
                end: PathEnd::First,
                expected: start,
                found: first,
            });
        }
        if last != landed {
            return Err(GuideError::PathMismatch {
                end: PathEnd::Last,
                expected: landed,
                found: last,
            });
        }

        if !go_allowed {
            let board_end = self.catalog.last_id();
            if let Some(step) = path
                .windows(2)
                .find(|step| step[0] == board_end && step[1] == SquareId::new(0))
            {
                return Err(GuideError::WrapWithoutGo {
                    from: step[0],
                    to: step[1],
                });
            }
        }
        Ok(())
    }
}

/// Engine text worth showing. Blank strings render as nothing.
fn non_empty(text: &Option<String>) -> Option<String> {
    text.as_ref().filter(|t| !t.is_empty()).cloned()
}

/// Path visualization: endpoints in their square colour, everything in
/// between neutral. A single-square path shows nothing.
fn path_steps(path: &[SquareId], start: &Square, landed: &Square) -> Vec<PathStep> {
    if path.len() < 2 {
        return Vec::new();
    }

    let last = path.len() - 1;
    path.iter()
        .enumerate()
        .map(|(index, &id)| {
            let (role, color_hex) = match index {
                0 => (StepRole::Start, start.color_hex()),
                i if i == last => (StepRole::End, landed.color_hex()),
                _ => (StepRole::Intermediate, PATH_STEP_HEX),
            };
            PathStep { id, role, color_hex }
        })
        .collect()
}

/// Interpret with the default configuration.
///
/// ```
/// use board_guide::catalog::SquareCatalog;
/// use board_guide::movement::interpret;
///
/// let view = interpret(None, &SquareCatalog::standard()).unwrap();
/// assert!(view.is_empty());
/// ```
pub fn interpret(result: Option<&MovementResult>, catalog: &SquareCatalog) -> Result<MovementView> {
    MovementInterpreter::new(catalog, &GuideConfig::default()).interpret(result)
}
