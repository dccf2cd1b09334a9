//! The `Guide`: a shared catalog plus configuration.
//!
//! Most callers build one `Guide` at startup and keep it for the session.
//! It is cheap to clone (the catalog sits behind an `Arc`) and safe to use
//! from any number of threads.

use std::sync::Arc;

use crate::catalog::SquareCatalog;
use crate::core::{GuideConfig, Square, SquareId};
use crate::error::Result;
use crate::movement::{MovementInterpreter, MovementResult, MovementView};
use crate::rules::{classify, RuleBundle};

/// Entry point tying the interpreter and classifier to one board.
///
/// ## Example
///
/// ```
/// use board_guide::Guide;
/// use board_guide::core::SquareId;
///
/// let guide = Guide::standard();
///
/// let rules = guide.rules_for(SquareId::new(30)).unwrap().unwrap();
/// assert_eq!(rules.title, "Go To Jail");
///
/// let view = guide.interpret_json("null").unwrap();
/// assert!(view.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Guide {
    catalog: Arc<SquareCatalog>,
    config: GuideConfig,
}

impl Guide {
    /// Create a guide over `catalog` with the default configuration.
    pub fn new(catalog: impl Into<Arc<SquareCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            config: GuideConfig::default(),
        }
    }

    /// Guide over the classic board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(SquareCatalog::standard())
    }

    /// Replace the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: GuideConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &SquareCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Build the view for a movement result.
    pub fn interpret(&self, result: Option<&MovementResult>) -> Result<MovementView> {
        MovementInterpreter::new(&self.catalog, &self.config).interpret(result)
    }

    /// Parse an engine result (`null` for none) and build its view.
    pub fn interpret_json(&self, json: &str) -> Result<MovementView> {
        let result: Option<MovementResult> = serde_json::from_str(json)?;
        self.interpret(result.as_ref())
    }

    /// Rules for a square.
    #[must_use]
    pub fn classify(&self, square: &Square) -> Option<&'static RuleBundle> {
        classify(square)
    }

    /// Rules for the square at `id`. Fails if `id` is not on the board.
    pub fn rules_for(&self, id: SquareId) -> Result<Option<&'static RuleBundle>> {
        Ok(classify(self.catalog.resolve(id)?))
    }

    /// Rules for every square a view points at, skipping squares without any.
    pub fn rules_for_view(
        &self,
        view: &MovementView,
    ) -> Result<Vec<(SquareId, &'static RuleBundle)>> {
        let mut rules = Vec::new();
        for id in view.rule_targets() {
            if let Some(bundle) = self.rules_for(id)? {
                rules.push((id, bundle));
            }
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuideError;
    use crate::movement::MoveKind;

    #[test]
    fn test_rules_for() {
        let guide = Guide::standard();

        assert_eq!(guide.rules_for(SquareId::new(0)).unwrap().unwrap().title, "GO - Start Space");
        assert!(guide.rules_for(SquareId::new(39)).unwrap().is_none());
        assert!(matches!(guide.rules_for(SquareId::new(40)), Err(GuideError::UnresolvedSquare(_))));
    }

    #[test]
    fn test_rules_for_view() {
        let guide = Guide::standard();
        let result = MovementResult::new(MoveKind::Normal, SquareId::new(0), SquareId::new(7))
            .with_path((0..=7).map(SquareId::new));
        let view = guide.interpret(Some(&result)).unwrap();

        let rules = guide.rules_for_view(&view).unwrap();
        let titles: Vec<_> = rules.iter().map(|(id, r)| (id.raw(), r.title)).collect();
        assert_eq!(titles, [(0, "GO - Start Space"), (7, "Chance")]);
    }

    #[test]
    fn test_shared_catalog() {
        let guide = Guide::standard();
        let other = guide.clone();
        assert!(std::ptr::eq(guide.catalog(), other.catalog()));
    }

    #[test]
    fn test_interpret_json_errors() {
        let guide = Guide::standard();
        assert!(matches!(guide.interpret_json("{"), Err(GuideError::Json(_))));
    }
}
