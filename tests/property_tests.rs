//! Property-based tests for movement interpretation and classification.
//!
//! Results are generated by walking the classic board, so every one is
//! something a well-behaved engine could produce.

use board_guide::catalog::SquareCatalog;
use board_guide::core::{Square, SquareId};
use board_guide::movement::{interpret, render_actions, MoveKind, MovementResult, SpecialAction};
use board_guide::rules::classify;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = MoveKind> {
    prop_oneof![
        Just(MoveKind::Normal),
        Just(MoveKind::MrMonopoly),
        Just(MoveKind::QuestionMark),
    ]
}

fn walked_result(
    catalog: &SquareCatalog,
    kind: MoveKind,
    start: u32,
    spaces: u32,
) -> MovementResult {
    let (path, passed_go) = catalog.walk(SquareId::new(start), spaces);
    let destination = *path.last().unwrap();
    MovementResult::new(kind, SquareId::new(start), destination)
        .with_path(path)
        .with_passed_go(passed_go)
}

proptest! {
    #[test]
    fn walked_moves_always_interpret(
        kind in kind_strategy(),
        start in 0u32..40,
        spaces in 0u32..=24,
    ) {
        let catalog = SquareCatalog::standard();
        let result = walked_result(&catalog, kind, start, spaces);

        let view = interpret(Some(&result), &catalog).unwrap();
        let single = view.as_single().unwrap();

        prop_assert_eq!(single.kind, kind);
        prop_assert_eq!(single.steps, Some(spaces as usize));
        prop_assert_eq!(single.start.id, SquareId::new(start));
        prop_assert_eq!(single.landed.id, SquareId::new((start + spaces) % 40));
        if spaces == 0 {
            prop_assert!(single.path.is_empty());
        } else {
            prop_assert_eq!(single.path.len(), spaces as usize + 1);
        }
    }

    #[test]
    fn go_badge_follows_wrap(start in 0u32..40, spaces in 0u32..=24) {
        let catalog = SquareCatalog::standard();
        let result = walked_result(&catalog, MoveKind::Normal, start, spaces);

        let view = interpret(Some(&result), &catalog).unwrap();
        prop_assert_eq!(view.as_single().unwrap().passed_go(), start + spaces >= 40);
    }

    #[test]
    fn interpretation_is_idempotent(
        kind in kind_strategy(),
        start in 0u32..40,
        spaces in 0u32..=12,
    ) {
        let catalog = SquareCatalog::standard();
        let result = walked_result(&catalog, kind, start, spaces)
            .with_action("check_property_ownership");

        let first = interpret(Some(&result), &catalog).unwrap();
        let second = interpret(Some(&result), &catalog).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendered_actions_are_known_and_ordered(tags in prop::collection::vec("[a-z_]{1,24}", 0..8)) {
        let labels = render_actions(&tags, 200);
        let known: Vec<&String> = tags
            .iter()
            .filter(|t| SpecialAction::from_tag(t).is_some())
            .collect();

        prop_assert_eq!(labels.len(), known.len());
        for (label, tag) in labels.iter().zip(known) {
            prop_assert_eq!(label.action.tag(), tag.as_str());
        }
    }

    #[test]
    fn classification_ignores_price_and_description(
        id in 0u32..40,
        price in any::<u32>(),
        description in ".{0,32}",
    ) {
        let catalog = SquareCatalog::standard();
        let square = catalog.lookup(SquareId::new(id)).unwrap();
        let decorated = Square {
            price: Some(price),
            description: Some(description),
            ..square.clone()
        };

        prop_assert_eq!(classify(square), classify(&decorated));
    }
}
