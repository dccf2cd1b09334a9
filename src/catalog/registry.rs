//! Square catalog for board lookup.
//!
//! The `SquareCatalog` stores every square on the board, ordered by id.
//! It is built once, validated, and then only read, so a single catalog
//! can be shared (e.g. behind an `Arc`) by any number of callers.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::core::{Square, SquareId, SquareKind};
use crate::error::{GuideError, Result};

/// Accepted dataset shapes: `{"squares": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    Wrapped { squares: Vec<Square> },
    Bare(Vec<Square>),
}

/// Read-only catalog of board squares.
///
/// ## Example
///
/// ```
/// use board_guide::catalog::SquareCatalog;
/// use board_guide::core::{Square, SquareId, SquareKind};
///
/// let catalog = SquareCatalog::new(vec![
///     Square::new(SquareId::new(1), "Mediterranean Avenue", SquareKind::Property),
///     Square::new(SquareId::new(0), "GO", SquareKind::Corner),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.lookup(SquareId::new(0)).unwrap().name, "GO");
/// ```
#[derive(Clone, Debug)]
pub struct SquareCatalog {
    /// Squares indexed by position; `squares[i].id == i`.
    squares: Vec<Square>,
    /// First square carrying each name.
    by_name: FxHashMap<String, SquareId>,
}

impl SquareCatalog {
    /// Build a catalog, validating that ids are unique and contiguous from 0.
    ///
    /// Squares may be given in any order.
    pub fn new(mut squares: Vec<Square>) -> Result<Self> {
        if squares.is_empty() {
            return Err(GuideError::EmptyCatalog);
        }

        squares.sort_by_key(|s| s.id);
        for (position, square) in squares.iter().enumerate() {
            let expected = SquareId::new(position as u32);
            if square.id != expected {
                if position > 0 && squares[position - 1].id == square.id {
                    return Err(GuideError::DuplicateSquare(square.id));
                }
                return Err(GuideError::NonContiguousCatalog {
                    expected,
                    found: square.id,
                });
            }
        }

        debug!(squares = squares.len(), "built square catalog");
        Ok(Self::from_ordered(squares))
    }

    /// Parse and validate a board dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let squares = match dataset {
            Dataset::Wrapped { squares } | Dataset::Bare(squares) => squares,
        };
        Self::new(squares)
    }

    /// Index squares already known to be ordered and contiguous.
    pub(crate) fn from_ordered(squares: Vec<Square>) -> Self {
        let mut by_name = FxHashMap::default();
        for square in &squares {
            by_name.entry(square.name.clone()).or_insert(square.id);
        }
        Self { squares, by_name }
    }

    /// Look up a square by id.
    #[must_use]
    pub fn lookup(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(id.index())
    }

    /// Look up a square, failing with `UnresolvedSquare` if it is absent.
    pub fn resolve(&self, id: SquareId) -> Result<&Square> {
        self.lookup(id).ok_or(GuideError::UnresolvedSquare(id))
    }

    /// Check if a square id is on the board.
    #[must_use]
    pub fn contains(&self, id: SquareId) -> bool {
        id.index() < self.squares.len()
    }

    /// All squares, ordered by id.
    #[must_use]
    pub fn all(&self) -> &[Square] {
        &self.squares
    }

    /// Iterate over all squares in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Number of squares on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false for a built catalog; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The last square before the board wraps back to GO.
    #[must_use]
    pub fn last_id(&self) -> SquareId {
        SquareId::new(self.squares.len().saturating_sub(1) as u32)
    }

    /// First square with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Square> {
        self.by_name.get(name).and_then(|&id| self.lookup(id))
    }

    /// Squares of a given kind, in board order.
    pub fn find_by_kind<'a>(&'a self, kind: &'a SquareKind) -> impl Iterator<Item = &'a Square> {
        self.squares.iter().filter(move |s| &s.kind == kind)
    }

    /// The square `spaces` steps clockwise from `from`.
    #[must_use]
    pub fn advance(&self, from: SquareId, spaces: u32) -> SquareId {
        let size = self.squares.len() as u64;
        SquareId::new(((u64::from(from.raw()) + u64::from(spaces)) % size) as u32)
    }

    /// The squares walked moving `spaces` clockwise from `from`, inclusive
    /// of both ends, and whether the walk passed GO.
    #[must_use]
    pub fn walk(&self, from: SquareId, spaces: u32) -> (Vec<SquareId>, bool) {
        let mut path = Vec::with_capacity((spaces as usize).min(self.squares.len()) + 1);
        let mut passed_go = false;
        let mut current = from;
        path.push(current);
        for _ in 0..spaces {
            let next = self.advance(current, 1);
            if next.raw() == 0 {
                passed_go = true;
            }
            path.push(next);
            current = next;
        }
        (path, passed_go)
    }

    /// Next square of `kind` strictly clockwise from `from`.
    #[must_use]
    pub fn next_of_kind(&self, from: SquareId, kind: &SquareKind) -> Option<SquareId> {
        (1..=self.squares.len() as u32)
            .map(|step| self.advance(from, step))
            .find(|&id| self.lookup(id).is_some_and(|s| &s.kind == kind))
    }
}
