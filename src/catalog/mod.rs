//! Board catalog: validated, read-only square lookup.
//!
//! ## Key Types
//!
//! - `SquareCatalog`: Squares ordered by id, with name and kind lookup
//!
//! Catalogs come from a JSON dataset (`SquareCatalog::from_json`), from
//! squares built in code (`SquareCatalog::new`), or from the built-in
//! classic board (`SquareCatalog::standard`).

pub mod registry;
mod standard;

pub use registry::SquareCatalog;
