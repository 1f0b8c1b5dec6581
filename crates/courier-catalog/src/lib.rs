//! `courier-catalog` — the package catalog.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`package`] | `Package` — one deliverable unit                    |
//! | [`catalog`] | `Catalog` — owns every known package                |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                  |
//!
//! The catalog is the only mutable state in the planner core.  Selector
//! and optimizer read it; only the decision loop mutates it, through the
//! explicit `mark_delivered` / `set_dropoff` operations.

pub mod catalog;
pub mod error;
pub mod package;


pub use catalog::{Catalog, DEFAULT_REWARD};
pub use error::{CatalogError, CatalogResult};
pub use package::Package;
