//! `courier-select` — package-subset selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`selector`] | `PackageSelector` — profit model and strategies      |
//! | [`cluster`]  | Seeded k-means over pickup points (two-phase strategy)|
//!
//! The selector is a pure function of `(catalog, graph, position)`: it
//! never mutates either, and the same inputs (and seed) always produce the
//! same selection.

pub mod cluster;
pub mod selector;


pub use selector::PackageSelector;
