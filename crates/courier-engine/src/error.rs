//! Engine error type.

use thiserror::Error;

/// Errors surfaced by the decision loop.
///
/// Planning itself never fails (unroutable legs degrade to straight-line
/// distances); errors only come from catalog bookkeeping, where a plan
/// referencing an unknown package means the caller's state has diverged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] courier_catalog::CatalogError),
}

pub type EngineResult<T> = Result<T, EngineError>;
