use courier_core::PackageId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Referencing an id absent from the catalog is a caller programming
    /// error and fails loudly rather than silently no-opping.
    #[error("package {0} not found in catalog")]
    PackageNotFound(PackageId),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
