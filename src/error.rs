use crate::catalog::CatalogError;
use crate::partition::DecodeError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the partition accessor
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Partition descriptor error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Reader error: {0}")]
    Reader(#[source] Box<dyn std::error::Error + Send + Sync>),
}
