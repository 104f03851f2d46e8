use thiserror::Error;

/// Errors produced while constructing model values.
///
/// The filter pipeline itself has no failure domain (out-of-range slider
/// input is clamped, empty results are valid values), so this stays small.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A genre label did not match any known genre.
    #[error("unknown genre label: {0:?}")]
    UnknownGenre(String),
    /// A sort order label did not match any known ordering.
    #[error("unknown sort order: {0:?}")]
    UnknownSortOrder(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
