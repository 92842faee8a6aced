use thiserror::Error;

/// Errors from header lookup construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Two canonical fields claim the same alias. Indicates a corrupt
    /// schema definition; should never occur with a curated registry.
    #[error("alias '{alias}' is claimed by both '{first}' and '{second}'")]
    HeaderConflict {
        alias: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, HeaderError>;
