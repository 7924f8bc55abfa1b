//! Error types for sqlrender

use thiserror::Error;

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors produced while rendering a statement model.
///
/// All variants are unrecoverable at this layer: a failed render returns
/// no statement object, partial or otherwise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A select model was rendered with no query expressions at all.
    #[error("select model contains no query expressions")]
    MissingQueryExpressions,

    /// An update or insert was rendered from an empty assignment list.
    #[error("set clause contains no assignments")]
    EmptySetClause,

    /// Two independently rendered fragments produced the same parameter key.
    ///
    /// This indicates a broken sequence-sharing invariant upstream: every
    /// fragment of one statement must mint its parameter names from the
    /// same [`ParameterSequence`](crate::ParameterSequence).
    #[error("duplicate parameter name '{name}': fragments did not share one parameter sequence")]
    DuplicateParameter { name: String },
}

impl RenderError {
    /// Create a duplicate-parameter error for the given key.
    pub fn duplicate_parameter(name: impl Into<String>) -> Self {
        Self::DuplicateParameter { name: name.into() }
    }
}
