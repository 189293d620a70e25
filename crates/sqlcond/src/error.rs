//! Error types for sqlcond

use thiserror::Error;

/// Result type alias for condition building and rendering.
pub type CondResult<T> = Result<T, CondError>;

/// Errors recorded while building a [`Condition`](crate::Condition).
///
/// Builder methods never return these directly; the first one is kept on the
/// condition and surfaced by `render`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CondError {
    /// Placeholder count in a template does not match the supplied arguments.
    ///
    /// Also raised for an empty sequence argument, which would expand to `IN ()`.
    #[error(
        "placeholder/argument count mismatch: template '{template}' has {placeholders} '?', but {args} values provided"
    )]
    ArgCountMismatch {
        template: String,
        placeholders: usize,
        args: usize,
    },

    /// `set_group` / `set_order` called without any usable column.
    #[error("empty value passed to {0}")]
    EmptyValue(&'static str),

    /// `set_join` called with an empty table name.
    #[error("join table cannot be empty")]
    JoinTable,

    /// `set_join` called with an unknown join type.
    #[error("invalid join type: '{0}' (expected LEFT, RIGHT, INNER or CROSS)")]
    JoinType(String),

    /// A CROSS join was given an ON condition or arguments.
    #[error("CROSS JOIN does not accept a condition or arguments")]
    CrossJoin,

    /// Rendering produced more bind arguments than the configured limit.
    #[error("too many bind arguments: {args} exceeds the limit of {max}")]
    TooManyArgs { args: usize, max: usize },
}

impl CondError {
    /// Create a placeholder/argument mismatch error.
    pub fn arg_mismatch(template: impl Into<String>, placeholders: usize, args: usize) -> Self {
        Self::ArgCountMismatch {
            template: template.into(),
            placeholders,
            args,
        }
    }

    /// Check if this is a placeholder/argument mismatch.
    pub fn is_arg_mismatch(&self) -> bool {
        matches!(self, Self::ArgCountMismatch { .. })
    }

    /// Check if this error came from `set_join` validation.
    pub fn is_join_error(&self) -> bool {
        matches!(self, Self::JoinTable | Self::JoinType(_) | Self::CrossJoin)
    }
}
