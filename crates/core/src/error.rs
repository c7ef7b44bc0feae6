//! Value object error model.

use thiserror::Error;

/// Result type used by every value object operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Failure raised while building or re-building a value object.
///
/// The two variants are different classes of failure: `InvalidSignificance` is a
/// data problem reported by the concrete type, `IllegalReconstruction` is a
/// programming defect caught by the abstraction itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The raw input does not describe a valid instance of `kind`.
    #[error("invalid {kind}: {reason}")]
    InvalidSignificance { kind: &'static str, reason: String },

    /// Initialization was attempted on an already-initialized value object.
    #[error("cannot change an immutable value object ({kind})")]
    IllegalReconstruction { kind: &'static str },
}

impl ValueError {
    pub fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSignificance {
            kind,
            reason: reason.into(),
        }
    }

    pub fn reconstruction(kind: &'static str) -> Self {
        Self::IllegalReconstruction { kind }
    }

    pub fn is_invalid_significance(&self) -> bool {
        matches!(self, Self::InvalidSignificance { .. })
    }

    pub fn is_illegal_reconstruction(&self) -> bool {
        matches!(self, Self::IllegalReconstruction { .. })
    }

    /// Label of the value object type that raised the error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSignificance { kind, .. } | Self::IllegalReconstruction { kind } => kind,
        }
    }
}
