//! Errors raised while assembling option structs from builders.

/// Why a builder could not produce its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A field without a default was never set
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// The assembled value is inconsistent
    #[display("Validation failed: {}", _0)]
    ValidationFailed(String),
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use courier_error::{BuilderError, BuilderErrorKind, CourierError};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("label".to_string()));
/// let err: CourierError = err.into();
/// assert!(err.to_string().contains("Missing required field: label"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
