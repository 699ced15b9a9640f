//! Media fetch error types.

/// Kinds of fetch errors reported by a fetch manager or media cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// Unclassified failure from the underlying transport
    #[display("Fetch failed: {}", _0)]
    Generic(String),
    /// The remote resource does not exist anymore
    #[display("Resource not found: {}", _0)]
    NotFound(String),
    /// The fetch was cancelled before completion
    #[display("Fetch cancelled: {}", _0)]
    Cancelled(String),
    /// The requested byte range lies outside the resource
    #[display("Invalid byte range: {}", _0)]
    InvalidRange(String),
    /// The local media cache could not persist the data
    #[display("Media cache failure: {}", _0)]
    Storage(String),
}

/// Fetch error with location tracking.
///
/// # Examples
///
/// ```
/// use courier_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::NotFound("doc_7".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// assert_eq!(err.kind(), &FetchErrorKind::NotFound("doc_7".to_string()));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FetchErrorKind {
        &self.kind
    }
}
