//! Row layout error types.

/// Kinds of row layout errors.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum LayoutErrorKind {
    /// Width handed to the layout pass cannot hold any content
    #[display("Invalid layout width: {}", _0)]
    InvalidWidth(f64),
    /// Frames were requested before the item was measured
    #[display("Row has not been measured yet")]
    NotMeasured,
}

/// Layout error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Layout Error: {} at line {} in {}", kind, line, file)]
pub struct LayoutError {
    kind: LayoutErrorKind,
    line: u32,
    file: &'static str,
}

impl LayoutError {
    /// Create a new layout error with caller location tracking.
    #[track_caller]
    pub fn new(kind: LayoutErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LayoutErrorKind {
        &self.kind
    }
}
