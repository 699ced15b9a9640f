//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, FetchError, LayoutError};

/// Foundation error enum collecting every error produced in the workspace.
///
/// # Examples
///
/// ```
/// use courier_error::{CourierError, ConfigError};
///
/// let config_err = ConfigError::new("Missing [fetch] table");
/// let err: CourierError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CourierErrorKind {
    /// Media fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Row measurement or layout error
    #[from(LayoutError)]
    Layout(LayoutError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Courier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use courier_error::{CourierResult, ConfigError};
///
/// fn might_fail() -> CourierResult<()> {
///     Err(ConfigError::new("photo_display_width must be positive"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Courier Error: {}", _0)]
pub struct CourierError(Box<CourierErrorKind>);

impl CourierError {
    /// Create a new error from a kind.
    pub fn new(kind: CourierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CourierErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CourierErrorKind
impl<T> From<T> for CourierError
where
    T: Into<CourierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Courier operations.
pub type CourierResult<T> = std::result::Result<T, CourierError>;
