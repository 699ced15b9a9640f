//! Configuration error types.

use std::fmt;

/// Configuration error with source location and, when known, the TOML
/// section it concerns.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Section of `courier.toml` the error concerns
    pub section: Option<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse courier.toml");
    /// assert!(err.message.contains("courier.toml"));
    /// assert!(err.section.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            section: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError about one section of the configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_error::ConfigError;
    ///
    /// let err = ConfigError::in_section("row", "max_collapsed_lines must be at least 1");
    /// assert!(err.to_string().starts_with("Configuration Error in [row]"));
    /// ```
    #[track_caller]
    pub fn in_section(section: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            section: Some(section),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section {
            Some(section) => write!(f, "Configuration Error in [{}]: ", section)?,
            None => write!(f, "Configuration Error: ")?,
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
