//! Error types for the Courier crates.
//!
//! This crate provides the foundation error types used throughout the Courier workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use courier_error::{CourierResult, FetchError, FetchErrorKind};
//!
//! fn fetch_resource() -> CourierResult<Vec<u8>> {
//!     Err(FetchError::new(FetchErrorKind::NotFound("photo_42".to_string())))?
//! }
//!
//! match fetch_resource() {
//!     Ok(bytes) => println!("Got {} bytes", bytes.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod fetch;
mod layout;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{CourierError, CourierErrorKind, CourierResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use layout::{LayoutError, LayoutErrorKind};
