//! Courier - chat media fetch dispatch
//!
//! Courier forwards file and photo downloads of a chat client to an injected
//! fetch manager and media cache, and provides the headless model of the
//! label/text rows used to display profile and message details.
//!
//! # Features
//!
//! - **Fetch dispatch**: start, cancel, pause and observe interactive fetches
//!   keyed by category, chat and message
//! - **Photo selection**: picks the representation fitting the display size
//! - **Row model**: label/text rows with "show more", copy, gift, translate,
//!   hide/reveal and launch-app affordances
//! - **Configuration**: bundled TOML defaults with user overrides
//! - **Telemetry**: `tracing` spans exported through OpenTelemetry
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use courier::{CourierConfig, FetchContext, message_media_file_interactive_fetched};
//!
//! let config = CourierConfig::load()?;
//! let context = FetchContext::new(fetch_manager, media_box).with_config(config.fetch);
//! let done = message_media_file_interactive_fetched(
//!     &context, message_id, &message_reference, &file,
//!     ByteRangeSet::full(), true, FetchPriority::UserInitiated,
//! );
//! ```
//!
//! # Cargo Features
//!
//! - `row` - Label/text row model (default)
//!
//! # Architecture
//!
//! - `courier_error` - Error types
//! - `courier_core` - Data model, configuration and telemetry
//! - `courier_interface` - `FetchManager` and `MediaBox` collaborator traits
//! - `courier_fetch` - Fetch dispatch facade
//! - `courier_row` - Label/text row model
//!
//! This crate (`courier`) re-exports everything for convenience.

pub use courier_core::*;
pub use courier_error::*;
pub use courier_fetch::*;
pub use courier_interface::*;

#[cfg(feature = "row")]
pub use courier_row::*;
