//! Core data types for the Courier media fetch crates.
//!
//! This crate provides the data model shared by the fetch dispatch facade and
//! its collaborators: identifiers, media descriptors, media references, fetch
//! categories, priorities, statuses and byte range sets. It also loads the
//! layered TOML configuration and installs telemetry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod ids;
mod location;
mod media;
mod priority;
mod ranges;
mod reference;
mod settings;
mod status;
mod telemetry;

pub use settings::{
    CourierConfig, FetchConfig, FetchConfigBuilder, RowConfig, RowConfigBuilder, TelemetryConfig,
};
pub use category::{FetchCategory, StatsCategory, UserContentType};
pub use ids::{MediaResourceId, MessageId, PeerId};
pub use location::{FetchKey, FetchLocation, FetchLocationKey};
pub use media::{
    FileAttribute, ImageRepresentation, Media, MediaFile, MediaFileBuilder, MediaImage,
    MediaResource, PixelDimensions,
};
pub use priority::{FetchPriority, MediaBoxFetchPriority};
pub use ranges::ByteRangeSet;
pub use reference::{
    AnyMediaReference, FileMediaReference, ImageMediaReference, MediaReference,
    MediaResourceReference, MessageReference, ReferenceLocation, UserLocation,
};
pub use status::{FetchResourceSourceType, MediaResourceStatus};
pub use telemetry::{init_telemetry, shutdown_telemetry};
