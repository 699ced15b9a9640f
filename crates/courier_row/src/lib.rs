//! Headless label/text table row.
//!
//! A row shows an accent label above a block of text and can offer:
//!
//! - truncation to a few lines behind a "show more" affordance
//! - a copy button, or a gift button in its place
//! - a hide/reveal toggle that masks the text with asterisks
//! - copy, translate and caller-supplied context menu entries
//! - a launch-app footer button
//!
//! Text measurement, side effects and language detection are injected
//! through [`TextMeasurer`], [`RowHandler`] and [`LanguageDetector`]; colours
//! come from an explicit [`RowTheme`]. Layout metrics come from
//! [`courier_core::RowConfig`].
//!
//! # Examples
//!
//! ```
//! use courier_core::RowConfig;
//! use courier_row::{
//!     FixedWidthMeasurer, NoopRowHandler, RowTheme, TextAndLabelItem, TextAndLabelOptions,
//!     TextAndLabelRowView,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut item = TextAndLabelItem::new(
//!     RowConfig::default(),
//!     RowTheme::default(),
//!     Arc::new(FixedWidthMeasurer::new(10.0, 20.0)),
//!     Arc::new(NoopRowHandler),
//!     TextAndLabelOptions::new("bio", "Ships media around"),
//! );
//!
//! let mut view = TextAndLabelRowView::new();
//! let layout = view.layout(&mut item, 400.0)?;
//! assert_eq!(layout.container.size.height, item.height()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod geometry;
mod handler;
mod item;
mod measure;
mod theme;
mod view;
mod view_type;

pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use handler::{
    LanguageDetector, NoopRowHandler, RowHandler, TranslateRequest, TranslateSettings,
};
pub use item::{
    ContextMenuItem, CustomMenuItem, MenuAction, MoreState, TextAndLabelItem,
    TextAndLabelOptions, TextAndLabelOptionsBuilder, display_text,
};
pub use measure::{FixedWidthMeasurer, TextLayout, TextMeasurer, TextRole};
pub use theme::{Color, RowTheme};
pub use view::{
    Icon, IconButton, LaunchButton, RowEvent, RowEventOutcome, RowViewLayout,
    TextAndLabelRowView,
};
pub use view_type::{Corners, RowPosition, ViewType};
