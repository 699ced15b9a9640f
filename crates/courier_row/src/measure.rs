//! Text measurement seam.
//!
//! Shaping and rasterising text belongs to the host toolkit. Rows only need
//! the size a string occupies at a given width, which a [`TextMeasurer`]
//! supplies.

use crate::Size;
use serde::{Deserialize, Serialize};

/// Which piece of the row a string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum TextRole {
    /// The small accent label above the text
    Label,
    /// The body text
    Body,
    /// The "show more" affordance
    More,
}

/// Result of measuring a string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextLayout {
    /// Bounding size of the laid out text
    pub size: Size,
    /// Number of lines after wrapping, capped by the line limit
    pub line_count: usize,
    /// Whether lines were dropped to honour the line limit
    pub truncated: bool,
}

/// Measures strings for layout.
pub trait TextMeasurer: Send + Sync {
    /// Lays out `text` within `width`, keeping at most `max_lines` lines when given.
    ///
    /// An infinite `width` disables wrapping.
    fn measure(&self, text: &str, role: TextRole, width: f64, max_lines: Option<usize>) -> TextLayout;
}

/// Measurer assuming every character has the same advance.
///
/// Wraps greedily at whitespace and hard-breaks words longer than a line.
/// Deterministic, which makes it suitable for tests and terminal hosts.
///
/// # Examples
///
/// ```
/// use courier_row::{FixedWidthMeasurer, TextMeasurer, TextRole};
///
/// let measurer = FixedWidthMeasurer::new(10.0, 20.0);
/// let layout = measurer.measure("hello brave new world", TextRole::Body, 110.0, None);
/// assert_eq!(layout.line_count, 2);
/// assert_eq!(layout.size.height, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    char_width: f64,
    line_height: f64,
}

impl FixedWidthMeasurer {
    /// Creates a measurer with the given advance and line height.
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    /// Character counts of each wrapped line.
    fn wrap(&self, text: &str, width: f64) -> Vec<usize> {
        let per_line = if width.is_finite() && self.char_width > 0.0 {
            ((width / self.char_width).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut current = 0usize;
            for word in paragraph.split_whitespace() {
                let mut len = word.chars().count();
                let needed = if current == 0 { len } else { current + 1 + len };
                if needed <= per_line {
                    current = needed;
                    continue;
                }
                if current > 0 {
                    lines.push(current);
                }
                while len > per_line {
                    lines.push(per_line);
                    len -= per_line;
                }
                current = len;
            }
            lines.push(current);
        }
        lines
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str, _role: TextRole, width: f64, max_lines: Option<usize>) -> TextLayout {
        if text.is_empty() {
            return TextLayout::default();
        }

        let mut lines = self.wrap(text, width);
        let truncated = match max_lines {
            Some(limit) if limit > 0 && lines.len() > limit => {
                lines.truncate(limit);
                true
            }
            _ => false,
        };

        let widest = lines.iter().copied().max().unwrap_or(0) as f64 * self.char_width;
        TextLayout {
            size: Size::new(widest.min(width), lines.len() as f64 * self.line_height),
            line_count: lines.len(),
            truncated,
        }
    }
}
