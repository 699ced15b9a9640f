//! Visual styles a row can be presented in.

use crate::EdgeInsets;
use serde::{Deserialize, Serialize};

/// Position of a row inside a grouped block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum RowPosition {
    /// Alone in its block
    Single,
    /// First of several
    First,
    /// Neither first nor last
    Inner,
    /// Last of several
    Last,
}

impl RowPosition {
    /// Whether a separator is drawn below the row.
    pub fn border(&self) -> bool {
        matches!(self, RowPosition::First | RowPosition::Inner)
    }

    /// Which corners of the block are rounded at this position.
    pub fn corners(&self) -> Corners {
        match self {
            RowPosition::Single => Corners {
                top: true,
                bottom: true,
            },
            RowPosition::First => Corners {
                top: true,
                bottom: false,
            },
            RowPosition::Inner => Corners::default(),
            RowPosition::Last => Corners {
                top: false,
                bottom: true,
            },
        }
    }
}

/// Rounded corners of a row's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Corners {
    /// Top corners rounded
    pub top: bool,
    /// Bottom corners rounded
    pub bottom: bool,
}

/// How a row is presented.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ViewType {
    /// Full-width row with fixed side insets and a separator
    #[default]
    Legacy,
    /// Centred rounded block with inner insets
    Modern {
        /// Position inside the block
        position: RowPosition,
        /// Insets between block edge and content
        insets: EdgeInsets,
    },
}

impl ViewType {
    /// Corner rounding of the container.
    pub fn corners(&self) -> Corners {
        match self {
            ViewType::Legacy => Corners::default(),
            ViewType::Modern { position, .. } => position.corners(),
        }
    }
}
