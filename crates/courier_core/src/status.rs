//! Observable fetch states.

use serde::{Deserialize, Serialize};

/// State of a resource as reported by the fetch manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaResourceStatus {
    /// Not in the local cache and not being fetched
    Remote {
        /// Fraction already cached from earlier partial fetches
        progress: f32,
    },
    /// Download in progress
    Fetching {
        /// Whether bytes are currently flowing
        is_active: bool,
        /// Completed fraction in `0.0..=1.0`
        progress: f32,
    },
    /// Download paused by the user
    Paused {
        /// Completed fraction in `0.0..=1.0`
        progress: f32,
    },
    /// Fully available locally
    Local,
    /// Last attempt failed
    Failed,
}

impl MediaResourceStatus {
    /// Completed fraction, `1.0` when local and `0.0` after a failure.
    pub fn progress(&self) -> f32 {
        match self {
            MediaResourceStatus::Remote { progress }
            | MediaResourceStatus::Fetching { progress, .. }
            | MediaResourceStatus::Paused { progress } => *progress,
            MediaResourceStatus::Local => 1.0,
            MediaResourceStatus::Failed => 0.0,
        }
    }
}

/// Where the bytes of a completed fetch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchResourceSourceType {
    /// Served from the local media cache
    Local,
    /// Downloaded from the network
    Remote {
        /// Total resource size, when known
        total_size: Option<i64>,
    },
}
