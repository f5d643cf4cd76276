use serde::{Deserialize, Serialize};

use crate::SyncDepth;

/// Sync-related notifications a wallet manager reports to its listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WalletManagerEvent {
    SyncStarted,

    /// `timestamp` is the Unix time (seconds) of the block most recently
    /// processed, when the engine knows it.
    SyncProgress {
        timestamp: Option<i64>,
        percent_complete: f32,
    },

    SyncStopped { reason: String },

    /// The engine suggests the caller resync starting from `depth`.
    SyncRecommended { depth: SyncDepth },

    BlockHeightUpdated { height: u64 },
}

impl WalletManagerEvent {
    /// The recommended depth, if this is a [`WalletManagerEvent::SyncRecommended`].
    pub fn recommended_depth(&self) -> Option<SyncDepth> {
        match self {
            Self::SyncRecommended { depth } => Some(*depth),
            _ => None,
        }
    }
}
