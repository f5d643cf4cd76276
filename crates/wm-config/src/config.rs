use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wm_sync::SyncDepth;

use crate::ConfigError;

/// Persisted settings for a single wallet manager.
///
/// `sync_depth` is written as its one-byte wire tag in every encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletManagerConfig {
    /// Network identifier, e.g. `"bitcoin-mainnet"`.
    pub network: String,

    /// Where a requested resync starts. Defaults to
    /// [`SyncDepth::FromLastTrustedBlock`].
    pub sync_depth: SyncDepth,

    /// Block height at which the account was created, if known.
    pub creation_height: Option<u64>,
}

/// The same record as [`WalletManagerConfig`] with the sync depth left as a
/// raw tag, so a reader can decide what to do with a tag it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWalletManagerConfig {
    pub network: String,
    pub sync_depth: u8,
    pub creation_height: Option<u64>,
}

impl Default for WalletManagerConfig {
    fn default() -> Self {
        Self {
            network: String::new(),
            sync_depth: SyncDepth::FromLastTrustedBlock,
            creation_height: None,
        }
    }
}

impl WalletManagerConfig {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ..Self::default()
        }
    }

    pub fn with_sync_depth(mut self, depth: SyncDepth) -> Self {
        self.sync_depth = depth;
        self
    }

    pub fn with_creation_height(mut self, height: u64) -> Self {
        self.creation_height = Some(height);
        self
    }

    /// Decode the raw record, substituting `fallback` when the stored tag is
    /// not a known [`SyncDepth`].
    pub fn resolve(raw: RawWalletManagerConfig, fallback: SyncDepth) -> Self {
        let sync_depth = match SyncDepth::try_from(raw.sync_depth) {
            Ok(depth) => depth,
            Err(err) => {
                warn!(
                    network = %raw.network,
                    tag = raw.sync_depth,
                    fallback = %fallback,
                    "{err}; using fallback sync depth"
                );
                fallback
            }
        };

        Self {
            network: raw.network,
            sync_depth,
            creation_height: raw.creation_height,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a bincode record, refusing an unknown sync depth tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let raw: RawWalletManagerConfig = bincode::deserialize(bytes)?;
        let config = Self::try_from(raw)?;
        debug!(network = %config.network, sync_depth = %config.sync_depth, "loaded wallet manager config");
        Ok(config)
    }

    /// Decode a bincode record, falling back to `fallback` on an unknown
    /// sync depth tag.
    pub fn from_bytes_or(bytes: &[u8], fallback: SyncDepth) -> Result<Self, ConfigError> {
        let raw: RawWalletManagerConfig = bincode::deserialize(bytes)?;
        Ok(Self::resolve(raw, fallback))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawWalletManagerConfig = serde_json::from_str(json)?;
        Ok(Self::try_from(raw)?)
    }

    pub fn from_json_or(json: &str, fallback: SyncDepth) -> Result<Self, ConfigError> {
        let raw: RawWalletManagerConfig = serde_json::from_str(json)?;
        Ok(Self::resolve(raw, fallback))
    }
}

impl TryFrom<RawWalletManagerConfig> for WalletManagerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWalletManagerConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            sync_depth: SyncDepth::try_from(raw.sync_depth)?,
            network: raw.network,
            creation_height: raw.creation_height,
        })
    }
}

impl From<WalletManagerConfig> for RawWalletManagerConfig {
    fn from(config: WalletManagerConfig) -> Self {
        Self {
            network: config.network,
            sync_depth: config.sync_depth.into(),
            creation_height: config.creation_height,
        }
    }
}
