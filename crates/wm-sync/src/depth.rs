use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SyncDepth::*;
use crate::SyncDepthError;

/// How far back in chain history a wallet manager resync should begin.
///
/// Each variant has a fixed single-byte wire tag. Tags are part of the
/// persisted format and must never be reassigned. Serde encodes a
/// `SyncDepth` as its tag, so every format stores the byte rather than the
/// variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SyncDepth {
    /// Sync from the block height of the last confirmed send transaction.
    FromLastConfirmedSend,

    /// Sync from the block height of the last trusted block. What counts as
    /// trusted depends on the blockchain and sync mode.
    FromLastTrustedBlock,

    /// Sync from the block height at which the account was created.
    FromCreation,
}

impl SyncDepth {
    /// Every variant, shallowest first.
    pub const ALL: [SyncDepth; 3] = [FromLastConfirmedSend, FromLastTrustedBlock, FromCreation];

    /// The wire tag for this depth.
    pub const fn to_serialization(self) -> u8 {
        match self {
            FromLastConfirmedSend => 0xa0,
            FromLastTrustedBlock => 0xb0,
            FromCreation => 0xc0,
        }
    }

    /// Decode a wire tag. Any byte other than the three known tags is
    /// rejected with [`SyncDepthError::UnrecognizedTag`].
    pub fn from_serialization(tag: u8) -> Result<Self, SyncDepthError> {
        match tag {
            0xa0 => Ok(FromLastConfirmedSend),
            0xb0 => Ok(FromLastTrustedBlock),
            0xc0 => Ok(FromCreation),
            _ => Err(SyncDepthError::UnrecognizedTag(tag)),
        }
    }

    /// Stable kebab-case name, used in human-edited settings.
    pub fn name(self) -> &'static str {
        match self {
            FromLastConfirmedSend => "from-last-confirmed-send",
            FromLastTrustedBlock => "from-last-trusted-block",
            FromCreation => "from-creation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FromLastConfirmedSend => "block height of the last confirmed send transaction",
            FromLastTrustedBlock => "block height of the last trusted block",
            FromCreation => "block height at account creation",
        }
    }
}

impl From<SyncDepth> for u8 {
    fn from(depth: SyncDepth) -> Self {
        depth.to_serialization()
    }
}

impl TryFrom<u8> for SyncDepth {
    type Error = SyncDepthError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_serialization(tag)
    }
}

impl fmt::Display for SyncDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SyncDepth {
    type Err = SyncDepthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|depth| depth.name() == s)
            .ok_or_else(|| SyncDepthError::UnknownName(s.to_string()))
    }
}
