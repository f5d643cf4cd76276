use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncDepthError {
    #[error("unrecognized sync depth tag: {0:#04x}")]
    UnrecognizedTag(u8),

    #[error("unknown sync depth name: {0}")]
    UnknownName(String),
}
