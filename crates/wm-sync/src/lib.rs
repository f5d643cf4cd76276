pub mod depth;
pub mod error;
pub mod event;

pub use depth::SyncDepth;
pub use error::SyncDepthError;
pub use event::WalletManagerEvent;
