pub mod config;
pub mod error;

pub use config::{RawWalletManagerConfig, WalletManagerConfig};
pub use error::ConfigError;
