/// End-to-end tests across both crates.
///
/// These exercise the path a stored setting takes:
///   SyncDepth → wire tag → persisted config → decoded config
/// including what a reader does with a tag written by a newer build.
use tracing_subscriber::EnvFilter;
use wm_config::{ConfigError, RawWalletManagerConfig, WalletManagerConfig};
use wm_sync::{SyncDepth, SyncDepthError, WalletManagerEvent};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn every_depth_survives_persistence() {
    init_tracing();
    for depth in SyncDepth::ALL {
        let config = WalletManagerConfig::new("bitcoin-testnet").with_sync_depth(depth);

        let from_bytes = WalletManagerConfig::from_bytes(&config.to_bytes().unwrap()).unwrap();
        assert_eq!(from_bytes.sync_depth, depth);

        let from_json = WalletManagerConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(from_json.sync_depth, depth);
    }
}

#[test]
fn tag_from_a_newer_build_is_left_to_the_reader() {
    init_tracing();
    let raw = RawWalletManagerConfig {
        network: "bitcoin-mainnet".into(),
        sync_depth: 0xd0,
        creation_height: Some(1),
    };
    let bytes = bincode::serialize(&raw).unwrap();

    match WalletManagerConfig::from_bytes(&bytes) {
        Err(ConfigError::SyncDepth(SyncDepthError::UnrecognizedTag(tag))) => assert_eq!(tag, 0xd0),
        other => panic!("expected unrecognized tag, got {other:?}"),
    }

    let config = WalletManagerConfig::from_bytes_or(&bytes, SyncDepth::FromCreation).unwrap();
    assert_eq!(config.sync_depth, SyncDepth::FromCreation);
    assert_eq!(config.creation_height, Some(1));
}

#[test]
fn recommended_depth_updates_stored_config() {
    init_tracing();
    let mut config = WalletManagerConfig::new("bitcoin-mainnet");
    let event = WalletManagerEvent::SyncRecommended {
        depth: SyncDepth::FromLastConfirmedSend,
    };

    if let Some(depth) = event.recommended_depth() {
        config = config.with_sync_depth(depth);
    }

    let raw = RawWalletManagerConfig::from(config);
    assert_eq!(raw.sync_depth, 0xa0);
}

#[test]
fn truncated_record_is_a_binary_error() {
    init_tracing();
    let bytes = WalletManagerConfig::new("btc").to_bytes().unwrap();
    assert!(matches!(
        WalletManagerConfig::from_bytes(&bytes[..4]),
        Err(ConfigError::Binary(_))
    ));
}
