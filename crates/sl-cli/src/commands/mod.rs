pub mod play;
pub mod questions;
pub mod serve;

use sl_recovery::RecoveryConfig;

/// Desk configuration from the shared seed flags.
fn recovery_config(seed: Option<u64>, quip_seed: Option<u64>) -> RecoveryConfig {
    let mut config = RecoveryConfig::default();
    if let Some(seed) = seed {
        config = config.with_lineup_seed(seed);
    }
    if let Some(seed) = quip_seed {
        config = config.with_quip_seed(seed);
    }
    config
}
