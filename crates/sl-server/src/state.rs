//! Shared request state.

use std::sync::Arc;

use sl_recovery::RecoveryDesk;

use crate::config::ServerConfig;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    /// Questions, answers and responses.
    pub desk: RecoveryDesk,
    /// The configuration the server started with.
    pub config: ServerConfig,
}

impl AppState {
    /// Build state for `config`.
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let desk = RecoveryDesk::new(&config.recovery_config());
        Arc::new(Self { desk, config })
    }
}
