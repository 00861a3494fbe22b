//! Configuration for the recovery desk and flow.

use std::time::Duration;

use sl_core::QuestionStore;

/// Configuration for a recovery desk and the flows that run against it.
#[derive(Debug, Clone)]
pub struct RecoveryConfig {
    /// Seed for picking the lineup from the pool. `None` serves the classic ten.
    pub lineup_seed: Option<u64>,
    /// Seed for response picks. `None` seeds from the OS.
    pub quip_seed: Option<u64>,
    /// Pause on the "searching for your account" screen.
    pub intro_delay: Duration,
    /// Pause on the "finalizing" screen before the final message.
    pub final_delay: Duration,
    /// Time between rotating status lines while finalizing.
    pub status_interval: Duration,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            lineup_seed: None,
            quip_seed: None,
            intro_delay: Duration::from_millis(2000),
            final_delay: Duration::from_millis(5000),
            status_interval: Duration::from_millis(1500),
        }
    }
}

impl RecoveryConfig {
    /// Pick the lineup from the pool with this seed.
    pub fn with_lineup_seed(mut self, seed: u64) -> Self {
        self.lineup_seed = Some(seed);
        self
    }

    /// Seed response picks.
    pub fn with_quip_seed(mut self, seed: u64) -> Self {
        self.quip_seed = Some(seed);
        self
    }

    /// Drop every cosmetic delay.
    pub fn without_delays(mut self) -> Self {
        self.intro_delay = Duration::ZERO;
        self.final_delay = Duration::ZERO;
        self.status_interval = Duration::ZERO;
        self
    }

    /// Build the question store this configuration describes.
    pub fn question_store(&self) -> QuestionStore {
        match self.lineup_seed {
            Some(seed) => QuestionStore::seeded(seed),
            None => QuestionStore::classic(),
        }
    }
}
