use crate::error::ConfigError;
use crate::types::{DEFAULT_PAIR_COUNT, MISMATCH_DELAY_MS, UNIVERSE_SIZE};

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub pair_count: usize,
    pub mismatch_delay_ms: u32,
    pub seed: u64,
}

impl SessionConfig {
    pub fn new(pair_count: usize, seed: u64) -> Self {
        Self {
            pair_count,
            seed,
            ..Self::default()
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 || self.pair_count > UNIVERSE_SIZE {
            return Err(ConfigError::PairCount(self.pair_count));
        }
        if self.mismatch_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.pair_count, 9);
        assert_eq!(cfg.mismatch_delay_ms, 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn pair_count_bounds() {
        assert_eq!(
            SessionConfig::new(0, 1).validate(),
            Err(ConfigError::PairCount(0))
        );
        assert!(SessionConfig::new(52, 1).validate().is_ok());
        assert_eq!(
            SessionConfig::new(53, 1).validate(),
            Err(ConfigError::PairCount(53))
        );
    }

    #[test]
    fn zero_delay_rejected() {
        let cfg = SessionConfig::default().with_delay_ms(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDelay));
    }
}
