use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const HOLES: usize = 6;
pub const PEEP_MIN_MS: u32 = 200;
pub const PEEP_MAX_MS: u32 = 1000;
pub const ROUND_MS: u32 = 10_000;
pub const BEST_SCORE_KEY: &str = "highestScore";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub holes: usize,
    pub peep_min_ms: u32,
    pub peep_max_ms: u32,
    pub round_ms: u32,
    pub best_score_key: String,
    /// Simplified mode when `false`: no best score is read, kept or shown.
    pub track_best: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            holes: HOLES,
            peep_min_ms: PEEP_MIN_MS,
            peep_max_ms: PEEP_MAX_MS,
            round_ms: ROUND_MS,
            best_score_key: BEST_SCORE_KEY.to_string(),
            track_best: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.holes == 0 {
            return Err(ConfigError::NoHoles);
        }
        if self.round_ms == 0 {
            return Err(ConfigError::EmptyRound);
        }
        if self.peep_min_ms == 0 && self.peep_max_ms == 0 {
            return Err(ConfigError::EmptyPeep);
        }
        Ok(())
    }

    pub fn round_length(&self) -> Duration {
        Duration::from_millis(self.round_ms.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.holes, 6);
        assert_eq!((config.peep_min_ms, config.peep_max_ms), (200, 1000));
        assert_eq!(config.round_length(), Duration::from_secs(10));
        assert_eq!(config.best_score_key, "highestScore");
        assert!(config.track_best);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate() {
        let config = GameConfig {
            holes: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoHoles));

        let config = GameConfig {
            round_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyRound));

        let config = GameConfig {
            peep_min_ms: 0,
            peep_max_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPeep));

        let config = GameConfig {
            holes: 1,
            peep_min_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"holes": 9, "track_best": false}"#).unwrap();
        assert_eq!(config.holes, 9);
        assert!(!config.track_best);
        assert_eq!(config.round_ms, ROUND_MS);
        assert_eq!(config.best_score_key, BEST_SCORE_KEY);
    }
}
