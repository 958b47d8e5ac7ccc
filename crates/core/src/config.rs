//! Game configuration
//!
//! Settings are plain JSON; every field is optional and defaults to the
//! classic constants. Play starts at level 18 unless configured otherwise.
//!
//! ```
//! use tetris_trainer_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "level": 18, "das": { "charged": 11 } }"#).unwrap();
//! assert_eq!(config.level().value(), 18);
//! assert_eq!(config.das.charged, 11);
//! assert_eq!(config.das.trigger, 16);
//! ```

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::das::DasConfig;
use crate::scoring::Level;
use crate::types::MAX_LEVEL;

/// Starting level when none is configured (3 frames per drop).
pub const DEFAULT_LEVEL: u8 = 18;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("das.trigger must be at least 1")]
    ZeroTrigger,
    #[error("das.{field} ({value}) must be below das.trigger ({trigger})")]
    ChargeNotBelowTrigger {
        field: &'static str,
        value: u32,
        trigger: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Raw level as configured. Read through [`GameConfig::level`].
    pub level: u8,
    pub das: DasConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            das: DasConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let das = &self.das;
        if das.trigger == 0 {
            return Err(ConfigError::ZeroTrigger);
        }
        for (field, value) in [("charged", das.charged), ("down_charged", das.down_charged)] {
            if value >= das.trigger {
                return Err(ConfigError::ChargeNotBelowTrigger {
                    field,
                    value,
                    trigger: das.trigger,
                });
            }
        }
        Ok(())
    }

    /// The effective level. Levels past the gravity table are clamped.
    pub fn level(&self) -> Level {
        let (level, clamped) = Level::clamped(self.level);
        if clamped {
            warn!(requested = self.level, max = MAX_LEVEL, "level out of range, clamping");
        }
        level
    }
}
