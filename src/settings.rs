//! Host settings read from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `TETRIS_TRAINER_CONFIG` | Path to a JSON [`GameConfig`] file |
//! | `TETRIS_TRAINER_SEED` | Piece RNG seed (defaults to the clock) |
//! | `TETRIS_TRAINER_LOG` | Log file path; logging is off when unset |

use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::GameConfig;

pub const CONFIG_ENV: &str = "TETRIS_TRAINER_CONFIG";
pub const SEED_ENV: &str = "TETRIS_TRAINER_SEED";
pub const LOG_ENV: &str = "TETRIS_TRAINER_LOG";

/// Load the game config from `TETRIS_TRAINER_CONFIG`, or defaults when unset.
pub fn load_config() -> Result<GameConfig> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => load_config_file(Path::new(&path)),
        None => Ok(GameConfig::default()),
    }
}

pub fn load_config_file(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = GameConfig::from_json_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    info!(path = %path.display(), level = config.level, "loaded config");
    Ok(config)
}

/// Seed for the piece source: `TETRIS_TRAINER_SEED` if set, else the clock.
pub fn seed() -> Result<u32> {
    match env::var(SEED_ENV) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got {raw:?}")),
        Err(_) => Ok(clock_seed()),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
