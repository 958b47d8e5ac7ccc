//! Log setup for the terminal binary.
//!
//! The game owns the terminal in raw mode, so logs can only go to a file.

use std::env;
use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::settings::LOG_ENV;

/// Install a file-backed subscriber when `TETRIS_TRAINER_LOG` names a path.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns whether
/// logging was enabled.
pub fn init() -> Result<bool> {
    let Some(path) = env::var_os(LOG_ENV) else {
        return Ok(false);
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
    Ok(true)
}
