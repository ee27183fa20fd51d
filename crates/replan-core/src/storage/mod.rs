//! On-disk state around the engine: TOML configuration and the JSON block file.
//!
//! The engine never touches these; callers load a snapshot, replan it and
//! decide whether to write the result back.

mod blocks;
mod config;

pub use blocks::BlockFile;
pub use config::Config;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/replan[-dev]/` based on REPLAN_ENV.
///
/// Set REPLAN_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("REPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("replan-dev")
    } else {
        base_dir.join("replan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
