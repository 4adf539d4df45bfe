use crate::{BridgeError, Result as BridgeErrorResult, logger};

use kb_config::Config;

use std::path::PathBuf;

/// Load, override, validate and start logging. Shared by both binaries.
///
/// Order: `.env` → `config.toml` → `KB_*` env vars → command-line flags.
pub fn prepare(overrides: impl FnOnce(&mut Config)) -> BridgeErrorResult<Config> {
    dotenvy::dotenv().ok();

    let mut config = Config::load()?;
    overrides(&mut config);
    config.validate()?;

    let log_file_path = log_file_path(&config)?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    Ok(config)
}

/// Resolve the configured log file under the config directory, creating it if needed
pub fn log_file_path(config: &Config) -> BridgeErrorResult<Option<PathBuf>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let log_dir = Config::config_dir()?.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|source| BridgeError::LogFile {
        path: log_dir.display().to_string(),
        source,
    })?;

    Ok(Some(log_dir.join(filename)))
}
