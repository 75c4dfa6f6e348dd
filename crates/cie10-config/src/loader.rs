//! TOML loading and validation for `EngineConfig`.
//!
//! Parsing checks syntax, types and that `code_pattern` compiles as a
//! regular expression; `validate` then rejects limits the engine cannot
//! honor. Both failures surface as `Cie10Error::ConfigError`.

use std::path::Path;

use tracing::{debug, info};

use cie10_contracts::{
    config::{EngineConfig, MAX_RESULT_LIMIT},
    error::{Cie10Error, Cie10Result},
};

/// The configuration shipped with the workspace.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config/engine.toml");

/// Parse `s` as TOML and validate the resulting configuration.
///
/// Missing keys take their defaults, so an empty document is valid.
pub fn from_toml_str(s: &str) -> Cie10Result<EngineConfig> {
    let config: EngineConfig = toml::from_str(s).map_err(|e| Cie10Error::ConfigError {
        reason: format!("failed to parse engine config TOML: {}", e),
    })?;
    validate(&config)?;
    debug!(?config, "engine config parsed");
    Ok(config)
}

/// Read the file at `path` and parse it as engine configuration.
pub fn from_file(path: &Path) -> Cie10Result<EngineConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| Cie10Error::ConfigError {
        reason: format!("failed to read engine config '{}': {}", path.display(), e),
    })?;
    let config = from_toml_str(&contents)?;
    info!(path = %path.display(), "engine config loaded");
    Ok(config)
}

/// Load `path` when given, otherwise the shipped defaults.
pub fn load(path: Option<&Path>) -> Cie10Result<EngineConfig> {
    match path {
        Some(path) => from_file(path),
        None => from_toml_str(DEFAULT_CONFIG_TOML),
    }
}

/// Reject configurations the engine cannot run with.
pub fn validate(config: &EngineConfig) -> Cie10Result<()> {
    let limits = &config.limits;
    let named_limits = [
        ("limits.result_limit", limits.result_limit),
        ("limits.code_prefix_limit", limits.code_prefix_limit),
        ("limits.name_lookup_limit", limits.name_lookup_limit),
        ("limits.code_lookup_limit", limits.code_lookup_limit),
    ];
    for (key, value) in named_limits {
        if value == 0 {
            return Err(Cie10Error::ConfigError {
                reason: format!("'{}' must be greater than zero", key),
            });
        }
    }

    if limits.result_limit > MAX_RESULT_LIMIT {
        return Err(Cie10Error::ConfigError {
            reason: format!(
                "'limits.result_limit' ({}) exceeds the maximum of {}",
                limits.result_limit, MAX_RESULT_LIMIT
            ),
        });
    }

    Ok(())
}
