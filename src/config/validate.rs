// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SalbpError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SalbpError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.tasks))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_workstations(cfg)?;
    validate_methods(cfg)?;
    Ok(())
}

fn validate_workstations(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.workstations == 0 {
        return Err(SalbpError::ConfigError(
            "[config].workstations must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_methods(cfg: &RawConfigFile) -> Result<()> {
    // Method names themselves are checked during deserialization.
    if cfg.config.methods.is_empty() {
        return Err(SalbpError::ConfigError(
            "[config].methods must name at least one method".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for method in &cfg.config.methods {
        if !seen.insert(*method) {
            return Err(SalbpError::ConfigError(format!(
                "[config].methods lists '{method}' more than once"
            )));
        }
    }
    Ok(())
}
