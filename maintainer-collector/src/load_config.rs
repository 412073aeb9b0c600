//! `load_config` module: loads an optional YAML file into a [`CollectorConfig`].
//!
//! Every field of the file is optional. Fields that are present replace the
//! compiled-in defaults (Docker's project list, `raw.githubusercontent.com`,
//! branch `master`, output `MAINTAINERS`); missing ones keep them.
//!
//! ```yaml
//! default_org: docker
//! output: ./MAINTAINERS
//! projects:
//!   - cli
//!   - moby/moby
//! ```
//!
//! # Errors
//! All errors use `anyhow::Error` and surface at the CLI boundary.
use anyhow::Result;
use maintainer_collector_core::config::CollectorConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Loads the YAML config at `path`, or the defaults when `path` is `None`.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<CollectorConfig> {
    let Some(path) = path else {
        info!("No config file given, using built-in defaults");
        return Ok(CollectorConfig::default());
    };
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is valid YAML for "no overrides".
    if config_content.trim().is_empty() {
        return Ok(CollectorConfig::default());
    }

    let config: CollectorConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if config.projects.is_empty() {
        error!(config_path = ?path_ref, "Config lists no projects");
        anyhow::bail!("Config {:?} lists no projects", path_ref);
    }

    Ok(config)
}
