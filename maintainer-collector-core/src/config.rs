use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

pub const DEFAULT_ORG: &str = "docker";
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_FILENAME: &str = "MAINTAINERS";
pub const DEFAULT_OUTPUT: &str = "MAINTAINERS";

/// Projects collected when no configuration overrides the list.
pub const DEFAULT_PROJECTS: &[&str] = &[
    "boot2docker",
    "cli",
    "compose",
    "compose-on-kubernetes",
    "containerd/containerd",
    "distribution",
    "docker-bench-security",
    "docker-credential-helpers",
    "docker-py",
    "dockercraft",
    "go-connections",
    "go-events",
    "go-healthcheck",
    "go-p9p",
    "go-plugins-helpers",
    "go-units",
    "infrakit",
    "kitematic",
    "leadership",
    "leeroy",
    "libchan",
    "libcompose",
    "libkv",
    "libnetwork",
    "linuxkit/linuxkit",
    "machine",
    "migrator",
    "moby/datakit",
    "moby/hyperkit",
    "moby/moby",
    "moby/vpnkit",
    "spdystream",
    "swarm",
    "swarmkit",
    "swarm-frontends",
    "theupdateframework/notary",
    "toolbox",
    "v1.10-migrator",
];

/// Everything a collection run needs. Every field has a compiled-in default,
/// so a partial YAML file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Organization used for project identifiers without an `org/` prefix.
    pub default_org: String,
    /// Raw file host, without a trailing slash.
    pub base_url: String,
    pub branch: String,
    pub filename: String,
    pub output: PathBuf,
    /// Processed in this order; the order decides person record conflicts.
    pub projects: Vec<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            default_org: DEFAULT_ORG.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl CollectorConfig {
    pub fn trace_loaded(&self) {
        info!(
            default_org = %self.default_org,
            base_url = %self.base_url,
            output = %self.output.display(),
            projects_count = self.projects.len(),
            "Loaded CollectorConfig"
        );
        debug!(?self, "CollectorConfig loaded (full debug)");
    }
}
