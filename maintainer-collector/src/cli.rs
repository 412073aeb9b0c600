//! CLI glue for maintainer-collector: argument parsing and command dispatch.
//!
//! All collection logic lives in `maintainer-collector-core`; this module only
//! turns arguments into a [`CollectorConfig`] and calls into the core.
//!
//! - `collect` runs the full pipeline and writes the combined file.
//! - `projects` prints where each configured project would be fetched from.
//!
//! [`CollectorConfig`]: maintainer_collector_core::config::CollectorConfig
use crate::load_config::load_config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use maintainer_collector_core::collect::generate;
use maintainer_collector_core::fetch::HttpFetcher;
use maintainer_collector_core::project::ProjectRef;
use std::path::PathBuf;

/// CLI for maintainer-collector: combine per-project MAINTAINERS files.
#[derive(Parser)]
#[clap(
    name = "maintainer-collector",
    version,
    about = "Collect the MAINTAINERS files of many repositories into one combined file"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every configured project's MAINTAINERS file and write the combined file
    Collect {
        /// Path to a YAML config file overriding the built-in defaults
        #[clap(long)]
        config: Option<PathBuf>,
        /// Where to write the combined file (overrides the config)
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// List configured projects and the URL each one is fetched from
    Projects {
        /// Path to a YAML config file overriding the built-in defaults
        #[clap(long)]
        config: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Collect { config, output } => {
            let mut config = load_config(config)?;
            if let Some(output) = output {
                config.output = output;
            }
            config.trace_loaded();

            tracing::info!(command = "collect", "Starting collection");
            let fetcher = HttpFetcher::from_config(&config);
            match generate(&config, &fetcher).await {
                Ok(report) => {
                    tracing::info!(
                        command = "collect",
                        merged = report.merged.len(),
                        skipped = report.skipped.len(),
                        "Collection complete"
                    );
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "collect", error = %e, "Collection failed");
                    Err(anyhow::Error::new(e))
                }
            }
        }
        Commands::Projects { config } => {
            let config = load_config(config)?;
            let fetcher = HttpFetcher::from_config(&config);
            for identifier in &config.projects {
                let project = ProjectRef::parse(identifier, &config.default_org);
                println!(
                    "{}\t{}",
                    project,
                    fetcher.maintainers_url(&project.org, &project.name)
                );
            }
            Ok(())
        }
    }
}
