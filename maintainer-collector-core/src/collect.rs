//! High-level pipeline: fetch → decode → merge → render → write.
//!
//! [`collect`] walks the configured projects strictly in order and folds each
//! declaration into a [`CombinedModel`]. A project that cannot be fetched or
//! decoded is logged and skipped; it never aborts the run. [`generate`] adds
//! the fatal half of the pipeline: rendering and writing the output file.
//!
//! # Ordering
//! Projects are awaited one after another. The order matters for person
//! records: when two projects declare the same nickname, the later one wins.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::CollectorConfig;
use crate::contract::Fetcher;
use crate::declaration::Declaration;
use crate::error::{CollectorError, Result};
use crate::model::CombinedModel;
use crate::output::{assemble_default, write_output};
use crate::project::ProjectRef;
use crate::render::render;

/// Which projects made it into the combined model.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CollectReport {
    /// `org/project` of every merged project, in processing order.
    pub merged: Vec<String>,
    pub skipped: Vec<SkippedProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedProject {
    pub project: String,
    pub error: String,
}

/// The finalized model together with the per-project outcome.
#[derive(Debug)]
pub struct Collection {
    pub model: CombinedModel,
    pub report: CollectReport,
}

/// Fetches and decodes one project's declaration, tagging errors with
/// `org/project`.
pub async fn load_declaration<F>(fetcher: &F, project: &ProjectRef) -> Result<Declaration>
where
    F: Fetcher + ?Sized,
{
    let bytes = fetcher
        .fetch(&project.org, &project.name)
        .await
        .map_err(|source| CollectorError::Fetch {
            project: project.to_string(),
            source,
        })?;

    Declaration::from_slice(&bytes).map_err(|source| CollectorError::Decode {
        project: project.to_string(),
        source,
    })
}

/// Builds the combined model from `projects`, in order.
pub async fn collect<F>(fetcher: &F, projects: &[String], default_org: &str) -> Collection
where
    F: Fetcher + ?Sized,
{
    let mut model = CombinedModel::new();
    let mut report = CollectReport::default();

    for identifier in projects {
        let project = ProjectRef::parse(identifier, default_org);
        info!(project = %project, "Collecting project");

        match load_declaration(fetcher, &project).await {
            Ok(declaration) => {
                model.merge(&project.name, declaration);
                info!(project = %project, "Merged MAINTAINERS file");
                report.merged.push(project.to_string());
            }
            Err(e) => {
                error!(project = %project, error = %e, "Skipping project");
                report.skipped.push(SkippedProject {
                    project: project.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    model.finalize();

    info!(
        merged = report.merged.len(),
        skipped = report.skipped.len(),
        groups = model.org.len(),
        people = model.people.len(),
        "Collection finished"
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "Collection report"),
        Err(e) => error!(error = ?e, "Failed to serialize collection report"),
    }

    Collection { model, report }
}

/// Runs the whole pipeline for `config` and writes the combined file.
///
/// Per-project failures only show up in the report. Rendering and writing
/// failures are returned as errors.
pub async fn generate<F>(config: &CollectorConfig, fetcher: &F) -> Result<CollectReport>
where
    F: Fetcher + ?Sized,
{
    let Collection { model, report } =
        collect(fetcher, &config.projects, &config.default_org).await;

    let body = render(&model).map_err(|e| {
        error!(error = %e, "Failed to render combined MAINTAINERS");
        e
    })?;
    write_output(&config.output, &assemble_default(&body))?;

    info!(path = %config.output.display(), "Successfully wrote new combined MAINTAINERS file");
    Ok(report)
}
