//! CLI entry points.
//!
//! Thin orchestration over the engine: load the metadata graph, emit each
//! requested module with its own diagnostics collector, write the stub
//! tree, and fold the outcomes into a [`RunReport`]. Per-module failures
//! land in the report; only caller mistakes and unreadable graphs are
//! returned as hard errors.

use std::fs;
use std::path::Path;

use gistub_core::diagnostics::Diagnostics;
use gistub_core::report::{ModuleReport, RunReport};
use gistub_gi::module::effective_module;
use gistub_gi::{emit_module, EmitError, GenConfig, Repository};

use crate::error::GistubError;
use crate::writer;

/// Load and parse the metadata graph file.
pub fn load_repository(path: &Path) -> Result<Repository, GistubError> {
    let text = fs::read_to_string(path).map_err(|source| GistubError::GraphRead {
        path: path.to_path_buf(),
        source,
    })?;
    Repository::from_json(&text).map_err(|source| GistubError::GraphParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate stubs for the requested modules (all graph modules when the
/// request list is empty) and write them under `out_dir`.
pub fn run_generate(
    graph_path: &Path,
    out_dir: &Path,
    modules: &[String],
    cfg: &GenConfig,
) -> Result<RunReport, GistubError> {
    if modules.iter().any(|m| m.trim().is_empty()) {
        return Err(GistubError::invalid_arguments(
            "module names must not be empty",
        ));
    }

    let repo = load_repository(graph_path)?;

    let requested: Vec<String> = if modules.is_empty() {
        repo.module_names().map(str::to_string).collect()
    } else {
        modules.to_vec()
    };

    let mut reports = Vec::with_capacity(requested.len());
    for name in requested {
        reports.push(generate_one(&repo, &name, out_dir, cfg));
    }
    Ok(RunReport::new(reports))
}

fn generate_one(
    repo: &Repository,
    name: &str,
    out_dir: &Path,
    cfg: &GenConfig,
) -> ModuleReport {
    let Some(module) = repo.module(name) else {
        let err = EmitError::UnknownModule {
            module: name.to_string(),
        };
        return ModuleReport::failed(name, err.to_string(), vec![]);
    };

    let mut diag = Diagnostics::new();
    match emit_module(module, cfg, &mut diag) {
        Ok(text) => {
            // Stubs for override modules land under the namespace importers
            // actually use.
            let target = effective_module(name);
            match writer::write_stub(out_dir, &target, &text) {
                Ok(path) => {
                    ModuleReport::ok(name, path.display().to_string(), diag.into_records())
                }
                Err(err) => ModuleReport::failed(name, err.to_string(), diag.into_records()),
            }
        }
        Err(err) => ModuleReport::failed(name, err.to_string(), diag.into_records()),
    }
}

/// List the module names present in a metadata graph.
pub fn run_modules(graph_path: &Path) -> Result<Vec<String>, GistubError> {
    let repo = load_repository(graph_path)?;
    Ok(repo.module_names().map(str::to_string).collect())
}
