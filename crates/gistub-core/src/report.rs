//! JSON run-report types for CLI responses.
//!
//! A generation run produces one report describing every module that was
//! attempted. The report is the machine-readable contract of the CLI:
//! `status` comes first, field order is stable, and diagnostics are carried
//! verbatim so callers do not have to scrape stderr.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;

/// Current schema version for run reports.
pub const SCHEMA_VERSION: &str = "1";

/// Overall status of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every requested module produced a stub.
    Ok,
    /// At least one module aborted with a fatal error.
    Error,
}

/// Report for a single module within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleReport {
    /// Dotted module name as requested (e.g. `gi.repository.Gtk`).
    pub module: String,
    pub status: RunStatus,
    /// Path of the written stub file; absent when the module aborted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stub_path: Option<String>,
    /// Fatal error message; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Diagnostics collected while emitting this module.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ModuleReport {
    /// Report a successfully written module.
    pub fn ok(module: impl Into<String>, stub_path: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        ModuleReport {
            module: module.into(),
            status: RunStatus::Ok,
            stub_path: Some(stub_path.into()),
            error: None,
            diagnostics,
        }
    }

    /// Report a module whose generation aborted.
    pub fn failed(module: impl Into<String>, error: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        ModuleReport {
            module: module.into(),
            status: RunStatus::Error,
            stub_path: None,
            error: Some(error.into()),
            diagnostics,
        }
    }
}

/// Report for a whole generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub schema_version: String,
    pub modules: Vec<ModuleReport>,
}

impl RunReport {
    /// Build a run report; overall status is `Error` iff any module failed.
    pub fn new(modules: Vec<ModuleReport>) -> Self {
        let status = if modules.iter().any(|m| m.status == RunStatus::Error) {
            RunStatus::Error
        } else {
            RunStatus::Ok
        };
        RunReport {
            status,
            schema_version: SCHEMA_VERSION.to_string(),
            modules,
        }
    }
}
