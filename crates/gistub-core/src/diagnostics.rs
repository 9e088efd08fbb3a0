//! Structured diagnostics for stub generation.
//!
//! The engine never writes to stdout or stderr on its own. Everything it
//! wants to say about an input graph — an attribute it skipped, a type tag
//! it could not map — is pushed into a [`Diagnostics`] collector that the
//! caller owns. Each record is also mirrored to `tracing` so operators see
//! diagnostics live when a subscriber is installed.
//!
//! Diagnostics are informational: they never change the process exit status
//! and never abort generation. Fatal conditions are errors, not diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a diagnostic is.
///
/// `Error` severity still does not abort generation; it marks records the
/// caller should surface prominently (for example an attribute that could
/// not be fetched from a class that is not a known static binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// A single diagnostic record.
///
/// - `code`: stable machine-readable code (e.g. `"type-tag"`, `"enum-member"`)
/// - `path`: dotted path of the offending item (e.g. `"Gtk.Widget.priv"`),
///   absent for graph-wide diagnostics
/// - `message`: human-readable description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.severity, self.code)?;
        if let Some(path) = &self.path {
            write!(f, " {}", path)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Collector for diagnostics produced during one generation run.
///
/// Created by the caller and threaded by mutable reference through the
/// whole emission call tree; one collector per module run keeps reports
/// attributable.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an info-severity diagnostic.
    pub fn info(&mut self, code: &str, path: Option<&str>, message: impl Into<String>) {
        self.push(Severity::Info, code, path, message.into());
    }

    /// Record a warning-severity diagnostic.
    pub fn warn(&mut self, code: &str, path: Option<&str>, message: impl Into<String>) {
        self.push(Severity::Warning, code, path, message.into());
    }

    /// Record an error-severity diagnostic.
    pub fn error(&mut self, code: &str, path: Option<&str>, message: impl Into<String>) {
        self.push(Severity::Error, code, path, message.into());
    }

    fn push(&mut self, severity: Severity, code: &str, path: Option<&str>, message: String) {
        match severity {
            Severity::Info => tracing::debug!(code, path, "{}", message),
            Severity::Warning => tracing::warn!(code, path, "{}", message),
            Severity::Error => tracing::error!(code, path, "{}", message),
        }
        self.records.push(Diagnostic {
            severity,
            code: code.to_string(),
            path: path.map(str::to_string),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Number of records at or above the given severity.
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.records.iter().filter(|d| d.severity >= severity).count()
    }

    pub fn into_records(self) -> Vec<Diagnostic> {
        self.records
    }
}
