//! Stub tree writer.
//!
//! Stub files land under an output root mirroring the dotted module path:
//! `gi.repository.Gtk` becomes `<out>/gi/repository/Gtk.pyi`. Every package
//! directory on the way gets an empty `__init__.py` marker so type
//! checkers treat the tree as one stub package.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GistubError;

/// Where the stub for a dotted module name lands under the output root.
pub fn stub_path(out_dir: &Path, module: &str) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    let mut parts = module.split('.').peekable();
    while let Some(part) = parts.next() {
        if parts.peek().is_some() {
            path.push(part);
        } else {
            path.push(format!("{}.pyi", part));
        }
    }
    path
}

/// Write one module's stub text, creating package directories and
/// `__init__.py` markers as needed. Returns the written stub path.
pub fn write_stub(out_dir: &Path, module: &str, text: &str) -> Result<PathBuf, GistubError> {
    let path = stub_path(out_dir, module);

    // Top-level modules write directly into the root, so it must exist
    // before the per-package loop runs.
    fs::create_dir_all(out_dir).map_err(|source| GistubError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut dir = out_dir.to_path_buf();
    let parts: Vec<&str> = module.split('.').collect();
    for part in &parts[..parts.len().saturating_sub(1)] {
        dir.push(part);
        fs::create_dir_all(&dir).map_err(|source| GistubError::Write {
            path: dir.clone(),
            source,
        })?;
        let marker = dir.join("__init__.py");
        if !marker.exists() {
            fs::write(&marker, "").map_err(|source| GistubError::Write {
                path: marker.clone(),
                source,
            })?;
        }
    }

    fs::write(&path, text).map_err(|source| GistubError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(module, path = %path.display(), "wrote stub");
    Ok(path)
}
