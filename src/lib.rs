//! gistub: Python type-stub generator for GObject-introspection modules.
//!
//! Takes a fully materialized introspection metadata graph (JSON, dumped
//! from a live PyGObject process) and writes `.pyi` stub files describing
//! the classes, methods, constants and enums each module exports.

// Core infrastructure - re-exported from gistub-core
pub use gistub_core::diagnostics;
pub use gistub_core::report;
pub use gistub_core::text;

// Stub-generation engine
pub use gistub_gi as gi;

pub mod cli;
pub mod error;
pub mod writer;

pub use error::GistubError;
