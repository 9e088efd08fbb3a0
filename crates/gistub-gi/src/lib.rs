//! GObject-introspection metadata model and stub-generation engine.
//!
//! This crate turns a fully materialized introspection graph (modules,
//! classes, structs, enums, callables, fields — as PyGObject exposes them)
//! into Python type-stub (`.pyi`) text. The pipeline:
//!
//! 1. [`meta`] — the graph data model, deserialized from JSON
//! 2. [`resolve`] — raw type metadata to semantic type descriptors
//! 3. [`signature`] — callable metadata to parameter lists and composite returns
//! 4. [`classify`] — attribute values to a closed set of declaration records
//! 5. [`entity`] — per-kind class body assembly
//! 6. [`module`] — whole-module emission with cross-module import tracking
//!
//! Generation is a pure in-memory transformation: no IO, no global state.
//! Recoverable problems land in a [`gistub_core::diagnostics::Diagnostics`]
//! collector; structural inconsistencies abort the module via [`EmitError`].

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod meta;
pub mod module;
pub mod render;
pub mod resolve;
pub mod signature;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::GenConfig;
pub use error::{EmitError, SignatureError};
pub use meta::Repository;
pub use module::{emit_module, ModuleContext};
