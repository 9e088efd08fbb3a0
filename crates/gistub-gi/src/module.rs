//! Module stub emission and cross-module reference tracking.
//!
//! [`ModuleContext`] is the per-run emission state: the module being
//! generated and every foreign module referenced so far. It is created
//! fresh for each module run and threaded explicitly through emission, so
//! concurrent runs never share qualification state.

use std::collections::{BTreeMap, BTreeSet};

use gistub_core::diagnostics::Diagnostics;

use crate::classify::{self, AttrOwner};
use crate::config::GenConfig;
use crate::entity;
use crate::error::EmitError;
use crate::meta::{Export, ModuleMeta};
use crate::render;

/// Map an override module onto the introspected namespace it overrides.
/// Stubs describe the names importers actually see under `gi.repository`.
pub fn effective_module(name: &str) -> String {
    match name.strip_prefix("gi.overrides") {
        Some(rest) => {
            let rewritten = format!("gi.repository{}", rest);
            tracing::debug!(from = name, to = %rewritten, "rewriting override module");
            rewritten
        }
        None => name.to_string(),
    }
}

/// Canonical entity name within its effective module.
///
/// The runtime exposes the GObject base class under two names; stubs
/// always use the canonical `GObject` spelling.
pub fn canonical_entity_name<'a>(module: &str, name: &'a str) -> &'a str {
    if module == "gi.repository.GObject" && name == "Object" {
        "GObject"
    } else {
        name
    }
}

/// Per-run emission context: current module plus accumulated imports.
#[derive(Debug)]
pub struct ModuleContext {
    current_module: String,
    imports: BTreeSet<String>,
}

impl ModuleContext {
    pub fn new(module_name: &str) -> Self {
        let mut imports = BTreeSet::new();
        // The stub header always imports typing; rendered annotations use
        // it for containers, tuples, callables and fallbacks.
        imports.insert("typing".to_string());
        ModuleContext {
            current_module: effective_module(module_name),
            imports,
        }
    }

    pub fn current_module(&self) -> &str {
        &self.current_module
    }

    /// Format a reference to an entity: unqualified within the current
    /// module, fully qualified (and recorded for the import header)
    /// everywhere else.
    pub fn format_entity(&mut self, module: &str, name: &str) -> String {
        let module = effective_module(module);
        let name = canonical_entity_name(&module, name);
        if module == self.current_module {
            name.to_string()
        } else {
            self.imports.insert(module.clone());
            format!("{}.{}", module, name)
        }
    }

    /// Referenced modules in sorted order, `typing` included.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }
}

/// Generate the complete stub text for one module.
///
/// The returned string is the whole `.pyi` file: sorted import header
/// first, then declarations in sorted export order. Lazily materialized
/// exports are merged in, winning over eager ones on name conflicts.
pub fn emit_module(
    module: &ModuleMeta,
    cfg: &GenConfig,
    diag: &mut Diagnostics,
) -> Result<String, EmitError> {
    if !module.introspected {
        return Err(EmitError::NotIntrospectable {
            module: module.name.clone(),
        });
    }
    tracing::debug!(module = %module.name, "generating module stub");

    let mut ctx = ModuleContext::new(&module.name);
    let owner = AttrOwner::module_scope(module);

    let mut exports: BTreeMap<&str, &Export> = module
        .exports
        .iter()
        .map(|(name, export)| (name.as_str(), export))
        .collect();
    for (name, export) in &module.lazy_exports {
        exports.insert(name.as_str(), export);
    }

    let mut decls: Vec<String> = Vec::new();
    for (name, export) in exports {
        if !classify::name_survives(name, cfg, diag) {
            continue;
        }
        match export {
            Export::Entity(entity) => {
                if cfg.is_internal_class_name(name) {
                    tracing::debug!(entity = name, "skipping internal class");
                    continue;
                }
                if cfg.is_static_module(&entity.module) {
                    tracing::debug!(entity = name, "skipping statically bound class");
                    continue;
                }
                let lines = entity::entity_stub(entity, cfg, &mut ctx, diag)?;
                decls.push(String::new());
                decls.extend(lines);
            }
            Export::Value(value) => {
                if let Some(record) =
                    classify::classify_attr(&owner, name, value, cfg, diag)?
                {
                    let rendered = render::render_record(&record, &mut ctx);
                    decls.extend(rendered.lines().map(str::to_string));
                }
            }
        }
    }

    let mut lines: Vec<String> = ctx.imports().map(|m| format!("import {}", m)).collect();
    lines.extend(decls);
    Ok(lines.join("\n") + "\n")
}
