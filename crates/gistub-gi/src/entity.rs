//! Entity (class-like) stub emission.
//!
//! Produces the `class` block for one exported entity. The body strategy
//! depends on the entity kind: objects and interfaces walk their attribute
//! map through classification, structs and unions consult the declared
//! field and method maps directly, and enums and flags validate members
//! against the declared value set.

use std::collections::BTreeMap;

use gistub_core::diagnostics::Diagnostics;
use gistub_core::text;

use crate::classify::{self, constant_descriptor, AttrOwner};
use crate::config::GenConfig;
use crate::descriptor::{AttributeKind, AttributeRecord};
use crate::error::EmitError;
use crate::meta::{AttrValue, CallableMeta, EntityKind, EntityMeta, FieldMeta};
use crate::module::{canonical_entity_name, effective_module, ModuleContext};
use crate::render;
use crate::resolve::resolve_type;
use crate::signature;

/// Emit the complete class block for one entity, body indented, ending
/// with the `...` placeholder line.
pub fn entity_stub(
    entity: &EntityMeta,
    cfg: &GenConfig,
    ctx: &mut ModuleContext,
    diag: &mut Diagnostics,
) -> Result<Vec<String>, EmitError> {
    tracing::debug!(entity = %entity.name, "generating class stub");

    let mut lines = vec![header(entity, ctx)];
    let mut body = Vec::new();

    match entity.kind {
        EntityKind::Object | EntityKind::Interface => {
            generic_attrs(entity, cfg, ctx, diag, &mut body)?;
        }
        EntityKind::Struct | EntityKind::Union => {
            struct_attrs(entity, cfg, ctx, diag, &mut body)?;
        }
        EntityKind::Enum | EntityKind::Flags => {
            enum_attrs(entity, cfg, ctx, diag, &mut body);
        }
        EntityKind::Unknown => {
            diag.error(
                "no-info",
                Some(&entity.name),
                "introspected class has no type info",
            );
            generic_attrs(entity, cfg, ctx, diag, &mut body)?;
        }
    }

    for decl in body {
        lines.extend(text::indent_lines(&decl));
    }
    lines.push("    ...".to_string());
    Ok(lines)
}

fn header(entity: &EntityMeta, ctx: &mut ModuleContext) -> String {
    let module = effective_module(&entity.module);
    let name = canonical_entity_name(&module, &entity.name);
    match &entity.parent {
        Some(parent) => format!(
            "class {}({}):",
            name,
            ctx.format_entity(&parent.module, &parent.name)
        ),
        None => format!("class {}:", name),
    }
}

fn generic_attrs(
    entity: &EntityMeta,
    cfg: &GenConfig,
    ctx: &mut ModuleContext,
    diag: &mut Diagnostics,
    out: &mut Vec<String>,
) -> Result<(), EmitError> {
    let owner = AttrOwner::entity_scope(entity, cfg);
    for (name, value) in &entity.attrs {
        if !classify::name_survives(name, cfg, diag) {
            continue;
        }
        if let Some(record) = classify::classify_attr(&owner, name, value, cfg, diag)? {
            out.push(render::render_record(&record, ctx));
        }
    }
    Ok(())
}

/// Structs and unions bypass value classification: every surviving
/// attribute must be either a declared field or a declared method, and an
/// attribute matching neither is a fatal inconsistency.
fn struct_attrs(
    entity: &EntityMeta,
    cfg: &GenConfig,
    ctx: &mut ModuleContext,
    diag: &mut Diagnostics,
    out: &mut Vec<String>,
) -> Result<(), EmitError> {
    let fields: BTreeMap<&str, &FieldMeta> =
        entity.fields.iter().map(|f| (f.name.as_str(), f)).collect();
    let methods: BTreeMap<&str, &CallableMeta> = entity
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m))
        .collect();

    for name in entity.attrs.keys() {
        if !classify::name_survives(name, cfg, diag) {
            continue;
        }
        if let Some(field) = fields.get(name.as_str()) {
            let ty = resolve_type(&field.ty, diag);
            let record = AttributeRecord::new(name.clone(), AttributeKind::Field(ty));
            out.push(render::render_record(&record, ctx));
        } else if let Some(method) = methods.get(name.as_str()) {
            let callable = signature::synthesize(method, diag);
            out.push(render::render_method(name, &callable, ctx));
        } else {
            return Err(EmitError::struct_member_unknown(
                entity.name.as_str(),
                name.as_str(),
            ));
        }
    }
    Ok(())
}

/// Enum and flags attributes are member constants typed as the enum
/// itself. A member must be uppercase-named and carry one of the declared
/// values; anything else is skipped with a diagnostic, except helper
/// callables which are emitted as methods and overflow-exempt names which
/// bypass the value check.
fn enum_attrs(
    entity: &EntityMeta,
    cfg: &GenConfig,
    ctx: &mut ModuleContext,
    diag: &mut Diagnostics,
    out: &mut Vec<String>,
) {
    for (name, value) in &entity.attrs {
        if !classify::name_survives(name, cfg, diag) {
            continue;
        }

        if !cfg.is_overflow_exempt(name) {
            let numeric = match value {
                AttrValue::EnumMember { value, .. } => Some(*value),
                AttrValue::Int { value } => Some(*value),
                _ => None,
            };
            let declared = numeric.is_some_and(|v| entity.members.values().any(|&m| m == v));
            if !text::is_upper_name(name) || !declared {
                if let AttrValue::Callable(callable) = value {
                    let synthesized = signature::synthesize(callable, diag);
                    out.push(render::render_method(name, &synthesized, ctx));
                    continue;
                }
                diag.warn(
                    "enum-member",
                    Some(&format!("{}.{}", entity.name, name)),
                    format!("skipping unexpected attribute {} in enum {}", name, entity.name),
                );
                continue;
            }
        }

        if let Some(ty) = constant_descriptor(value) {
            let record = AttributeRecord::new(name.clone(), AttributeKind::Constant(ty));
            out.push(render::render_record(&record, ctx));
        } else {
            diag.warn(
                "enum-member",
                Some(&format!("{}.{}", entity.name, name)),
                format!("skipping unexpected attribute {} in enum {}", name, entity.name),
            );
        }
    }
}
