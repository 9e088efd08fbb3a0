//! Attribute classification.
//!
//! Decides, once per attribute, which declaration shape an attribute value
//! takes. The checks form a priority list, not mutually exclusive
//! predicates: wrapped callables are recognized before native ones, names
//! matching a declared structural field beat value-kind checks, and flag or
//! enum constants are recognized before plain literals. The result is a
//! closed [`AttributeRecord`] that emission dispatches on exactly once.

use std::collections::BTreeMap;

use gistub_core::diagnostics::Diagnostics;
use gistub_core::text;

use crate::config::GenConfig;
use crate::descriptor::{AttributeKind, AttributeRecord, Primitive, TypeDescriptor};
use crate::error::EmitError;
use crate::meta::{AttrValue, EntityMeta, FieldMeta, ModuleMeta};
use crate::resolve::resolve_type;
use crate::signature;

/// The scope an attribute is being classified in: an entity (class-like)
/// or a module. Carries exactly what the priority checks consult.
pub struct AttrOwner<'a> {
    /// Display name for diagnostics (entity or module name).
    pub display: String,
    /// Whether an override module defines or extends this scope. Plain
    /// Python functions and computed properties only count inside one.
    pub is_override: bool,
    /// Declared structural fields by name, empty at module scope.
    pub fields: BTreeMap<&'a str, &'a FieldMeta>,
    /// Recorded property type hints, absent at module scope.
    pub type_hints: Option<&'a BTreeMap<String, String>>,
    /// Whether attribute fetch failures on this scope are expected.
    pub is_static_binding: bool,
}

impl<'a> AttrOwner<'a> {
    pub fn entity_scope(entity: &'a EntityMeta, cfg: &GenConfig) -> Self {
        AttrOwner {
            display: entity.name.clone(),
            is_override: entity.is_override(),
            fields: entity.fields.iter().map(|f| (f.name.as_str(), f)).collect(),
            type_hints: Some(&entity.type_hints),
            is_static_binding: cfg.is_static_binding(&entity.name),
        }
    }

    pub fn module_scope(module: &'a ModuleMeta) -> Self {
        AttrOwner {
            display: module.name.clone(),
            is_override: module.has_overrides,
            fields: BTreeMap::new(),
            type_hints: None,
            is_static_binding: false,
        }
    }
}

/// Global attribute filtering applied before classification.
///
/// Implementation-reserved `__` names and ignore-listed names are skipped
/// silently; names that are not valid identifiers are skipped with a
/// diagnostic.
pub fn name_survives(name: &str, cfg: &GenConfig, diag: &mut Diagnostics) -> bool {
    if name.starts_with("__") || cfg.is_ignored(name) {
        return false;
    }
    if !text::is_identifier(name) {
        diag.warn(
            "identifier",
            Some(name),
            "invalid identifier found; skipping",
        );
        return false;
    }
    true
}

/// Classify one surviving attribute into a declaration record.
///
/// Returns `Ok(None)` for attributes that are skipped with a diagnostic.
/// The only fatal case is a boolean-strip wrapper whose wrapped callable
/// cannot actually be stripped.
pub fn classify_attr(
    owner: &AttrOwner<'_>,
    name: &str,
    value: &AttrValue,
    cfg: &GenConfig,
    diag: &mut Diagnostics,
) -> Result<Option<AttributeRecord>, EmitError> {
    let path = format!("{}.{}", owner.display, name);

    if let AttrValue::Wrapped { qualname, wrapped } = value {
        let callable = if cfg.is_bool_wrapper(qualname) {
            signature::synthesize_stripped(wrapped, diag)
                .map_err(|e| EmitError::signature(name, e))?
        } else {
            diag.warn(
                "wrapper",
                Some(&path),
                format!("unhandled function wrapper {}", qualname),
            );
            signature::synthesize(wrapped, diag)
        };
        return Ok(Some(AttributeRecord::new(name, AttributeKind::Method(callable))));
    }

    if let AttrValue::Callable(callable) = value {
        let synthesized = signature::synthesize(callable, diag);
        return Ok(Some(AttributeRecord::new(
            name,
            AttributeKind::Method(synthesized),
        )));
    }

    if let AttrValue::PyFunction { params, returns } = value {
        if owner.is_override {
            let synthesized = signature::synthesize_plain(params, returns.as_deref());
            return Ok(Some(AttributeRecord::new(
                name,
                AttributeKind::Method(synthesized),
            )));
        }
        diag.warn(
            "unsupported",
            Some(&path),
            "plain function outside an override module",
        );
        return Ok(None);
    }

    if let Some(field) = owner.fields.get(name) {
        let ty = resolve_type(&field.ty, diag);
        return Ok(Some(AttributeRecord::new(name, AttributeKind::Field(ty))));
    }

    if matches!(value, AttrValue::Property) {
        if owner.is_override {
            let hint = owner
                .type_hints
                .and_then(|hints| hints.get(name))
                .map(|s| TypeDescriptor::from_spelling(s));
            return Ok(Some(AttributeRecord::new(
                name,
                AttributeKind::Property(hint),
            )));
        }
        diag.warn(
            "unsupported",
            Some(&path),
            "unsupported type property".to_string(),
        );
        return Ok(None);
    }

    if let Some(ty) = constant_descriptor(value) {
        return Ok(Some(AttributeRecord::new(name, AttributeKind::Constant(ty))));
    }

    match value {
        AttrValue::Unavailable { message } => {
            if owner.is_static_binding {
                tracing::debug!(path = %path, "skipping attribute of static binding class");
            } else {
                diag.error(
                    "attr-error",
                    Some(&path),
                    format!(
                        "error generating attribute (possibly a new static binding): {}",
                        message
                    ),
                );
            }
            Ok(None)
        }
        AttrValue::Opaque { type_name } => {
            diag.warn(
                "unsupported",
                Some(&path),
                format!("unsupported type {}", type_name),
            );
            Ok(None)
        }
        // Every other variant was consumed by an earlier check.
        _ => Ok(None),
    }
}

/// The declared type of a constant-shaped value, if it has one.
pub(crate) fn constant_descriptor(value: &AttrValue) -> Option<TypeDescriptor> {
    match value {
        AttrValue::EnumMember {
            module, type_name, ..
        } => Some(TypeDescriptor::InterfaceRef {
            module: module.clone(),
            name: type_name.clone(),
        }),
        AttrValue::GTypeValue => Some(TypeDescriptor::InterfaceRef {
            module: "gi.repository.GObject".to_string(),
            name: "GType".to_string(),
        }),
        AttrValue::Bool { .. } => Some(TypeDescriptor::Primitive(Primitive::Bool)),
        AttrValue::Int { .. } => Some(TypeDescriptor::Primitive(Primitive::Int)),
        AttrValue::Float { .. } => Some(TypeDescriptor::Primitive(Primitive::Float)),
        AttrValue::Str { .. } => Some(TypeDescriptor::Primitive(Primitive::Str)),
        _ => None,
    }
}
