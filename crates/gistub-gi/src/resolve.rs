//! Type descriptor resolution.
//!
//! Maps raw type metadata (tag plus auxiliary handles) to semantic
//! [`TypeDescriptor`]s. Resolution is total: every recognized tag produces a
//! descriptor, and anything unknowable degrades to `Opaque` with a
//! diagnostic rather than failing. Stub generation must survive every
//! well-formed introspection graph.

use gistub_core::diagnostics::Diagnostics;

use crate::descriptor::{ContainerKind, TypeDescriptor};
use crate::meta::{InterfaceTarget, TypeMeta};
use crate::signature;
use crate::tags::TypeTag;

/// Resolve raw type metadata into a semantic type descriptor.
pub fn resolve_type(meta: &TypeMeta, diag: &mut Diagnostics) -> TypeDescriptor {
    if meta.tag == TypeTag::Interface {
        return resolve_interface(meta, diag);
    }

    if meta.tag.is_container() {
        if meta.tag == TypeTag::Array {
            // Length arguments paired with arrays are emitted as independent
            // parameters; the pairing is not reconstructed.
            diag.info(
                "array-length",
                None,
                "array length argument handling is not implemented",
            );
        }
        let element = match &meta.element {
            Some(inner) => resolve_type(inner, diag),
            None => TypeDescriptor::Opaque,
        };
        let kind = if meta.tag == TypeTag::GHash {
            ContainerKind::Hash
        } else {
            ContainerKind::List
        };
        return TypeDescriptor::Container(kind, Box::new(element));
    }

    if meta.tag == TypeTag::Void {
        // A pointer-shaped void is usually an opaque gpointer; nothing more
        // is known about it.
        return if meta.is_pointer {
            TypeDescriptor::Opaque
        } else {
            TypeDescriptor::Void
        };
    }

    if let Some(primitive) = meta.tag.primitive() {
        return TypeDescriptor::Primitive(primitive);
    }

    match meta.tag {
        TypeTag::GType => TypeDescriptor::InterfaceRef {
            module: "gi.repository.GObject".to_string(),
            name: "GType".to_string(),
        },
        TypeTag::Error => TypeDescriptor::InterfaceRef {
            module: "gi.repository.GLib".to_string(),
            name: "Error".to_string(),
        },
        tag => {
            diag.warn(
                "type-tag",
                None,
                format!("incomplete tag mapping for {}", tag),
            );
            TypeDescriptor::Opaque
        }
    }
}

/// Resolve an interface-tagged type by inspecting the referenced target.
///
/// A callable-shaped target becomes a callback descriptor via signature
/// synthesis; a registered entity becomes a reference; anything else is
/// opaque.
fn resolve_interface(meta: &TypeMeta, diag: &mut Diagnostics) -> TypeDescriptor {
    match &meta.interface {
        Some(InterfaceTarget::Callable(callable)) => {
            let synthesized = signature::synthesize(callable, diag);
            let params = synthesized
                .params
                .iter()
                .map(|p| p.ty.clone().unwrap_or(TypeDescriptor::Opaque))
                .collect();
            TypeDescriptor::Callable {
                params,
                ret: Box::new(synthesized.ret),
            }
        }
        Some(InterfaceTarget::Entity { module, name }) => TypeDescriptor::InterfaceRef {
            module: module.clone(),
            name: name.clone(),
        },
        Some(InterfaceTarget::Unknown) | None => {
            diag.warn(
                "interface",
                None,
                "interface type has no resolvable target",
            );
            TypeDescriptor::Opaque
        }
    }
}
