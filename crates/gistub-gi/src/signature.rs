//! Callable signature synthesis.
//!
//! Turns callable metadata into a [`CallableDescriptor`]: an ordered
//! parameter list (IN/INOUT arguments, optionally led by a synthetic
//! `self`) and a composite return built from the declared return type plus
//! every OUT/INOUT argument type, in declaration order.
//!
//! Calling convention inference: instance methods and virtual functions
//! take `self`; every other callable attached to a containing entity is
//! treated as static, since the introspection layer does not distinguish
//! class methods from static methods.

use gistub_core::diagnostics::Diagnostics;

use crate::descriptor::{CallableDescriptor, ParameterDescriptor, Primitive, TypeDescriptor};
use crate::error::SignatureError;
use crate::meta::{CallableKind, CallableMeta, Direction, PyParam};
use crate::resolve::resolve_type;

/// Synthesize a callable descriptor from introspected metadata.
pub fn synthesize(meta: &CallableMeta, diag: &mut Diagnostics) -> CallableDescriptor {
    let parts = collect(meta, diag);
    CallableDescriptor {
        params: parts.params,
        ret: composite(parts.returns),
        is_static: parts.is_static,
        needs_self: parts.needs_self,
    }
}

/// Synthesize with boolean-result stripping.
///
/// Used for callables reached through a wrapper that discards a leading
/// boolean success flag. The first return-collection entry must be that
/// boolean; anything else means the wrapper table is wrong for this
/// attribute, which is fatal rather than silently dropped.
pub fn synthesize_stripped(
    meta: &CallableMeta,
    diag: &mut Diagnostics,
) -> Result<CallableDescriptor, SignatureError> {
    let mut parts = collect(meta, diag);
    match parts.returns.first() {
        Some(TypeDescriptor::Primitive(Primitive::Bool)) => {
            parts.returns.remove(0);
        }
        _ => return Err(SignatureError::StripNonBoolean),
    }
    if parts.returns.is_empty() {
        return Err(SignatureError::StripExhausted);
    }
    Ok(CallableDescriptor {
        params: parts.params,
        ret: composite(parts.returns),
        is_static: parts.is_static,
        needs_self: parts.needs_self,
    })
}

/// Synthesize from a plain Python function's recorded signature.
///
/// Override functions carry their own parameter list (including any
/// explicit `self`); annotations and defaults are taken verbatim, except
/// defaults whose repr is not valid source text. Static methods cannot be
/// detected without the defining class, so no preamble is inferred.
pub fn synthesize_plain(params: &[PyParam], returns: Option<&str>) -> CallableDescriptor {
    let params = params
        .iter()
        .map(|p| ParameterDescriptor {
            name: p.name.clone(),
            ty: p.annotation.as_deref().map(TypeDescriptor::from_spelling),
            direction: Direction::In,
            default: p.default.clone().filter(|d| !d.starts_with('<')),
        })
        .collect();
    let ret = returns
        .map(TypeDescriptor::from_spelling)
        .unwrap_or(TypeDescriptor::Void);
    CallableDescriptor {
        params,
        ret,
        is_static: false,
        needs_self: false,
    }
}

struct SignatureParts {
    params: Vec<ParameterDescriptor>,
    returns: Vec<TypeDescriptor>,
    is_static: bool,
    needs_self: bool,
}

fn collect(meta: &CallableMeta, diag: &mut Diagnostics) -> SignatureParts {
    let needs_self = matches!(
        meta.kind,
        CallableKind::Method | CallableKind::VirtualMethod
    );
    let is_static =
        !needs_self && (meta.kind == CallableKind::Constructor || meta.has_container);

    let mut params = Vec::new();
    if needs_self {
        params.push(ParameterDescriptor::self_param());
    }

    // The declared return type always leads the return collection; OUT and
    // INOUT argument types follow in declaration order.
    let mut returns = vec![resolve_type(&meta.ret, diag)];
    for arg in &meta.args {
        let ty = resolve_type(&arg.ty, diag);
        if matches!(arg.direction, Direction::In | Direction::Inout) {
            params.push(ParameterDescriptor {
                name: arg.name.clone(),
                ty: Some(ty.clone()),
                direction: arg.direction,
                default: None,
            });
        }
        if matches!(arg.direction, Direction::Out | Direction::Inout) {
            returns.push(ty);
        }
    }

    SignatureParts {
        params,
        returns,
        is_static,
        needs_self,
    }
}

/// Build the composite return descriptor: drop `None`-typed entries, then
/// a single survivor stands alone, multiple survivors form an ordered
/// tuple, and zero survivors mean the callable returns nothing.
fn composite(returns: Vec<TypeDescriptor>) -> TypeDescriptor {
    let mut survivors: Vec<TypeDescriptor> = returns
        .into_iter()
        .filter(|t| *t != TypeDescriptor::Void)
        .collect();
    match survivors.len() {
        0 => TypeDescriptor::Void,
        1 => survivors.remove(0),
        _ => TypeDescriptor::Tuple(survivors),
    }
}
