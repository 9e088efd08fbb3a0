//! Declaration text rendering.
//!
//! Turns classified records into Python stub source. All cross-module name
//! qualification goes through the [`ModuleContext`] so every rendered
//! reference is backed by an import line in the final header.

use crate::descriptor::{
    AttributeKind, AttributeRecord, CallableDescriptor, ContainerKind, ParameterDescriptor,
    TypeDescriptor,
};
use crate::module::ModuleContext;

/// Render a type descriptor as an annotation expression.
pub fn render_type(desc: &TypeDescriptor, ctx: &mut ModuleContext) -> String {
    match desc {
        TypeDescriptor::Primitive(p) => p.spelling().to_string(),
        TypeDescriptor::Container(ContainerKind::List, element) => {
            format!("typing.List[{}]", render_type(element, ctx))
        }
        // The metadata carries only the key type of a hash container.
        TypeDescriptor::Container(ContainerKind::Hash, key) => {
            format!("typing.Dict[{}, typing.Any]", render_type(key, ctx))
        }
        TypeDescriptor::InterfaceRef { module, name } => ctx.format_entity(module, name),
        TypeDescriptor::Callable { params, ret } => {
            let params: Vec<String> = params.iter().map(|p| render_type(p, ctx)).collect();
            format!(
                "typing.Callable[[{}], {}]",
                params.join(", "),
                render_type(ret, ctx)
            )
        }
        TypeDescriptor::Tuple(items) => {
            let items: Vec<String> = items.iter().map(|t| render_type(t, ctx)).collect();
            format!("typing.Tuple[{}]", items.join(", "))
        }
        TypeDescriptor::Named(spelling) => spelling.clone(),
        TypeDescriptor::Opaque => "typing.Any".to_string(),
        TypeDescriptor::Void => "None".to_string(),
    }
}

fn render_param(param: &ParameterDescriptor, ctx: &mut ModuleContext) -> String {
    let mut out = param.name.clone();
    if let Some(ty) = &param.ty {
        out.push_str(": ");
        out.push_str(&render_type(ty, ctx));
        if let Some(default) = &param.default {
            out.push_str(" = ");
            out.push_str(default);
        }
    } else if let Some(default) = &param.default {
        out.push('=');
        out.push_str(default);
    }
    out
}

/// Render a full `def` declaration with an abstract body.
pub fn render_method(name: &str, callable: &CallableDescriptor, ctx: &mut ModuleContext) -> String {
    let params: Vec<String> = callable
        .params
        .iter()
        .map(|p| render_param(p, ctx))
        .collect();
    let ret = render_type(&callable.ret, ctx);
    let decl = format!("def {}({}) -> {}: ...", name, params.join(", "), ret);
    if callable.is_static {
        format!("@staticmethod\n{}", decl)
    } else {
        decl
    }
}

/// Render a typed assignment declaration.
pub fn render_assignment(name: &str, type_text: &str) -> String {
    format!("{} = ...  # type: {}", name, type_text)
}

/// Render one classified attribute.
pub fn render_record(record: &AttributeRecord, ctx: &mut ModuleContext) -> String {
    match &record.kind {
        AttributeKind::Method(callable) => render_method(&record.name, callable, ctx),
        AttributeKind::Field(ty) | AttributeKind::Constant(ty) => {
            let text = render_type(ty, ctx);
            render_assignment(&record.name, &text)
        }
        AttributeKind::Property(hint) => {
            let text = match hint {
                Some(ty) => render_type(ty, ctx),
                None => "typing.Any".to_string(),
            };
            render_assignment(&record.name, &text)
        }
    }
}
