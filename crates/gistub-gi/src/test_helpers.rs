//! Builders for metadata values shared across engine tests.

use std::collections::BTreeMap;

use crate::meta::{
    ArgMeta, AttrValue, CallableKind, CallableMeta, Direction, EntityKind, EntityMeta, EntityRef,
    Export, FieldMeta, InterfaceTarget, ModuleMeta, TypeMeta,
};
use crate::tags::TypeTag;

pub fn ty(tag: TypeTag) -> TypeMeta {
    TypeMeta::of(tag)
}

pub fn void_ptr() -> TypeMeta {
    TypeMeta {
        is_pointer: true,
        ..TypeMeta::of(TypeTag::Void)
    }
}

pub fn list_of(element: TypeMeta) -> TypeMeta {
    TypeMeta {
        element: Some(Box::new(element)),
        ..TypeMeta::of(TypeTag::GList)
    }
}

pub fn array_of(element: TypeMeta) -> TypeMeta {
    TypeMeta {
        element: Some(Box::new(element)),
        ..TypeMeta::of(TypeTag::Array)
    }
}

pub fn hash_of(key: TypeMeta) -> TypeMeta {
    TypeMeta {
        element: Some(Box::new(key)),
        ..TypeMeta::of(TypeTag::GHash)
    }
}

pub fn entity_ty(module: &str, name: &str) -> TypeMeta {
    TypeMeta {
        interface: Some(InterfaceTarget::Entity {
            module: module.to_string(),
            name: name.to_string(),
        }),
        ..TypeMeta::of(TypeTag::Interface)
    }
}

pub fn callback_ty(callable: CallableMeta) -> TypeMeta {
    TypeMeta {
        interface: Some(InterfaceTarget::Callable(Box::new(callable))),
        ..TypeMeta::of(TypeTag::Interface)
    }
}

pub fn arg(name: &str, ty: TypeMeta, direction: Direction) -> ArgMeta {
    ArgMeta {
        name: name.to_string(),
        ty,
        direction,
    }
}

/// Fluent builder for [`CallableMeta`].
pub struct CallableBuilder {
    meta: CallableMeta,
}

impl CallableBuilder {
    fn new(name: &str, kind: CallableKind) -> Self {
        CallableBuilder {
            meta: CallableMeta {
                name: name.to_string(),
                kind,
                args: Vec::new(),
                ret: TypeMeta::of(TypeTag::Void),
                has_container: false,
            },
        }
    }

    pub fn arg(mut self, name: &str, ty: TypeMeta) -> Self {
        self.meta.args.push(arg(name, ty, Direction::In));
        self
    }

    pub fn out_arg(mut self, name: &str, ty: TypeMeta) -> Self {
        self.meta.args.push(arg(name, ty, Direction::Out));
        self
    }

    pub fn inout_arg(mut self, name: &str, ty: TypeMeta) -> Self {
        self.meta.args.push(arg(name, ty, Direction::Inout));
        self
    }

    pub fn ret(mut self, ty: TypeMeta) -> Self {
        self.meta.ret = ty;
        self
    }

    pub fn in_container(mut self) -> Self {
        self.meta.has_container = true;
        self
    }

    pub fn build(self) -> CallableMeta {
        self.meta
    }
}

pub fn function(name: &str) -> CallableBuilder {
    CallableBuilder::new(name, CallableKind::Function)
}

pub fn method(name: &str) -> CallableBuilder {
    let builder = CallableBuilder::new(name, CallableKind::Method);
    builder.in_container()
}

pub fn vfunc(name: &str) -> CallableBuilder {
    let builder = CallableBuilder::new(name, CallableKind::VirtualMethod);
    builder.in_container()
}

pub fn constructor(name: &str) -> CallableBuilder {
    let builder = CallableBuilder::new(name, CallableKind::Constructor);
    builder.in_container()
}

pub fn callback(name: &str) -> CallableBuilder {
    CallableBuilder::new(name, CallableKind::Callback)
}

/// Fluent builder for [`EntityMeta`].
pub struct EntityBuilder {
    meta: EntityMeta,
}

impl EntityBuilder {
    fn new(module: &str, name: &str, kind: EntityKind) -> Self {
        EntityBuilder {
            meta: EntityMeta {
                name: name.to_string(),
                module: module.to_string(),
                kind,
                parent: None,
                attrs: BTreeMap::new(),
                fields: Vec::new(),
                methods: Vec::new(),
                members: BTreeMap::new(),
                type_hints: BTreeMap::new(),
            },
        }
    }

    pub fn parent(mut self, module: &str, name: &str) -> Self {
        self.meta.parent = Some(EntityRef {
            module: module.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn attr(mut self, name: &str, value: AttrValue) -> Self {
        self.meta.attrs.insert(name.to_string(), value);
        self
    }

    pub fn field(mut self, name: &str, ty: TypeMeta) -> Self {
        self.meta.fields.push(FieldMeta {
            name: name.to_string(),
            ty,
        });
        self
    }

    pub fn method_info(mut self, callable: CallableMeta) -> Self {
        self.meta.methods.push(callable);
        self
    }

    pub fn member(mut self, name: &str, value: i64) -> Self {
        self.meta.members.insert(name.to_string(), value);
        self
    }

    pub fn hint(mut self, name: &str, spelling: &str) -> Self {
        self.meta
            .type_hints
            .insert(name.to_string(), spelling.to_string());
        self
    }

    pub fn build(self) -> EntityMeta {
        self.meta
    }
}

pub fn object(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Object)
}

pub fn iface(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Interface)
}

pub fn record(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Struct)
}

pub fn genum(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Enum)
}

pub fn gflags(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Flags)
}

pub fn unknown_entity(module: &str, name: &str) -> EntityBuilder {
    EntityBuilder::new(module, name, EntityKind::Unknown)
}

/// Fluent builder for [`ModuleMeta`].
pub struct ModuleBuilder {
    meta: ModuleMeta,
}

impl ModuleBuilder {
    pub fn entity(mut self, name: &str, entity: EntityMeta) -> Self {
        self.meta
            .exports
            .insert(name.to_string(), Export::Entity(entity));
        self
    }

    pub fn value(mut self, name: &str, value: AttrValue) -> Self {
        self.meta
            .exports
            .insert(name.to_string(), Export::Value(value));
        self
    }

    pub fn lazy_entity(mut self, name: &str, entity: EntityMeta) -> Self {
        self.meta
            .lazy_exports
            .insert(name.to_string(), Export::Entity(entity));
        self
    }

    pub fn lazy_value(mut self, name: &str, value: AttrValue) -> Self {
        self.meta
            .lazy_exports
            .insert(name.to_string(), Export::Value(value));
        self
    }

    pub fn with_overrides(mut self) -> Self {
        self.meta.has_overrides = true;
        self
    }

    pub fn not_introspected(mut self) -> Self {
        self.meta.introspected = false;
        self
    }

    pub fn build(self) -> ModuleMeta {
        self.meta
    }
}

pub fn gi_module(name: &str) -> ModuleBuilder {
    ModuleBuilder {
        meta: ModuleMeta {
            name: name.to_string(),
            introspected: true,
            has_overrides: false,
            exports: BTreeMap::new(),
            lazy_exports: BTreeMap::new(),
        },
    }
}
