//! Introspection metadata model.
//!
//! These types mirror what the introspection layer reports about a foreign
//! object model: modules export entities and plain values; entities carry
//! attributes, structural fields, methods and (for enums and flags) declared
//! member values; callables carry directed arguments and a return type.
//!
//! The whole graph arrives fully materialized as JSON (dumped externally)
//! and deserializes into a [`Repository`]. The engine only reads it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tags::TypeTag;

// ============================================================================
// Type Metadata
// ============================================================================

/// Which way a callable argument carries data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    Inout,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::In
    }
}

/// Raw type metadata: a tag plus auxiliary handles for the dynamic tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMeta {
    pub tag: TypeTag,
    /// Element type for container tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<TypeMeta>>,
    /// Referenced target for the interface tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceTarget>,
    /// Whether the underlying C type is a pointer. A pointer-shaped void
    /// is the usual "no idea what this is" case.
    #[serde(default)]
    pub is_pointer: bool,
}

impl TypeMeta {
    pub fn of(tag: TypeTag) -> Self {
        TypeMeta {
            tag,
            element: None,
            interface: None,
            is_pointer: false,
        }
    }
}

/// What an interface-tagged type points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterfaceTarget {
    /// A callable-shaped target (callback type). Boxed: callables carry
    /// type metadata, which closes a cycle back to this enum.
    Callable(Box<CallableMeta>),
    /// A registered named entity.
    Entity { module: String, name: String },
    /// The introspection layer knows nothing further.
    Unknown,
}

// ============================================================================
// Callable Metadata
// ============================================================================

/// What kind of callable the introspection layer reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallableKind {
    Function,
    Method,
    VirtualMethod,
    Constructor,
    Callback,
}

/// One declared callable argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeMeta,
    #[serde(default)]
    pub direction: Direction,
}

/// An introspected callable: named, directed arguments plus a return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallableMeta {
    pub name: String,
    pub kind: CallableKind,
    #[serde(default)]
    pub args: Vec<ArgMeta>,
    #[serde(rename = "return")]
    pub ret: TypeMeta,
    /// Whether the callable is attached to a containing entity.
    #[serde(default)]
    pub has_container: bool,
}

/// One parameter of a plain Python function recorded from an override
/// module (no introspection data, just the runtime signature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyParam {
    pub name: String,
    /// Annotation spelling, if the function has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Default value repr, if any. Reprs that are not valid source text
    /// (`<object at 0x...>`) are dropped at synthesis time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

// ============================================================================
// Attribute Values
// ============================================================================

/// The runtime value behind one named attribute, as the dumper saw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttrValue {
    /// Native introspected callable (function, method or virtual function).
    Callable(CallableMeta),
    /// A wrapper function carrying a reference to the original introspected
    /// callable. `qualname` identifies the wrapper.
    Wrapped {
        qualname: String,
        wrapped: CallableMeta,
    },
    /// Plain Python function defined in an override module.
    PyFunction {
        #[serde(default)]
        params: Vec<PyParam>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        returns: Option<String>,
    },
    /// Computed property added by an override module.
    Property,
    /// An enum or flags member instance.
    EnumMember {
        module: String,
        type_name: String,
        value: i64,
    },
    /// A GType constant.
    GTypeValue,
    Bool { value: bool },
    Int { value: i64 },
    Float { value: f64 },
    Str { value: String },
    /// Attribute access failed in the dumper. Expected for classes that are
    /// unreliable static bindings; an error anywhere else.
    Unavailable { message: String },
    /// Anything the dumper could not classify; carries the runtime type name.
    Opaque { type_name: String },
}

// ============================================================================
// Entities
// ============================================================================

/// Kind of a type-like unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Object,
    Interface,
    Struct,
    Union,
    Enum,
    Flags,
    /// No introspection data reachable for this entity.
    Unknown,
}

/// Reference to an entity by owning module and local name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub module: String,
    pub name: String,
}

/// One declared structural field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeMeta,
}

/// An introspectable type-like unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMeta {
    pub name: String,
    /// Defining module; override-defined entities keep their
    /// `gi.overrides.*` origin here and are rewritten at render time.
    pub module: String,
    pub kind: EntityKind,
    /// Primary parent only. Secondary interface parents are not recorded;
    /// the emitted base list names at most one parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityRef>,
    /// Named attributes, sorted by name for deterministic output.
    #[serde(default)]
    pub attrs: BTreeMap<String, AttrValue>,
    /// Declared structural fields (struct/union introspection).
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
    /// Introspected methods (struct/union introspection).
    #[serde(default)]
    pub methods: Vec<CallableMeta>,
    /// Declared member name to value mapping (enum/flags only).
    #[serde(default)]
    pub members: BTreeMap<String, i64>,
    /// Type hints recorded for override-defined computed properties.
    #[serde(default)]
    pub type_hints: BTreeMap<String, String>,
}

impl EntityMeta {
    /// Whether this entity was defined (or extended) by an override module.
    pub fn is_override(&self) -> bool {
        self.module.starts_with("gi.overrides")
    }
}

// ============================================================================
// Modules and the Repository
// ============================================================================

/// One exported name of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Export {
    Entity(EntityMeta),
    Value(AttrValue),
}

fn default_true() -> bool {
    true
}

/// An introspected module and its exported names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// Dotted module name (e.g. `gi.repository.Gtk`).
    pub name: String,
    /// Whether the introspection layer recognizes this module. Emission
    /// refuses modules where this is false.
    #[serde(default = "default_true")]
    pub introspected: bool,
    /// Whether an override module shadows this one. Plain Python functions
    /// and properties only occur on modules with overrides.
    #[serde(default)]
    pub has_overrides: bool,
    pub exports: BTreeMap<String, Export>,
    /// Exports only visible after forced materialization. Merged over
    /// `exports` at emission time; a lazy entry wins on name conflict.
    #[serde(default)]
    pub lazy_exports: BTreeMap<String, Export>,
}

/// The loaded metadata graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub modules: Vec<ModuleMeta>,
}

impl Repository {
    /// Deserialize a graph from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Look up a module by its dotted name.
    pub fn module(&self, name: &str) -> Option<&ModuleMeta> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Names of all modules in the graph, in graph order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }
}
