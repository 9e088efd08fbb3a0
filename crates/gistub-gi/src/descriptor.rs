//! Semantic descriptors: the engine's intermediate representation.
//!
//! [`crate::resolve`] and [`crate::signature`] lower raw metadata into these
//! descriptors; [`crate::render`] turns them into declaration text. Once an
//! attribute is classified into an [`AttributeRecord`] its kind is never
//! re-derived — emission is a single dispatch over the closed variant set.

use crate::meta::Direction;

/// Primitive Python types with fixed spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Int,
    Float,
    Str,
}

impl Primitive {
    pub fn spelling(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::Str => "str",
        }
    }
}

/// Which container family a container descriptor renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    List,
    Hash,
}

/// A resolved semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    /// Single-element container. For hash containers the element is the key
    /// type; the value type is not carried by the metadata.
    Container(ContainerKind, Box<TypeDescriptor>),
    /// Reference to a named entity in some module. Qualification and import
    /// tracking happen at render time against the current module.
    InterfaceRef { module: String, name: String },
    /// Callback type: positional parameter types plus a return type.
    Callable {
        params: Vec<TypeDescriptor>,
        ret: Box<TypeDescriptor>,
    },
    /// Ordered tuple of types (composite returns).
    Tuple(Vec<TypeDescriptor>),
    /// An externally supplied spelling taken verbatim (override annotations).
    Named(String),
    /// Recognized but unknowable; renders as `typing.Any`.
    Opaque,
    /// The absence of a value; renders as `None`.
    Void,
}

impl TypeDescriptor {
    /// Build a descriptor from an annotation spelling recorded by the
    /// dumper. Known primitive spellings map directly; dotted names become
    /// entity references so they participate in import tracking; anything
    /// else is kept verbatim.
    pub fn from_spelling(spelling: &str) -> TypeDescriptor {
        match spelling {
            "bool" => TypeDescriptor::Primitive(Primitive::Bool),
            "int" => TypeDescriptor::Primitive(Primitive::Int),
            "float" => TypeDescriptor::Primitive(Primitive::Float),
            "str" => TypeDescriptor::Primitive(Primitive::Str),
            "None" => TypeDescriptor::Void,
            _ => match spelling.rsplit_once('.') {
                Some((module, name)) => TypeDescriptor::InterfaceRef {
                    module: module.to_string(),
                    name: name.to_string(),
                },
                None => TypeDescriptor::Named(spelling.to_string()),
            },
        }
    }
}

/// One parameter of a synthesized callable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Absent for the synthetic `self` parameter and unannotated Python
    /// function parameters.
    pub ty: Option<TypeDescriptor>,
    pub direction: Direction,
    /// Default value spelling, if any.
    pub default: Option<String>,
}

impl ParameterDescriptor {
    /// The synthetic leading parameter for instance methods.
    pub fn self_param() -> Self {
        ParameterDescriptor {
            name: "self".to_string(),
            ty: None,
            direction: Direction::In,
            default: None,
        }
    }

    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        ParameterDescriptor {
            name: name.into(),
            ty: Some(ty),
            direction: Direction::In,
            default: None,
        }
    }
}

/// A synthesized callable: ordered IN/INOUT parameters plus a composite
/// return built from the declared return and all OUT/INOUT types.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableDescriptor {
    pub params: Vec<ParameterDescriptor>,
    pub ret: TypeDescriptor,
    pub is_static: bool,
    pub needs_self: bool,
}

/// A classified attribute ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    pub name: String,
    pub kind: AttributeKind,
}

impl AttributeRecord {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        AttributeRecord {
            name: name.into(),
            kind,
        }
    }
}

/// The closed set of declaration shapes an attribute can take.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    /// Typed function declaration with an abstract body.
    Method(CallableDescriptor),
    /// Typed assignment from a declared structural field.
    Field(TypeDescriptor),
    /// Typed assignment from a constant value.
    Constant(TypeDescriptor),
    /// Typed assignment from a computed property; `None` means no hint
    /// was recorded and the declaration falls back to `typing.Any`.
    Property(Option<TypeDescriptor>),
}
