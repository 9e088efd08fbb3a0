//! GIR type tags.
//!
//! The introspection layer describes every type with a low-level tag plus,
//! for container and interface tags, a nested type handle. The tag set is
//! closed upstream; `Unknown` absorbs tags this version does not map yet so
//! graph loading never fails on them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::Primitive;

/// Low-level type tag as spelled in the metadata graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Array,
    Boolean,
    Double,
    Error,
    Filename,
    Float,
    GHash,
    GList,
    GSList,
    GType,
    Int8,
    Int16,
    Int32,
    Int64,
    Interface,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Unichar,
    Utf8,
    Void,
    /// Tag spelling this version does not recognize.
    #[serde(other)]
    Unknown,
}

impl TypeTag {
    /// Whether this tag carries exactly one element type handle.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            TypeTag::Array | TypeTag::GHash | TypeTag::GList | TypeTag::GSList
        )
    }

    /// The fixed primitive mapping for tags that have one.
    ///
    /// Container, interface, void and the two registered-type tags
    /// (`GType`, `Error`) are resolved dynamically and return `None` here.
    pub fn primitive(self) -> Option<Primitive> {
        match self {
            TypeTag::Boolean => Some(Primitive::Bool),
            TypeTag::Int8
            | TypeTag::Int16
            | TypeTag::Int32
            | TypeTag::Int64
            | TypeTag::UInt8
            | TypeTag::UInt16
            | TypeTag::UInt32
            | TypeTag::UInt64 => Some(Primitive::Int),
            TypeTag::Float | TypeTag::Double => Some(Primitive::Float),
            TypeTag::Utf8 | TypeTag::Filename | TypeTag::Unichar => Some(Primitive::Str),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeTag::Array => "array",
            TypeTag::Boolean => "boolean",
            TypeTag::Double => "double",
            TypeTag::Error => "error",
            TypeTag::Filename => "filename",
            TypeTag::Float => "float",
            TypeTag::GHash => "ghash",
            TypeTag::GList => "glist",
            TypeTag::GSList => "gslist",
            TypeTag::GType => "gtype",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Interface => "interface",
            TypeTag::UInt8 => "uint8",
            TypeTag::UInt16 => "uint16",
            TypeTag::UInt32 => "uint32",
            TypeTag::UInt64 => "uint64",
            TypeTag::Unichar => "unichar",
            TypeTag::Utf8 => "utf8",
            TypeTag::Void => "void",
            TypeTag::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
