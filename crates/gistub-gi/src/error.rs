//! Error types for stub generation.
//!
//! Only structural inconsistencies are errors: the graph and the engine
//! disagree about an entity, or a strip configuration is provably wrong.
//! Everything recoverable goes through the diagnostics channel instead.
//! An error aborts the current module's generation; partially wrong stub
//! text is never emitted.

use thiserror::Error;

/// Fatal errors raised while synthesizing one callable signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Boolean-result stripping found a non-boolean leading return entry.
    #[error("tried to strip a non-boolean return type")]
    StripNonBoolean,

    /// Boolean-result stripping left no return entries at all.
    #[error("no return values left after boolean stripping")]
    StripExhausted,
}

/// Fatal errors for a single module's stub generation.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A struct/union attribute matched neither the field map nor the
    /// method map: the introspection data and the engine disagree.
    #[error("struct {entity} attribute {attr} is in neither the field nor the method map")]
    StructMemberUnknown { entity: String, attr: String },

    /// Signature synthesis failed for a named attribute.
    #[error("couldn't make signature for {attr}: {source}")]
    Signature {
        attr: String,
        #[source]
        source: SignatureError,
    },

    /// The module is present in the graph but not introspectable.
    #[error("tried to generate a stub for non-introspection module {module}")]
    NotIntrospectable { module: String },

    /// The module is not present in the graph at all.
    #[error("module {module} is not present in the metadata graph")]
    UnknownModule { module: String },
}

impl EmitError {
    /// Wrap a signature failure with the attribute it occurred on.
    pub fn signature(attr: impl Into<String>, source: SignatureError) -> Self {
        EmitError::Signature {
            attr: attr.into(),
            source,
        }
    }

    pub fn struct_member_unknown(entity: impl Into<String>, attr: impl Into<String>) -> Self {
        EmitError::StructMemberUnknown {
            entity: entity.into(),
            attr: attr.into(),
        }
    }
}
