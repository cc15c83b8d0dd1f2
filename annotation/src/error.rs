//! Error types for binding and projection.

use thiserror::Error;

/// Errors raised while building an [`AnnotatedSignature`](crate::AnnotatedSignature).
///
/// All variants describe programmer errors in the interface definition;
/// none of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// The field name is already bound within the same signature.
    #[error("field `{field}` is already bound to <{existing_uri}>; refusing to rebind it to <{rejected_uri}>")]
    DuplicateBinding {
        /// The field name that was bound twice.
        field: String,
        /// URI of the binding that is kept.
        existing_uri: String,
        /// URI of the binding that was rejected.
        rejected_uri: String,
    },
    /// A return field was already designated for this signature.
    #[error("signature `{function}` already returns `{field}`")]
    ReturnAlreadyBound {
        /// Function whose signature is being built.
        function: String,
        /// The return field that is already bound.
        field: String,
    },
    /// Field names beginning with `@` collide with JSON-LD keywords.
    #[error("field `{field}` collides with a JSON-LD keyword")]
    ReservedField {
        /// The rejected field name.
        field: String,
    },
    /// Field names must be non-empty.
    #[error("field name must not be empty")]
    EmptyField,
    /// The URI has no scheme and cannot identify an ontology term.
    #[error("`{uri}` is not an absolute URI")]
    InvalidUri {
        /// The rejected URI.
        uri: String,
    },
}

/// Errors raised by [`AnnotationRegistry::project`](crate::AnnotationRegistry::project).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The payload carries a field that has no binding in the signature.
    #[error("payload field `{field}` is not bound in signature `{function}`")]
    UnboundField {
        /// Function whose signature was projected.
        function: String,
        /// The orphan payload field.
        field: String,
    },
    /// A bound field has no value in the payload.
    #[error("payload is missing a value for bound field `{field}`")]
    MissingValue {
        /// The bound field without a value.
        field: String,
    },
    /// The value does not have the bound structural type.
    #[error("field `{field}` expects {expected}, found {found}")]
    StructuralMismatch {
        /// The offending field.
        field: String,
        /// Display form of the expected structural type.
        expected: String,
        /// Short description of the JSON value found.
        found: String,
    },
    /// A payload built from JSON must be a JSON object.
    #[error("payload must be a JSON object, found {found}")]
    PayloadNotObject {
        /// Short description of the JSON value found.
        found: String,
    },
    /// A payload value could not be converted to JSON.
    #[error("value for field `{field}` is not representable as JSON: {message}")]
    Unserializable {
        /// The field being inserted.
        field: String,
        /// The serializer's message.
        message: String,
    },
}

/// Either a binding or a projection failure, for helpers that do both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Building the signature failed.
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
    /// Projecting the payload failed.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
