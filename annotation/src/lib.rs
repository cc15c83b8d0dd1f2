//! Semantic annotation of function signatures.
//!
//! JSON Schema makes a document's *structure* machine-readable; JSON-LD adds
//! *meaning* on top by mapping keys to ontology URIs in an `@context`. This
//! crate applies the same idea to code: each parameter and return value of a
//! function is bound to a [`SemanticType`] (a structural type plus a URI),
//! and a call's values can be projected into a JSON-LD document that any
//! JSON-LD or RDF tooling understands.
//!
//! # Entry Point
//!
//! ```
//! use semantic_annotation::vocab::wind;
//!
//! let doc = wind::reference_observation()?;
//! assert_eq!(doc.context().len(), 2);
//! # Ok::<(), semantic_annotation::Error>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! use semantic_annotation::serializer::{jsonld, ntriples};
//! use semantic_annotation::vocab::wind;
//!
//! let doc = wind::reference_observation()?;
//! let json_ld = jsonld::to_json_ld(&doc);
//! let triples = ntriples::to_ntriples(&doc, None);
//! # assert!(json_ld["@context"].is_object());
//! # assert_eq!(triples.lines().count(), 2);
//! # Ok::<(), semantic_annotation::Error>(())
//! ```
//!
//! Deciding whether two URI-bound types are *compatible* (equivalence,
//! subsumption, unit conversion) is left to external reasoners; nothing
//! here inspects the meaning of a URI.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotated;
pub mod error;
pub mod model;
pub mod projection;
pub mod registry;
pub mod serializer;
pub mod vocab;

pub use annotated::Annotated;
pub use error::{AnnotationError, Error, ProjectionError};
pub use model::{AnnotatedSignature, Binding, ContextDocument, SemanticType, StructuralType};
pub use projection::{JsonLdDocument, Payload, ProjectedField};
pub use registry::AnnotationRegistry;
