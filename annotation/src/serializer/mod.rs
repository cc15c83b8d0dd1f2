//! Serializers for projected documents.
//!
//! Two serialization formats are supported:
//! - **JSON-LD** ([`jsonld`]) — the canonical `{"@context": ..., fields...}` form
//! - **N-Triples** ([`ntriples`]) — the RDF view, one triple per line

pub mod jsonld;
pub mod ntriples;
