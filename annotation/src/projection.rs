//! Payloads and their JSON-LD projection.
//!
//! A [`Payload`] holds the literal values of one call (field name to JSON
//! value). Projecting it through an [`AnnotationRegistry`](crate::AnnotationRegistry)
//! yields a [`JsonLdDocument`]: the `@context` derived from the signature
//! followed by the payload fields, in binding order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::annotated::Annotated;
use crate::error::ProjectionError;
use crate::model::{describe_value, ContextDocument, SemanticType};

/// Literal values of one call, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    values: Map<String, Value>,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value and returns the payload, for chained construction.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Adds the value of an [`Annotated`] wrapper. The metadata is dropped;
    /// the signature the payload is projected through supplies the meaning.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Unserializable`] if the value cannot be
    /// represented as JSON.
    pub fn with_annotated<T: Serialize>(
        mut self,
        field: impl Into<String>,
        value: &Annotated<T>,
    ) -> Result<Self, ProjectionError> {
        let field = field.into();
        let json = serde_json::to_value(value.value()).map_err(|e| {
            ProjectionError::Unserializable {
                field: field.clone(),
                message: e.to_string(),
            }
        })?;
        self.values.insert(field, json);
        Ok(self)
    }

    /// Inserts a value, returning the previous value for `field`.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field.into(), value.into())
    }

    /// Builds a payload from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::PayloadNotObject`] for any other JSON value.
    pub fn from_value(value: Value) -> Result<Self, ProjectionError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ProjectionError::PayloadNotObject {
                found: describe_value(&other),
            }),
        }
    }

    /// Value supplied for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the payload has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One projected field: its binding and its literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    /// Field name.
    pub field: String,
    /// Semantic type bound to the field.
    pub semantic: SemanticType,
    /// Literal value from the payload.
    pub value: Value,
}

/// A JSON-LD shaped document: `{"@context": {...}, <fields...>}`.
///
/// Produced by [`AnnotationRegistry::project`](crate::AnnotationRegistry::project).
/// Field order follows the signature, so serializing the same document
/// always yields the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdDocument {
    pub(crate) function: String,
    pub(crate) fields: Vec<ProjectedField>,
}

impl JsonLdDocument {
    /// Name of the function whose signature was projected.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Projected fields in binding order.
    #[must_use]
    pub fn fields(&self) -> &[ProjectedField] {
        &self.fields
    }

    /// The `@context` block of the document.
    #[must_use]
    pub fn context(&self) -> ContextDocument {
        let mut context = ContextDocument::default();
        for f in &self.fields {
            context.push(f.field.clone(), f.semantic.uri().to_owned());
        }
        context
    }

    /// Literal value of `field`, if projected.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.field == field).map(|f| &f.value)
    }

    /// Renders the document as a JSON object with `@context` first.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("@context".to_owned(), self.context().to_value());
        for f in &self.fields {
            map.insert(f.field.clone(), f.value.clone());
        }
        Value::Object(map)
    }

    /// Pretty-prints the document with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for JsonLdDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("@context", &self.context())?;
        for f in &self.fields {
            map.serialize_entry(&f.field, &f.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_from_non_object_is_rejected() {
        let err = Payload::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::PayloadNotObject {
                found: "array of 2 item(s)".to_owned()
            }
        );
    }

    #[test]
    fn payload_keeps_insertion_order() {
        let payload = Payload::new().with("b", 1).with("a", 2);
        assert_eq!(payload.fields().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn annotated_value_is_inserted_without_metadata() {
        let semantic = SemanticType::decimal("https://example.org/terms/speed").unwrap();
        let payload = Payload::new()
            .with_annotated("speed", &Annotated::new(2.5_f64, semantic))
            .unwrap();
        assert_eq!(payload.get("speed"), Some(&json!(2.5)));
    }
}
