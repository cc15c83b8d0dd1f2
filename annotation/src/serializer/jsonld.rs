//! JSON-LD serializer for projected documents.
//!
//! Produces a single JSON-LD document whose `@context` maps every field
//! name to its bound URI, followed by the literal field values.

use serde_json::Value;

use crate::projection::JsonLdDocument;

/// Converts a projected document to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(doc: &JsonLdDocument) -> Value {
    doc.to_value()
}

/// Serializes a projected document to pretty-printed JSON-LD text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_ld_string(doc: &JsonLdDocument) -> Result<String, serde_json::Error> {
    doc.to_string_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::wind;

    #[test]
    fn produces_context_and_fields() {
        let doc = wind::reference_observation().unwrap();
        let json = to_json_ld(&doc);
        assert!(json["@context"].is_object());
        assert_eq!(json["wind_speed"], 10.0);
        assert_eq!(json["wind_from_direction"], 0.0);
    }

    #[test]
    fn context_comes_first() {
        let doc = wind::reference_observation().unwrap();
        let json = to_json_ld(&doc);
        let first = json.as_object().and_then(|m| m.keys().next().cloned());
        assert_eq!(first.as_deref(), Some("@context"));
    }

    #[test]
    fn string_form_parses_back_to_the_value_form() {
        let doc = wind::reference_observation().unwrap();
        let text = to_json_ld_string(&doc).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, to_json_ld(&doc));
    }
}
