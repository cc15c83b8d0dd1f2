//! N-Triples serializer for projected documents.
//!
//! Every projected field becomes one or more triples whose predicate is the
//! field's bound URI. Literals are typed with the field's XSD datatype.
//! Tuples are written as `rdf:List` chains of blank nodes; lists repeat the
//! predicate once per element; null optionals emit nothing.

use serde_json::Value;

use crate::model::{iris, is_absolute_uri, StructuralType};
use crate::projection::JsonLdDocument;

/// Blank node used as subject when no IRI is supplied.
pub const DEFAULT_SUBJECT: &str = "_:subject";

/// Serializes a projected document to an N-Triples string.
///
/// `subject` names the resource the fields describe: an absolute IRI, or a
/// blank node written `_:label`. Without one the blank node
/// [`DEFAULT_SUBJECT`] is used. Callers taking the subject from user input
/// should check it with [`is_subject`] first.
#[must_use]
pub fn to_ntriples(doc: &JsonLdDocument, subject: Option<&str>) -> String {
    let subject = match subject {
        None => DEFAULT_SUBJECT.to_owned(),
        Some(s) if s.starts_with("_:") => s.to_owned(),
        Some(s) => iri(s),
    };
    let mut writer = Writer {
        out: String::with_capacity(128 * doc.fields().len()),
        next_blank: 0,
        subject: subject.clone(),
    };

    for field in doc.fields() {
        writer.value(
            &subject,
            field.semantic.uri(),
            field.semantic.structural(),
            &field.value,
        );
    }

    writer.out
}

/// Returns true if `s` can name a subject: an absolute IRI or a `_:label`
/// blank node.
#[must_use]
pub fn is_subject(s: &str) -> bool {
    match s.strip_prefix("_:") {
        Some(label) => is_blank_node_label(label),
        None => is_absolute_uri(s) && !s.contains(['<', '>', '"', '{', '}', '|', '^', '`', '\\']),
    }
}

fn is_blank_node_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphanumeric() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !label.ends_with('.')
}

struct Writer {
    out: String,
    next_blank: usize,
    subject: String,
}

impl Writer {
    fn value(&mut self, subj: &str, pred: &str, ty: &StructuralType, value: &Value) {
        match (ty, value) {
            (StructuralType::Optional(_), Value::Null) => {}
            (StructuralType::Optional(inner), v) => self.value(subj, pred, inner, v),
            (StructuralType::List(item), Value::Array(values)) => {
                for v in values {
                    self.value(subj, pred, item, v);
                }
            }
            (StructuralType::Tuple(items), Value::Array(values)) => {
                let head = self.list(items, values);
                triple(&mut self.out, subj, pred, &head);
            }
            (ty, v) => {
                let obj = literal(ty, v);
                triple(&mut self.out, subj, pred, &obj);
            }
        }
    }

    /// Writes an `rdf:List` chain and returns the term naming its head.
    fn list(&mut self, items: &[StructuralType], values: &[Value]) -> String {
        let nodes: Vec<String> = values.iter().map(|_| self.blank()).collect();
        for (i, (ty, v)) in items.iter().zip(values).enumerate() {
            let node = &nodes[i];
            self.value(node, iris::RDF_FIRST, ty, v);
            let rest = nodes
                .get(i + 1)
                .cloned()
                .unwrap_or_else(|| iri(iris::RDF_NIL));
            triple(&mut self.out, node, iris::RDF_REST, &rest);
        }
        nodes.first().cloned().unwrap_or_else(|| iri(iris::RDF_NIL))
    }

    /// Fresh list node; never the caller's subject.
    fn blank(&mut self) -> String {
        loop {
            let node = format!("_:b{}", self.next_blank);
            self.next_blank += 1;
            if node != self.subject {
                return node;
            }
        }
    }
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push_str(subj);
    out.push_str(" <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn literal(ty: &StructuralType, value: &Value) -> String {
    let lexical = match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Records and anything unexpected are written as compact JSON.
        other => other.to_string(),
    };
    lit(&lexical, ty.xsd_datatype())
}

fn lit(s: &str, datatype: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"^^<{}>", escaped, datatype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SemanticType;
    use crate::projection::Payload;
    use crate::registry::AnnotationRegistry;
    use crate::vocab::wind;
    use serde_json::json;

    const URI: &str = "https://example.org/terms/";

    fn project(ty: StructuralType, value: Value) -> JsonLdDocument {
        let mut registry = AnnotationRegistry::new("f");
        registry
            .bind("x", SemanticType::new(ty, format!("{URI}x")).unwrap())
            .unwrap();
        registry.project(&Payload::new().with("x", value)).unwrap()
    }

    #[test]
    fn reference_observation_has_one_triple_per_field() {
        let doc = wind::reference_observation().unwrap();
        let nt = to_ntriples(&doc, None);
        assert_eq!(nt.lines().count(), 2);
        assert!(nt.contains(
            "_:subject <https://wind-measurement-ontology.foo/terms/wind_speed> \
             \"10.0\"^^<http://www.w3.org/2001/XMLSchema#double> ."
        ));
    }

    #[test]
    fn every_line_ends_with_period() {
        let doc = wind::reference_observation().unwrap();
        for line in to_ntriples(&doc, Some("https://example.org/obs/1")).lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
            assert!(line.starts_with("<https://example.org/obs/1>"));
        }
    }

    #[test]
    fn blank_node_subject_is_not_wrapped() {
        let doc = wind::reference_observation().unwrap();
        for line in to_ntriples(&doc, Some("_:obs")).lines() {
            assert!(line.starts_with("_:obs <"), "{line}");
        }
    }

    #[test]
    fn list_nodes_avoid_a_blank_subject() {
        let pair = StructuralType::Tuple(vec![StructuralType::Decimal, StructuralType::Decimal]);
        let doc = project(pair, json!([1.5, -2.0]));
        let nt = to_ntriples(&doc, Some("_:b0"));
        assert!(nt.ends_with("_:b0 <https://example.org/terms/x> _:b1 .\n"), "{nt}");
        assert!(!nt.contains("_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#first>"));
    }

    #[test]
    fn subject_must_be_an_iri_or_blank_node() {
        for ok in ["https://example.org/obs/1", "urn:uuid:1234", "_:obs", "_:b0", "_:a.b-c"] {
            assert!(is_subject(ok), "{ok}");
        }
        for bad in ["not an iri", "obs", "_:", "_:a b", "_:a.", "_:-a", "https://x.org/<a>", ""] {
            assert!(!is_subject(bad), "{bad}");
        }
    }

    #[test]
    fn null_optional_emits_nothing() {
        let doc = project(StructuralType::optional(StructuralType::Text), Value::Null);
        assert!(to_ntriples(&doc, None).is_empty());
    }

    #[test]
    fn list_repeats_the_predicate() {
        let doc = project(StructuralType::list(StructuralType::Text), json!(["Rust", "Python"]));
        let nt = to_ntriples(&doc, None);
        assert_eq!(nt.lines().count(), 2);
        assert!(nt.contains("\"Python\"^^<http://www.w3.org/2001/XMLSchema#string>"));
    }

    #[test]
    fn tuple_becomes_rdf_list() {
        let pair = StructuralType::Tuple(vec![StructuralType::Decimal, StructuralType::Decimal]);
        let doc = project(pair, json!([1.5, -2.0]));
        let nt = to_ntriples(&doc, None);
        let expected = "\
_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#first> \"1.5\"^^<http://www.w3.org/2001/XMLSchema#double> .
_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#rest> _:b1 .
_:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#first> \"-2.0\"^^<http://www.w3.org/2001/XMLSchema#double> .
_:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#rest> <http://www.w3.org/1999/02/22-rdf-syntax-ns#nil> .
_:subject <https://example.org/terms/x> _:b0 .
";
        assert_eq!(nt, expected);
    }

    #[test]
    fn record_is_a_json_literal_with_escaped_quotes() {
        let doc = project(StructuralType::Record, json!({"name": "A"}));
        let nt = to_ntriples(&doc, None);
        assert!(nt.contains(
            "\"{\\\"name\\\":\\\"A\\\"}\"^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON>"
        ));
    }

    #[test]
    fn newlines_are_escaped() {
        let doc = project(StructuralType::Text, json!("line one\nline two"));
        let nt = to_ntriples(&doc, None);
        assert_eq!(nt.lines().count(), 1);
        assert!(nt.contains("line one\\nline two"));
    }
}
