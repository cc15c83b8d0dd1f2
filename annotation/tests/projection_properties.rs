//! Property-based tests for binding and projection.
//!
//! Uses proptest to check that projection is exact, deterministic and
//! faithful to the bindings for arbitrary signatures.

use std::collections::HashSet;

use proptest::prelude::*;
use semantic_annotation::{AnnotationError, AnnotationRegistry, Payload, SemanticType};

const BASE: &str = "https://example.org/terms/";

/// Distinct field names paired with a URI suffix and a finite value.
fn bindings() -> impl Strategy<Value = Vec<(String, String, f64)>> {
    prop::collection::hash_set("[a-z][a-z_]{0,10}", 1..12).prop_flat_map(|fields| {
        let fields: Vec<String> = fields.into_iter().collect();
        let n = fields.len();
        (
            Just(fields),
            prop::collection::vec("[a-z]{1,12}", n),
            prop::collection::vec(-1.0e6..1.0e6f64, n),
        )
            .prop_map(|(fields, suffixes, values)| {
                fields
                    .into_iter()
                    .zip(suffixes)
                    .zip(values)
                    .map(|((f, s), v)| (f, s, v))
                    .collect()
            })
    })
}

fn build(bindings: &[(String, String, f64)]) -> (AnnotationRegistry, Payload) {
    let mut registry = AnnotationRegistry::new("f");
    let mut payload = Payload::new();
    for (field, suffix, value) in bindings {
        let semantic = SemanticType::decimal(format!("{BASE}{suffix}")).unwrap();
        registry.bind(field.clone(), semantic).unwrap();
        payload.insert(field.clone(), *value);
    }
    (registry, payload)
}

// =============================================================================
// Context Properties
// =============================================================================

proptest! {
    /// The context key set equals the signature's field set.
    #[test]
    fn prop_context_keys_equal_fields(bindings in bindings()) {
        let (registry, payload) = build(&bindings);
        let doc = registry.project(&payload).unwrap();
        let expected: HashSet<&str> = bindings.iter().map(|(f, _, _)| f.as_str()).collect();
        let context = doc.context();
        let actual: HashSet<&str> = context.fields().collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(context.len(), bindings.len());
    }

    /// Every context URI is the one bound for that field.
    #[test]
    fn prop_context_uri_is_bound_uri(bindings in bindings()) {
        let (registry, payload) = build(&bindings);
        let doc = registry.project(&payload).unwrap();
        let context = doc.context();
        for (field, suffix, _) in &bindings {
            let expected = format!("{BASE}{suffix}");
            prop_assert_eq!(context.get(field), Some(expected.as_str()));
        }
    }

    /// The JSON-LD object has `@context` plus exactly one key per field.
    #[test]
    fn prop_document_has_no_orphan_keys(bindings in bindings()) {
        let (registry, payload) = build(&bindings);
        let value = registry.project(&payload).unwrap().to_value();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), bindings.len() + 1);
        for (field, _, _) in &bindings {
            prop_assert!(object.contains_key(field));
        }
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Projecting twice yields byte-identical output.
    #[test]
    fn prop_projection_is_idempotent(bindings in bindings()) {
        let (registry, payload) = build(&bindings);
        let first = registry.project(&payload).unwrap().to_string_pretty().unwrap();
        let second = registry.project(&payload).unwrap().to_string_pretty().unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Duplicate Rejection
// =============================================================================

proptest! {
    /// Rebinding any bound field fails, whatever the new URI.
    #[test]
    fn prop_rebinding_always_fails(
        bindings in bindings(),
        index in any::<prop::sample::Index>(),
        suffix in "[a-z]{1,12}",
    ) {
        let (mut registry, _) = build(&bindings);
        let (field, _, _) = &bindings[index.index(bindings.len())];
        let before = registry.context();
        let result = registry.bind(
            field.clone(),
            SemanticType::decimal(format!("{BASE}{suffix}")).unwrap(),
        );
        let is_duplicate = matches!(result, Err(AnnotationError::DuplicateBinding { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(registry.context(), before);
    }
}
