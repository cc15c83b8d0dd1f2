//! End-to-end checks of the wind observation example.

use semantic_annotation::serializer::{jsonld, ntriples};
use semantic_annotation::vocab::wind;
use semantic_annotation::{AnnotationError, AnnotationRegistry, Payload, SemanticType};

const REFERENCE: &str = r#"{
  "@context": {
    "wind_speed": "https://wind-measurement-ontology.foo/terms/wind_speed",
    "wind_from_direction": "https://wind-measurement-ontology.foo/terms/wind_from_direction"
  },
  "wind_speed": 10.0,
  "wind_from_direction": 0.0
}"#;

#[test]
fn hand_built_signature_projects_reference_document() {
    let mut registry = AnnotationRegistry::new("report_wind");
    registry
        .bind("wind_speed", SemanticType::decimal(wind::WIND_SPEED).unwrap())
        .unwrap()
        .bind(
            "wind_from_direction",
            SemanticType::decimal(wind::WIND_FROM_DIRECTION).unwrap(),
        )
        .unwrap();
    let payload = Payload::new()
        .with("wind_speed", 10.0)
        .with("wind_from_direction", 0.0);
    let doc = registry.project(&payload).unwrap();
    assert_eq!(jsonld::to_json_ld_string(&doc).unwrap(), REFERENCE);
}

#[test]
fn computed_observation_matches_reference_document() {
    let doc = wind::reference_observation().unwrap();
    assert_eq!(doc.to_string_pretty().unwrap(), REFERENCE);
}

#[test]
fn duplicate_binding_is_raised_before_any_projection() {
    let mut registry = AnnotationRegistry::new("report_wind");
    registry
        .bind("wind_speed", SemanticType::decimal(wind::WIND_SPEED).unwrap())
        .unwrap();
    let err = registry
        .bind(
            "wind_speed",
            SemanticType::decimal("https://other-ontology.foo/terms/speed").unwrap(),
        )
        .unwrap_err();
    assert!(matches!(err, AnnotationError::DuplicateBinding { .. }));
    assert_eq!(
        err.to_string(),
        "field `wind_speed` is already bound to \
         <https://wind-measurement-ontology.foo/terms/wind_speed>; refusing to rebind it to \
         <https://other-ontology.foo/terms/speed>"
    );
}

#[test]
fn parsed_document_round_trips_through_serde_json() {
    let doc = wind::reference_observation().unwrap();
    let value: serde_json::Value = serde_json::from_str(REFERENCE).unwrap();
    assert_eq!(jsonld::to_json_ld(&doc), value);
    let payload = Payload::from_value(value).unwrap();
    // `@context` is not a bound field; payloads must carry data only.
    assert!(wind::observation_registry().unwrap().project(&payload).is_err());
}

#[test]
fn ntriples_view_uses_bound_uris_as_predicates() {
    let doc = wind::reference_observation().unwrap();
    let nt = ntriples::to_ntriples(&doc, Some("https://example.org/observations/1"));
    let expected = "\
<https://example.org/observations/1> <https://wind-measurement-ontology.foo/terms/wind_speed> \"10.0\"^^<http://www.w3.org/2001/XMLSchema#double> .
<https://example.org/observations/1> <https://wind-measurement-ontology.foo/terms/wind_from_direction> \"0.0\"^^<http://www.w3.org/2001/XMLSchema#double> .
";
    assert_eq!(nt, expected);
}
