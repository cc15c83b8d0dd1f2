//! Bundled signature validator.
//!
//! Checks the bundled vocabularies against the projection contract
//! (operates on the live library, no file I/O):
//! - The wind observation projects to the reference document verbatim
//! - Each projected context has exactly the signature's fields
//! - Projecting twice yields byte-identical output
//! - Rebinding any bound field is rejected as a duplicate

use semantic_annotation::vocab::{metadata, metadata::SoftwareMetadataDocument, wind};
use semantic_annotation::{AnnotationError, AnnotationRegistry, JsonLdDocument, Payload};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "signature";

type BuiltRegistry = Result<AnnotationRegistry, AnnotationError>;
type SamplePayload = Option<Result<Payload, String>>;

/// The wind observation every implementation must reproduce byte for byte.
pub const REFERENCE_OBSERVATION: &str = r#"{
  "@context": {
    "wind_speed": "https://wind-measurement-ontology.foo/terms/wind_speed",
    "wind_from_direction": "https://wind-measurement-ontology.foo/terms/wind_from_direction"
  },
  "wind_speed": 10.0,
  "wind_from_direction": 0.0
}"#;

/// Runs all bundled signature checks.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_reference_observation(&mut report);

    // `None` skips the projection checks; `Some(Err)` is a payload that
    // could not be built and fails them.
    let cases: Vec<(&str, BuiltRegistry, SamplePayload)> = vec![
        (
            "report_wind",
            wind::observation_registry(),
            Some(
                wind::speed_and_direction(-3.0, 4.0)
                    .payload()
                    .map_err(|e| e.to_string()),
            ),
        ),
        (
            "wind_speed",
            wind::wind_speed_registry(),
            Some(Ok(Payload::new()
                .with("eastward_wind", 3.0)
                .with("northward_wind", 4.0)
                .with("wind_speed", 5.0))),
        ),
        ("wind_from_direction", wind::wind_from_direction_registry(), None),
        (
            "software_metadata",
            metadata::registry(),
            Some(
                serde_json::to_value(SoftwareMetadataDocument::sample())
                    .map_err(|e| e.to_string())
                    .and_then(|v| Payload::from_value(v).map_err(|e| e.to_string())),
            ),
        ),
    ];

    for (name, registry, payload) in cases {
        check_signature(name, registry, payload, &mut report);
    }

    report
}

fn check_signature(
    name: &str,
    registry: BuiltRegistry,
    payload: SamplePayload,
    report: &mut ConformanceReport,
) {
    let registry = match registry {
        Ok(r) => r,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{name}: signature fails to build: {e}"),
            ));
            return;
        }
    };
    check_duplicate_rejection(name, &registry, report);
    match payload {
        Some(Ok(payload)) => check_projection(name, &registry, &payload, report),
        Some(Err(e)) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: sample payload fails to build: {e}"),
        )),
        None => {}
    }
}

fn check_reference_observation(report: &mut ConformanceReport) {
    let rendered = wind::reference_observation()
        .map_err(|e| e.to_string())
        .and_then(|doc| doc.to_string_pretty().map_err(|e| e.to_string()));
    match rendered {
        Ok(text) if text == REFERENCE_OBSERVATION => report.push(TestResult::pass(
            VALIDATOR,
            "report_wind: reference observation reproduced verbatim",
        )),
        Ok(text) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            "report_wind: reference observation differs",
            text.lines().map(str::to_owned).collect(),
        )),
        Err(e) => report.push(TestResult::fail(
            VALIDATOR,
            format!("report_wind: reference observation fails to project: {e}"),
        )),
    }
}

fn check_projection(
    name: &str,
    registry: &AnnotationRegistry,
    payload: &Payload,
    report: &mut ConformanceReport,
) {
    let render = |doc: &JsonLdDocument| doc.to_string_pretty().map_err(|e| e.to_string());
    let first = registry.project(payload).map_err(|e| e.to_string());
    let second = registry.project(payload).map_err(|e| e.to_string());
    let (first, second) = match (first, second) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{name}: payload fails to project: {e}"),
            ));
            return;
        }
    };

    let signature_fields: Vec<&str> = registry
        .signature()
        .fields()
        .map(|b| b.field.as_str())
        .collect();
    let context = first.context();
    let context_fields: Vec<&str> = context.fields().collect();
    if context_fields == signature_fields {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: context has exactly the {} bound fields", signature_fields.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: context fields differ from signature fields"),
            vec![
                format!("signature: {}", signature_fields.join(", ")),
                format!("context:   {}", context_fields.join(", ")),
            ],
        ));
    }

    match (render(&first), render(&second)) {
        (Ok(a), Ok(b)) if a == b => report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: projection is deterministic"),
        )),
        (Ok(_), Ok(_)) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: repeated projections differ"),
        )),
        (Err(e), _) | (_, Err(e)) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: projection fails to serialize: {e}"),
        )),
    }
}

fn check_duplicate_rejection(
    name: &str,
    registry: &AnnotationRegistry,
    report: &mut ConformanceReport,
) {
    let mut accepted = Vec::new();
    for binding in registry.signature().fields() {
        let mut probe = registry.clone();
        let result = probe.bind(binding.field.clone(), binding.semantic.clone());
        if !matches!(result, Err(AnnotationError::DuplicateBinding { .. })) {
            accepted.push(binding.field.clone());
        }
    }

    if accepted.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: rebinding any field is rejected"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: rebinding accepted for some fields"),
            accepted,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_signatures_conform() {
        let report = validate();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Signature failures: {:#?}", failures);
        // 1 reference + 4 duplicate checks + 3 × (context, determinism)
        assert_eq!(report.results.len(), 11);
    }

    #[test]
    fn unbuildable_payload_is_reported() {
        let mut report = ConformanceReport::new();
        check_signature(
            "wind_speed",
            wind::wind_speed_registry(),
            Some(Err("non-finite value".to_owned())),
            &mut report,
        );
        // duplicate check passes, payload construction fails
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(report.results[1].message.contains("sample payload fails to build"));
    }
}
