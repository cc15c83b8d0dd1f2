//! JSON-LD validator.
//!
//! Verifies that every `*.jsonld` artifact is a projected document:
//! - The top level is a JSON object with an object `@context`
//! - Every `@context` value is an absolute URI string
//! - Every data field has a `@context` entry (no orphan fields)
//! - Every `@context` entry has a data field (no orphan bindings)

use std::path::Path;

use anyhow::{Context, Result};
use semantic_annotation::model::is_absolute_uri;
use serde_json::{Map, Value};

use super::files_with_extension;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/jsonld";

/// Validates every JSON-LD artifact under `artifacts`.
///
/// # Errors
///
/// Returns an error if an artifact file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let files = files_with_extension(artifacts, "jsonld");
    if files.is_empty() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("No .jsonld artifacts found in {}", artifacts.display()),
        ));
        return Ok(report);
    }

    for path in files {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path.display().to_string();
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => check_document(&name, &value, &mut report),
            Err(e) => report.push(TestResult::fail(
                VALIDATOR,
                format!("{name} is not valid JSON: {e}"),
            )),
        }
    }

    Ok(report)
}

/// Checks one parsed document, pushing one result per check.
pub fn check_document(name: &str, value: &Value, report: &mut ConformanceReport) {
    let Some(object) = value.as_object() else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: top level is not a JSON object"),
        ));
        return;
    };
    let Some(context) = object.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: missing @context object"),
        ));
        return;
    };

    check_context_uris(name, context, report);
    check_bindings(name, object, context, report);
}

fn check_context_uris(name: &str, context: &Map<String, Value>, report: &mut ConformanceReport) {
    let invalid: Vec<String> = context
        .iter()
        .filter(|(_, uri)| !uri.as_str().map(is_absolute_uri).unwrap_or(false))
        .map(|(field, uri)| format!("{field} -> {uri}"))
        .collect();

    if invalid.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: all {} @context entries are absolute URIs", context.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: @context entries that are not absolute URI strings"),
            invalid,
        ));
    }
}

fn check_bindings(
    name: &str,
    object: &Map<String, Value>,
    context: &Map<String, Value>,
    report: &mut ConformanceReport,
) {
    let orphan_fields: Vec<String> = object
        .keys()
        .filter(|k| !k.starts_with('@') && !context.contains_key(*k))
        .cloned()
        .collect();
    let orphan_bindings: Vec<String> = context
        .keys()
        .filter(|k| !object.contains_key(*k))
        .cloned()
        .collect();

    if orphan_fields.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: every field has a @context entry"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: fields without a @context entry"),
            orphan_fields,
        ));
    }

    if orphan_bindings.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: every @context entry has a field"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: @context entries without a field"),
            orphan_bindings,
        ));
    }
}
