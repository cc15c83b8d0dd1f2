//! The annotation registry: binds field names to semantic types and
//! projects payloads as JSON-LD documents.

use tracing::{debug, trace};

use crate::error::{AnnotationError, ProjectionError};
use crate::model::{describe_value, AnnotatedSignature, Binding, ContextDocument, SemanticType};
use crate::projection::{JsonLdDocument, Payload, ProjectedField};

/// Builds the [`AnnotatedSignature`] of one function.
///
/// Parameters and the return value share one field namespace: a field name
/// can be bound once, and a failed bind leaves the registry untouched.
///
/// ```
/// use semantic_annotation::{AnnotationRegistry, Payload, SemanticType};
///
/// let mut registry = AnnotationRegistry::new("report_wind");
/// registry.bind(
///     "wind_speed",
///     SemanticType::decimal("https://wind-measurement-ontology.foo/terms/wind_speed")?,
/// )?;
/// let doc = registry.project(&Payload::new().with("wind_speed", 10.0))?;
/// assert_eq!(doc.context().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnnotationRegistry {
    signature: AnnotatedSignature,
}

impl AnnotationRegistry {
    /// Starts an empty signature for `function`.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            signature: AnnotatedSignature {
                function: function.into(),
                parameters: Vec::new(),
                returns: None,
            },
        }
    }

    /// Binds a parameter field.
    ///
    /// # Errors
    ///
    /// - [`AnnotationError::DuplicateBinding`] if `field` is already bound,
    ///   whether or not the URIs differ.
    /// - [`AnnotationError::ReservedField`] if `field` starts with `@`.
    /// - [`AnnotationError::EmptyField`] if `field` is empty.
    pub fn bind(
        &mut self,
        field: impl Into<String>,
        semantic: SemanticType,
    ) -> Result<&mut Self, AnnotationError> {
        let field = field.into();
        self.check_field(&field, &semantic)?;
        debug!(
            function = %self.signature.function,
            field = %field,
            uri = %semantic.uri(),
            "bound parameter"
        );
        self.signature.parameters.push(Binding { field, semantic });
        Ok(self)
    }

    /// Designates the return field.
    ///
    /// # Errors
    ///
    /// - [`AnnotationError::ReturnAlreadyBound`] if a return field exists.
    /// - Any error [`bind`](Self::bind) raises for the field name.
    pub fn bind_return(
        &mut self,
        field: impl Into<String>,
        semantic: SemanticType,
    ) -> Result<&mut Self, AnnotationError> {
        let field = field.into();
        if let Some(existing) = &self.signature.returns {
            return Err(AnnotationError::ReturnAlreadyBound {
                function: self.signature.function.clone(),
                field: existing.field.clone(),
            });
        }
        self.check_field(&field, &semantic)?;
        debug!(
            function = %self.signature.function,
            field = %field,
            uri = %semantic.uri(),
            "bound return value"
        );
        self.signature.returns = Some(Binding { field, semantic });
        Ok(self)
    }

    fn check_field(&self, field: &str, semantic: &SemanticType) -> Result<(), AnnotationError> {
        if field.is_empty() {
            return Err(AnnotationError::EmptyField);
        }
        if field.starts_with('@') {
            return Err(AnnotationError::ReservedField {
                field: field.to_owned(),
            });
        }
        if let Some(existing) = self.signature.get(field) {
            return Err(AnnotationError::DuplicateBinding {
                field: field.to_owned(),
                existing_uri: existing.uri().to_owned(),
                rejected_uri: semantic.uri().to_owned(),
            });
        }
        Ok(())
    }

    /// The signature built so far.
    #[must_use]
    pub fn signature(&self) -> &AnnotatedSignature {
        &self.signature
    }

    /// Consumes the registry, returning the finished signature.
    #[must_use]
    pub fn into_signature(self) -> AnnotatedSignature {
        self.signature
    }

    /// The `@context` derived from the current bindings.
    #[must_use]
    pub fn context(&self) -> ContextDocument {
        self.signature.context()
    }

    /// Projects `payload` into a JSON-LD shaped document.
    ///
    /// Pure: no I/O, no reasoning. The payload must carry exactly one
    /// structurally valid value per bound field.
    ///
    /// # Errors
    ///
    /// - [`ProjectionError::UnboundField`] for a payload field with no binding.
    /// - [`ProjectionError::MissingValue`] for a bound field with no value.
    /// - [`ProjectionError::StructuralMismatch`] when a value does not have
    ///   the bound structural type.
    pub fn project(&self, payload: &Payload) -> Result<JsonLdDocument, ProjectionError> {
        let signature = &self.signature;
        if let Some(orphan) = payload.fields().find(|f| signature.get(f).is_none()) {
            return Err(ProjectionError::UnboundField {
                function: signature.function.clone(),
                field: orphan.to_owned(),
            });
        }

        let mut fields = Vec::with_capacity(signature.len());
        for binding in signature.fields() {
            let value = payload
                .get(&binding.field)
                .ok_or_else(|| ProjectionError::MissingValue {
                    field: binding.field.clone(),
                })?;
            let structural = binding.semantic.structural();
            if !structural.accepts(value) {
                return Err(ProjectionError::StructuralMismatch {
                    field: binding.field.clone(),
                    expected: structural.to_string(),
                    found: describe_value(value),
                });
            }
            fields.push(ProjectedField {
                field: binding.field.clone(),
                semantic: binding.semantic.clone(),
                value: value.clone(),
            });
        }

        trace!(
            function = %signature.function,
            fields = fields.len(),
            "projected payload"
        );
        Ok(JsonLdDocument {
            function: signature.function.clone(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StructuralType;
    use serde_json::json;

    const URI_A: &str = "https://wind-measurement-ontology.foo/terms/wind_speed";
    const URI_B: &str = "https://wind-measurement-ontology.foo/terms/wind_from_direction";
    const URI_C: &str = "https://other-ontology.foo/terms/speed";

    fn wind_registry() -> AnnotationRegistry {
        let mut registry = AnnotationRegistry::new("report_wind");
        registry
            .bind("wind_speed", SemanticType::decimal(URI_A).unwrap())
            .unwrap()
            .bind("wind_from_direction", SemanticType::decimal(URI_B).unwrap())
            .unwrap();
        registry
    }

    #[test]
    fn projects_the_reference_document_verbatim() {
        let payload = Payload::new()
            .with("wind_speed", 10.0)
            .with("wind_from_direction", 0.0);
        let doc = wind_registry().project(&payload).unwrap();
        let expected = r#"{
  "@context": {
    "wind_speed": "https://wind-measurement-ontology.foo/terms/wind_speed",
    "wind_from_direction": "https://wind-measurement-ontology.foo/terms/wind_from_direction"
  },
  "wind_speed": 10.0,
  "wind_from_direction": 0.0
}"#;
        assert_eq!(doc.to_string_pretty().unwrap(), expected);
    }

    #[test]
    fn rebinding_fails_before_projection() {
        let mut registry = AnnotationRegistry::new("report_wind");
        registry
            .bind("wind_speed", SemanticType::decimal(URI_A).unwrap())
            .unwrap();
        let err = registry
            .bind("wind_speed", SemanticType::decimal(URI_C).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            AnnotationError::DuplicateBinding {
                field: "wind_speed".to_owned(),
                existing_uri: URI_A.to_owned(),
                rejected_uri: URI_C.to_owned(),
            }
        );
        assert_eq!(registry.context().get("wind_speed"), Some(URI_A));
        assert_eq!(registry.signature().len(), 1);
    }

    #[test]
    fn rebinding_with_same_uri_still_fails() {
        let mut registry = wind_registry();
        let err = registry
            .bind("wind_speed", SemanticType::decimal(URI_A).unwrap())
            .unwrap_err();
        assert!(matches!(err, AnnotationError::DuplicateBinding { .. }));
    }

    #[test]
    fn return_field_shares_the_parameter_namespace() {
        let mut registry = wind_registry();
        let err = registry
            .bind_return("wind_speed", SemanticType::decimal(URI_C).unwrap())
            .unwrap_err();
        assert!(matches!(err, AnnotationError::DuplicateBinding { .. }));
    }

    #[test]
    fn second_return_binding_is_rejected() {
        let mut registry = AnnotationRegistry::new("wind_speed");
        registry
            .bind_return("wind_speed", SemanticType::decimal(URI_A).unwrap())
            .unwrap();
        let err = registry
            .bind_return("speed", SemanticType::decimal(URI_C).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            AnnotationError::ReturnAlreadyBound {
                function: "wind_speed".to_owned(),
                field: "wind_speed".to_owned(),
            }
        );
    }

    #[test]
    fn context_lists_parameters_then_return() {
        let mut registry = AnnotationRegistry::new("wind_speed");
        registry
            .bind_return("wind_speed", SemanticType::decimal(URI_A).unwrap())
            .unwrap()
            .bind("wind_from_direction", SemanticType::decimal(URI_B).unwrap())
            .unwrap();
        let fields: Vec<_> = registry.context().fields().map(str::to_owned).collect();
        assert_eq!(fields, vec!["wind_from_direction", "wind_speed"]);
    }

    #[test]
    fn keyword_field_names_are_reserved() {
        let mut registry = AnnotationRegistry::new("f");
        let err = registry
            .bind("@context", SemanticType::decimal(URI_A).unwrap())
            .unwrap_err();
        assert!(matches!(err, AnnotationError::ReservedField { .. }));
        let err = registry
            .bind("", SemanticType::decimal(URI_A).unwrap())
            .unwrap_err();
        assert_eq!(err, AnnotationError::EmptyField);
    }

    #[test]
    fn orphan_payload_field_is_rejected() {
        let payload = Payload::new()
            .with("wind_speed", 10.0)
            .with("wind_from_direction", 0.0)
            .with("gust", 14.0);
        let err = wind_registry().project(&payload).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::UnboundField {
                function: "report_wind".to_owned(),
                field: "gust".to_owned(),
            }
        );
    }

    #[test]
    fn missing_value_is_rejected() {
        let payload = Payload::new().with("wind_speed", 10.0);
        let err = wind_registry().project(&payload).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::MissingValue {
                field: "wind_from_direction".to_owned()
            }
        );
    }

    #[test]
    fn structural_mismatch_names_expected_type() {
        let mut registry = AnnotationRegistry::new("f");
        registry
            .bind(
                "heading",
                SemanticType::new(StructuralType::Integer, URI_B).unwrap(),
            )
            .unwrap();
        let err = registry
            .project(&Payload::new().with("heading", json!("north")))
            .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::StructuralMismatch {
                field: "heading".to_owned(),
                expected: "integer".to_owned(),
                found: "string \"north\"".to_owned(),
            }
        );
    }

    #[test]
    fn payload_order_does_not_affect_output() {
        let registry = wind_registry();
        let forward = Payload::new()
            .with("wind_speed", 3.5)
            .with("wind_from_direction", 270.0);
        let reversed = Payload::new()
            .with("wind_from_direction", 270.0)
            .with("wind_speed", 3.5);
        assert_eq!(
            registry.project(&forward).unwrap().to_string_pretty().unwrap(),
            registry.project(&reversed).unwrap().to_string_pretty().unwrap()
        );
    }
}
