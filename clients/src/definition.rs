//! Signature definition files.
//!
//! A definition file is TOML naming a function, its parameters and an
//! optional return field:
//!
//! ```toml
//! function = "report_wind"
//!
//! [[parameters]]
//! field = "wind_speed"
//! type = "decimal"
//! uri = "https://wind-measurement-ontology.foo/terms/wind_speed"
//! ```
//!
//! Types are written `decimal`, `integer`, `boolean`, `text`, `date`,
//! `record`, `list<T>`, `optional<T>`, `tuple<T, U, ...>` or `choice<a|b|c>`.

use semantic_annotation::{AnnotationError, AnnotationRegistry, SemanticType, StructuralType};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a definition file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The file is not valid TOML or lacks required keys.
    #[error("invalid signature definition: {0}")]
    Toml(#[from] toml::de::Error),
    /// A `type` value is not part of the type grammar.
    #[error("unknown structural type `{0}`")]
    UnknownType(String),
    /// Binding the fields failed.
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// One bound field as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// Field name.
    pub field: String,
    /// Structural type in the type grammar.
    #[serde(rename = "type")]
    pub type_: String,
    /// Ontology URI.
    pub uri: String,
}

/// A function signature as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureDefinition {
    /// Function name.
    pub function: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<FieldDefinition>,
    /// Return field, if any.
    pub returns: Option<FieldDefinition>,
}

impl SignatureDefinition {
    /// Parses a definition from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Toml`] if the text is not a valid definition.
    pub fn from_toml(text: &str) -> Result<Self, DefinitionError> {
        Ok(toml::from_str(text)?)
    }

    /// Binds every field through a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown type, an invalid URI, or a field
    /// bound twice.
    pub fn registry(&self) -> Result<AnnotationRegistry, DefinitionError> {
        let mut registry = AnnotationRegistry::new(self.function.clone());
        for param in &self.parameters {
            registry.bind(param.field.clone(), semantic_type(param)?)?;
        }
        if let Some(ret) = &self.returns {
            registry.bind_return(ret.field.clone(), semantic_type(ret)?)?;
        }
        Ok(registry)
    }
}

fn semantic_type(def: &FieldDefinition) -> Result<SemanticType, DefinitionError> {
    Ok(SemanticType::new(parse_type(&def.type_)?, def.uri.clone())?)
}

/// Parses a structural type written in the type grammar.
///
/// # Errors
///
/// Returns [`DefinitionError::UnknownType`] if `spec` is not well-formed.
pub fn parse_type(spec: &str) -> Result<StructuralType, DefinitionError> {
    let spec = spec.trim();
    let unknown = || DefinitionError::UnknownType(spec.to_owned());

    let Some((head, rest)) = spec.split_once('<') else {
        return match spec {
            "decimal" => Ok(StructuralType::Decimal),
            "integer" => Ok(StructuralType::Integer),
            "boolean" => Ok(StructuralType::Boolean),
            "text" => Ok(StructuralType::Text),
            "date" => Ok(StructuralType::Date),
            "record" => Ok(StructuralType::Record),
            _ => Err(unknown()),
        };
    };
    let inner = rest.strip_suffix('>').ok_or_else(unknown)?;

    match head.trim() {
        "list" => Ok(StructuralType::list(parse_type(inner)?)),
        "optional" => Ok(StructuralType::optional(parse_type(inner)?)),
        "tuple" => {
            let items = split_top_level(inner)
                .into_iter()
                .map(parse_type)
                .collect::<Result<Vec<_>, _>>()?;
            if items.is_empty() {
                return Err(unknown());
            }
            Ok(StructuralType::Tuple(items))
        }
        "choice" => {
            let literals: Vec<String> = inner.split('|').map(|l| l.trim().to_owned()).collect();
            if literals.iter().any(String::is_empty) {
                return Err(unknown());
            }
            Ok(StructuralType::Choice(literals))
        }
        _ => Err(unknown()),
    }
}

/// Splits on commas that are not nested inside `<...>`.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if !s[start..].trim().is_empty() || !parts.is_empty() {
        parts.push(&s[start..]);
    }
    parts
}
