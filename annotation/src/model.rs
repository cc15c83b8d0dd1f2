//! Core annotation model types.
//!
//! A [`SemanticType`] pairs a [`StructuralType`] (what a value looks like)
//! with a URI (what the value means). An [`AnnotatedSignature`] is the
//! semantic contract of one function: its parameters and its return value,
//! each bound under a field name. The [`ContextDocument`] derived from a
//! signature is the JSON-LD `@context` that gives the field names meaning.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::AnnotationError;

/// The shape of a value, independent of what the value means.
///
/// Structural types play the role JSON Schema plays for JSON documents:
/// they describe the layout of a value but carry no semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralType {
    /// A decimal (floating point) number.
    Decimal,
    /// An integral number.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A free-form string.
    Text,
    /// A calendar date written as `YYYY-MM-DD`.
    Date,
    /// One string out of a closed set of literals.
    Choice(Vec<String>),
    /// A fixed-arity sequence of values.
    Tuple(Vec<StructuralType>),
    /// A sequence of values sharing one type.
    List(Box<StructuralType>),
    /// A value that may be `null`.
    Optional(Box<StructuralType>),
    /// An opaque JSON object.
    Record,
}

impl StructuralType {
    /// Shorthand for [`StructuralType::Choice`] over string literals.
    #[must_use]
    pub fn choice(literals: &[&str]) -> Self {
        StructuralType::Choice(literals.iter().map(|l| (*l).to_owned()).collect())
    }

    /// Shorthand for [`StructuralType::List`].
    #[must_use]
    pub fn list(item: StructuralType) -> Self {
        StructuralType::List(Box::new(item))
    }

    /// Shorthand for [`StructuralType::Optional`].
    #[must_use]
    pub fn optional(inner: StructuralType) -> Self {
        StructuralType::Optional(Box::new(inner))
    }

    /// Returns true if `value` has this structure.
    ///
    /// This is a purely structural check; it says nothing about whether the
    /// value means what the bound URI says it means.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (StructuralType::Decimal, Value::Number(_)) => true,
            (StructuralType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (StructuralType::Boolean, Value::Bool(_)) => true,
            (StructuralType::Text, Value::String(_)) => true,
            (StructuralType::Date, Value::String(s)) => is_calendar_date(s),
            (StructuralType::Choice(literals), Value::String(s)) => {
                literals.iter().any(|l| l == s)
            }
            (StructuralType::Tuple(items), Value::Array(values)) => {
                items.len() == values.len()
                    && items.iter().zip(values).all(|(t, v)| t.accepts(v))
            }
            (StructuralType::List(item), Value::Array(values)) => {
                values.iter().all(|v| item.accepts(v))
            }
            (StructuralType::Optional(_), Value::Null) => true,
            (StructuralType::Optional(inner), v) => inner.accepts(v),
            (StructuralType::Record, Value::Object(_)) => true,
            _ => false,
        }
    }

    /// Returns the XSD (or RDF) datatype IRI used for literals of this type.
    ///
    /// Containers report the datatype of their elements.
    #[must_use]
    pub fn xsd_datatype(&self) -> &'static str {
        match self {
            StructuralType::Decimal => iris::XSD_DOUBLE,
            StructuralType::Integer => iris::XSD_INTEGER,
            StructuralType::Boolean => iris::XSD_BOOLEAN,
            StructuralType::Text | StructuralType::Choice(_) => iris::XSD_STRING,
            StructuralType::Date => iris::XSD_DATE,
            StructuralType::Record => iris::RDF_JSON,
            StructuralType::List(item) | StructuralType::Optional(item) => item.xsd_datatype(),
            // Heterogeneous tuples have no single datatype; serializers ask
            // each element instead.
            StructuralType::Tuple(_) => iris::RDF_LIST,
        }
    }
}

impl fmt::Display for StructuralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralType::Decimal => f.write_str("decimal"),
            StructuralType::Integer => f.write_str("integer"),
            StructuralType::Boolean => f.write_str("boolean"),
            StructuralType::Text => f.write_str("text"),
            StructuralType::Date => f.write_str("date"),
            StructuralType::Record => f.write_str("record"),
            StructuralType::Choice(literals) => write!(f, "choice[{}]", literals.join("|")),
            StructuralType::List(item) => write!(f, "list[{item}]"),
            StructuralType::Optional(inner) => write!(f, "optional[{inner}]"),
            StructuralType::Tuple(items) => {
                f.write_str("tuple[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A structural type paired with the URI of its ontological meaning.
///
/// Immutable once constructed: the URI is side-channel metadata carried
/// alongside the type, never consulted when values are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticType {
    structural: StructuralType,
    uri: String,
}

impl SemanticType {
    /// Creates a semantic type.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidUri`] if `uri` is not absolute.
    pub fn new(structural: StructuralType, uri: impl Into<String>) -> Result<Self, AnnotationError> {
        let uri = uri.into();
        if !is_absolute_uri(&uri) {
            return Err(AnnotationError::InvalidUri { uri });
        }
        Ok(Self { structural, uri })
    }

    /// Creates a semantic type from a URI literal known to be absolute.
    pub(crate) fn trusted(structural: StructuralType, uri: &str) -> Self {
        Self {
            structural,
            uri: uri.to_owned(),
        }
    }

    /// Creates a decimal-valued semantic type.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidUri`] if `uri` is not absolute.
    pub fn decimal(uri: impl Into<String>) -> Result<Self, AnnotationError> {
        Self::new(StructuralType::Decimal, uri)
    }

    /// The structural half of this type.
    #[must_use]
    pub fn structural(&self) -> &StructuralType {
        &self.structural
    }

    /// The URI identifying this type's meaning.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.structural, self.uri)
    }
}

/// A field name bound to a semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The field name used in payloads and in the `@context`.
    pub field: String,
    /// The semantic type bound under `field`.
    pub semantic: SemanticType,
}

/// The semantic contract of one function.
///
/// Built through [`AnnotationRegistry`](crate::AnnotationRegistry), which
/// guarantees that every field name is bound at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSignature {
    pub(crate) function: String,
    pub(crate) parameters: Vec<Binding>,
    pub(crate) returns: Option<Binding>,
}

impl AnnotatedSignature {
    /// Name of the annotated function.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Parameter bindings in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Binding] {
        &self.parameters
    }

    /// The return binding, if one was designated.
    #[must_use]
    pub fn returns(&self) -> Option<&Binding> {
        self.returns.as_ref()
    }

    /// All bindings: parameters in order, then the return binding.
    pub fn fields(&self) -> impl Iterator<Item = &Binding> {
        self.parameters.iter().chain(self.returns.iter())
    }

    /// Looks up the semantic type bound under `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SemanticType> {
        self.fields().find(|b| b.field == field).map(|b| &b.semantic)
    }

    /// Number of bound fields, return field included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len() + usize::from(self.returns.is_some())
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Derives the `@context` mapping: one entry per bound field.
    #[must_use]
    pub fn context(&self) -> ContextDocument {
        ContextDocument {
            entries: self
                .fields()
                .map(|b| (b.field.clone(), b.semantic.uri().to_owned()))
                .collect(),
        }
    }
}

/// A field name to URI mapping, the structural mirror of a JSON-LD `@context`.
///
/// Entries keep binding order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextDocument {
    entries: Vec<(String, String)>,
}

impl ContextDocument {
    pub(crate) fn push(&mut self, field: String, uri: String) {
        self.entries.push((field, uri));
    }

    /// URI bound to `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, uri)| uri.as_str())
    }

    /// Field names in binding order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    /// `(field, uri)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, u)| (f.as_str(), u.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the context as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (field, uri) in &self.entries {
            map.insert(field.clone(), Value::String(uri.clone()));
        }
        Value::Object(map)
    }
}

impl Serialize for ContextDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, uri) in &self.entries {
            map.serialize_entry(field, uri)?;
        }
        map.end()
    }
}

/// `YYYY-MM-DD` with zero-padded month and day, as `xsd:date` requires.
fn is_calendar_date(s: &str) -> bool {
    s.len() == 10
        && chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .is_ok_and(|date| date.format("%Y-%m-%d").to_string() == s)
}

/// Returns true if `uri` starts with an RFC 3986 scheme and has no whitespace.
#[must_use]
pub fn is_absolute_uri(uri: &str) -> bool {
    let Some((scheme, rest)) = uri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
        && !uri.chars().any(char::is_whitespace)
}

/// Short description of a JSON value's kind, used in error messages.
#[must_use]
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(map) => format!("object with {} key(s)", map.len()),
    }
}

/// Standard IRI constants.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:List`.
    pub const RDF_LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
    /// `rdf:JSON`, the JSON-LD 1.1 JSON literal datatype.
    pub const RDF_JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}
