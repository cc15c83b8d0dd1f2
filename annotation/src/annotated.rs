//! Values carrying their semantic type as side-channel metadata.

use std::ops::Deref;

use crate::model::SemanticType;

/// A value paired with the [`SemanticType`] that gives it meaning.
///
/// Arithmetic and other ordinary code see only the wrapped value (via
/// [`Deref`]); the metadata travels with it until a payload is projected.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<T> {
    value: T,
    semantic: SemanticType,
}

impl<T> Annotated<T> {
    /// Wraps `value` with its semantic type.
    #[must_use]
    pub fn new(value: T, semantic: SemanticType) -> Self {
        Self { value, semantic }
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The semantic type carried alongside the value.
    #[must_use]
    pub fn semantic_type(&self) -> &SemanticType {
        &self.semantic
    }

    /// Discards the metadata and returns the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Annotated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_exposes_only_the_value() {
        let semantic = SemanticType::decimal("https://example.org/terms/speed").unwrap();
        let speed = Annotated::new(4.0_f64, semantic);
        assert_eq!(speed.sqrt(), 2.0);
        assert_eq!(speed.semantic_type().uri(), "https://example.org/terms/speed");
        assert_eq!(speed.into_inner(), 4.0);
    }
}
