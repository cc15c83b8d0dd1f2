//! Wind measurement vocabulary and the wind speed/direction example.
//!
//! Wind is commonly stored as two vector components (eastward `u`,
//! northward `v`) but reported as a speed plus the direction the wind blows
//! *from*, in degrees clockwise from north. Both pairs are plain decimals;
//! only the bound URIs tell a consumer which convention a value follows.

use crate::annotated::Annotated;
use crate::error::{AnnotationError, Error, ProjectionError};
use crate::model::{SemanticType, StructuralType};
use crate::projection::{JsonLdDocument, Payload};
use crate::registry::AnnotationRegistry;

/// Base IRI of the wind measurement vocabulary.
pub const NS: &str = "https://wind-measurement-ontology.foo/terms/";

/// Horizontal wind speed, m/s.
pub const WIND_SPEED: &str = "https://wind-measurement-ontology.foo/terms/wind_speed";
/// Direction the wind blows from, degrees clockwise from north.
pub const WIND_FROM_DIRECTION: &str =
    "https://wind-measurement-ontology.foo/terms/wind_from_direction";
/// Eastward wind component `u`, m/s.
pub const EASTWARD_WIND: &str = "https://wind-measurement-ontology.foo/terms/eastward_wind";
/// Northward wind component `v`, m/s.
pub const NORTHWARD_WIND: &str = "https://wind-measurement-ontology.foo/terms/northward_wind";

/// All terms defined by this vocabulary.
pub const TERMS: &[&str] = &[WIND_SPEED, WIND_FROM_DIRECTION, EASTWARD_WIND, NORTHWARD_WIND];

fn decimal(uri: &str) -> SemanticType {
    SemanticType::trusted(StructuralType::Decimal, uri)
}

/// Horizontal wind speed from its vector components.
#[must_use]
pub fn wind_speed(eastward: f64, northward: f64) -> f64 {
    eastward.hypot(northward)
}

/// Direction the wind blows from, in `[0, 360)` degrees.
///
/// Calm air (both components zero) reports `0.0`.
#[must_use]
pub fn wind_from_direction(eastward: f64, northward: f64) -> f64 {
    if eastward == 0.0 && northward == 0.0 {
        return 0.0;
    }
    let degrees = (-eastward).atan2(-northward).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 and keeps the sign of -0.0.
    if degrees >= 360.0 || degrees == 0.0 {
        0.0
    } else {
        degrees
    }
}

/// A wind observation whose values carry their semantic types.
#[derive(Debug, Clone, PartialEq)]
pub struct WindSample {
    /// Horizontal speed.
    pub speed: Annotated<f64>,
    /// Direction the wind blows from.
    pub from_direction: Annotated<f64>,
}

impl WindSample {
    /// Builds the payload for [`observation_registry`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Unserializable`] if a value cannot be
    /// represented as JSON.
    pub fn payload(&self) -> Result<Payload, ProjectionError> {
        Payload::new()
            .with_annotated("wind_speed", &self.speed)?
            .with_annotated("wind_from_direction", &self.from_direction)
    }
}

/// Converts vector components to an annotated speed and direction.
#[must_use]
pub fn speed_and_direction(eastward: f64, northward: f64) -> WindSample {
    WindSample {
        speed: Annotated::new(wind_speed(eastward, northward), decimal(WIND_SPEED)),
        from_direction: Annotated::new(
            wind_from_direction(eastward, northward),
            decimal(WIND_FROM_DIRECTION),
        ),
    }
}

/// Signature of `report_wind(wind_speed, wind_from_direction)`.
///
/// # Errors
///
/// Returns an error only if the vocabulary binds a field twice.
pub fn observation_registry() -> Result<AnnotationRegistry, AnnotationError> {
    let mut registry = AnnotationRegistry::new("report_wind");
    registry
        .bind("wind_speed", decimal(WIND_SPEED))?
        .bind("wind_from_direction", decimal(WIND_FROM_DIRECTION))?;
    Ok(registry)
}

/// Signature of [`wind_speed`]: components in, `wind_speed` out.
///
/// # Errors
///
/// Returns an error only if the vocabulary binds a field twice.
pub fn wind_speed_registry() -> Result<AnnotationRegistry, AnnotationError> {
    component_registry("wind_speed", WIND_SPEED)
}

/// Signature of [`wind_from_direction`]: components in, `wind_from_direction` out.
///
/// # Errors
///
/// Returns an error only if the vocabulary binds a field twice.
pub fn wind_from_direction_registry() -> Result<AnnotationRegistry, AnnotationError> {
    component_registry("wind_from_direction", WIND_FROM_DIRECTION)
}

fn component_registry(
    function: &str,
    returns: &str,
) -> Result<AnnotationRegistry, AnnotationError> {
    let mut registry = AnnotationRegistry::new(function);
    registry
        .bind("eastward_wind", decimal(EASTWARD_WIND))?
        .bind("northward_wind", decimal(NORTHWARD_WIND))?
        .bind_return(function, decimal(returns))?;
    Ok(registry)
}

/// Projects one call of [`wind_speed`], inputs and result together.
///
/// # Errors
///
/// Returns an error if the call cannot be projected (non-finite input).
pub fn wind_speed_call(eastward: f64, northward: f64) -> Result<JsonLdDocument, Error> {
    let payload = Payload::new()
        .with("eastward_wind", eastward)
        .with("northward_wind", northward)
        .with("wind_speed", wind_speed(eastward, northward));
    Ok(wind_speed_registry()?.project(&payload)?)
}

/// Projects an observation of the given components through [`observation_registry`].
///
/// # Errors
///
/// Returns an error if the observation cannot be projected (non-finite input).
pub fn observation(eastward: f64, northward: f64) -> Result<JsonLdDocument, Error> {
    let payload = speed_and_direction(eastward, northward).payload()?;
    Ok(observation_registry()?.project(&payload)?)
}

/// The reference observation: 10 m/s wind from due north.
///
/// # Errors
///
/// Returns an error only if the vocabulary is inconsistent.
pub fn reference_observation() -> Result<JsonLdDocument, Error> {
    observation(0.0, -10.0)
}
