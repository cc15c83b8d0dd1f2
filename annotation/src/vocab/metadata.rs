//! Wind energy software metadata documents.
//!
//! Describes a piece of wind energy software (what it models, how it is
//! distributed, who wrote it) and projects the description as JSON-LD.
//! Generic properties are bound to schema.org terms; wind-energy specific
//! ones to the software metadata vocabulary under [`NS`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnnotationError, Error, ProjectionError};
use crate::model::{SemanticType, StructuralType};
use crate::projection::{JsonLdDocument, Payload};
use crate::registry::AnnotationRegistry;

/// Base IRI of the wind energy software metadata vocabulary.
pub const NS: &str = "https://wind-energy-software-metadata.foo/terms/";
/// Base IRI of schema.org.
pub const SCHEMA: &str = "https://schema.org/";

/// Details of an author, also known as creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Full name.
    pub name: String,
    /// ORCID identifier.
    pub orcid: String,
    /// Institutional affiliation.
    pub affiliation: String,
}

/// Details of a software distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Platform the software is distributed on (e.g. `PyPI`).
    pub distribution_platform: String,
    /// Location of the distribution.
    pub url: String,
}

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $lit:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $name {
            /// Every literal this field accepts, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            /// The literal written to documents.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }
    };
}

literal_enum! {
    /// Whether the source code is openly accessible.
    SourceAccessRight {
        /// Source is public.
        Open => "open",
        /// Source is restricted.
        Closed => "closed",
    }
}

literal_enum! {
    /// Kind of resource described. Always software for these documents.
    #[derive(Default)]
    ResourceType {
        /// A software package.
        #[default]
        Software => "software",
    }
}

literal_enum! {
    /// What kind of software this is.
    ResourceSubtype {
        /// Simulates a physical system.
        Model => "model",
        /// Post-processes or analyses data.
        Analysis => "analysis",
        /// Optimises a design or layout.
        Optimisation => "optimisation",
    }
}

literal_enum! {
    /// Whether the software resolves time.
    TimeDomain {
        /// Steady-state.
        Steady => "steady",
        /// Time-resolved.
        Dynamic => "dynamic",
    }
}

literal_enum! {
    /// Scale at which wind energy systems are represented.
    RepresentationLevel {
        /// Whole wind farms.
        WindFarm => "wind_farm",
        /// Individual turbines.
        Turbine => "turbine",
    }
}

literal_enum! {
    /// How turbine rotors are represented.
    TurbineRepresentation {
        /// Actuator disc or line.
        Actuator => "actuator",
        /// Blade element momentum theory.
        Bem => "bem",
        /// Vortex methods.
        VortexMethod => "vortex_method",
        /// Geometry-resolved rotor.
        GeometryResolved => "geometry_resolved",
    }
}

literal_enum! {
    /// Deployment site of the modelled system.
    Location {
        /// On land.
        Onshore => "onshore",
        /// At sea.
        Offshore => "offshore",
    }
}

const SAMPLE_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 3, 15) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Metadata document for a piece of wind energy software.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareMetadataDocument {
    /// Identifier of the software.
    pub id: String,
    /// Name of the software.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Version string of the latest release.
    pub latest_release_version: String,
    /// Date of the latest release.
    pub latest_release_date: NaiveDate,
    /// License identifier.
    pub license: String,
    /// Whether the source is open.
    pub source_access_right: SourceAccessRight,
    /// Authors, also known as creators.
    pub authors: Vec<Author>,
    /// Implementation languages.
    pub programming_languages: Vec<String>,
    /// Operating systems or platforms supported.
    pub supported_platforms: Vec<String>,
    /// Always [`ResourceType::Software`].
    #[serde(default)]
    pub resource_type: ResourceType,
    /// Model, analysis or optimisation software.
    pub resource_subtype: ResourceSubtype,
    /// Source repository location.
    pub repository_url: String,
    /// Documentation location.
    pub documentation_url: String,
    /// Where the software is distributed.
    pub distributions: Vec<Distribution>,
    /// The purpose for the software to exist.
    pub function: String,
    /// Steady or dynamic.
    pub time_domain: TimeDomain,
    /// Wind farm or turbine level.
    pub representation_level: RepresentationLevel,
    /// Rotor representation, if turbines are modelled. Must be present,
    /// possibly `null`.
    #[serde(deserialize_with = "Option::deserialize")]
    pub turbine_representation: Option<TurbineRepresentation>,
    /// Onshore or offshore, if the software is specific to one. Must be
    /// present, possibly `null`.
    #[serde(deserialize_with = "Option::deserialize")]
    pub location: Option<Location>,
    /// Description of the inputs.
    pub input_description: String,
    /// Description of the outputs.
    pub output_description: String,
}

fn choice(literals: &[&str]) -> StructuralType {
    StructuralType::choice(literals)
}

/// Field bindings in document order: (field, structural type, term IRI).
fn bindings() -> Vec<(&'static str, StructuralType, String)> {
    let schema = |term: &str| format!("{SCHEMA}{term}");
    let wes = |term: &str| format!("{NS}{term}");
    vec![
        ("id", StructuralType::Text, schema("identifier")),
        ("name", StructuralType::Text, schema("name")),
        ("description", StructuralType::Text, schema("description")),
        ("latest_release_version", StructuralType::Text, schema("softwareVersion")),
        ("latest_release_date", StructuralType::Date, schema("datePublished")),
        ("license", StructuralType::Text, schema("license")),
        ("source_access_right", choice(SourceAccessRight::LITERALS), wes("source_access_right")),
        ("authors", StructuralType::list(StructuralType::Record), schema("author")),
        (
            "programming_languages",
            StructuralType::list(StructuralType::Text),
            schema("programmingLanguage"),
        ),
        (
            "supported_platforms",
            StructuralType::list(StructuralType::Text),
            schema("operatingSystem"),
        ),
        ("resource_type", choice(ResourceType::LITERALS), wes("resource_type")),
        ("resource_subtype", choice(ResourceSubtype::LITERALS), wes("resource_subtype")),
        ("repository_url", StructuralType::Text, schema("codeRepository")),
        ("documentation_url", StructuralType::Text, schema("softwareHelp")),
        (
            "distributions",
            StructuralType::list(StructuralType::Record),
            wes("distribution"),
        ),
        ("function", StructuralType::Text, wes("function")),
        ("time_domain", choice(TimeDomain::LITERALS), wes("time_domain")),
        (
            "representation_level",
            choice(RepresentationLevel::LITERALS),
            wes("representation_level"),
        ),
        (
            "turbine_representation",
            StructuralType::optional(choice(TurbineRepresentation::LITERALS)),
            wes("turbine_representation"),
        ),
        (
            "location",
            StructuralType::optional(choice(Location::LITERALS)),
            wes("location"),
        ),
        ("input_description", StructuralType::Text, wes("input_description")),
        ("output_description", StructuralType::Text, wes("output_description")),
    ]
}

/// Signature describing every field of a [`SoftwareMetadataDocument`].
///
/// # Errors
///
/// Returns an error only if the vocabulary binds a field twice.
pub fn registry() -> Result<AnnotationRegistry, AnnotationError> {
    let mut registry = AnnotationRegistry::new("software_metadata");
    for (field, structural, uri) in bindings() {
        registry.bind(field, SemanticType::trusted(structural, &uri))?;
    }
    Ok(registry)
}

impl SoftwareMetadataDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid metadata document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Projects the document through [`registry`].
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be projected.
    pub fn to_json_ld(&self) -> Result<JsonLdDocument, Error> {
        let value = serde_json::to_value(self).map_err(|e| ProjectionError::Unserializable {
            field: "software_metadata".to_owned(),
            message: e.to_string(),
        })?;
        let payload = Payload::from_value(value)?;
        Ok(registry()?.project(&payload)?)
    }

    /// A complete example document describing a steady-state wake model.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id: "gustfront".to_owned(),
            name: "GustFront".to_owned(),
            description: "Engineering wake model for wind farm annual energy production."
                .to_owned(),
            latest_release_version: "2.3.1".to_owned(),
            latest_release_date: SAMPLE_RELEASE_DATE,
            license: "MIT".to_owned(),
            source_access_right: SourceAccessRight::Open,
            authors: vec![Author {
                name: "Josiah Carberry".to_owned(),
                orcid: "0000-0002-1825-0097".to_owned(),
                affiliation: "Example Wind Energy Institute".to_owned(),
            }],
            programming_languages: vec!["Rust".to_owned(), "Python".to_owned()],
            supported_platforms: vec!["linux".to_owned(), "macos".to_owned(), "windows".to_owned()],
            resource_type: ResourceType::Software,
            resource_subtype: ResourceSubtype::Model,
            repository_url: "https://example.org/gustfront/src".to_owned(),
            documentation_url: "https://example.org/gustfront/docs".to_owned(),
            distributions: vec![Distribution {
                distribution_platform: "PyPI".to_owned(),
                url: "https://example.org/pypi/gustfront".to_owned(),
            }],
            function: "Estimate wake losses and annual energy production of wind farms."
                .to_owned(),
            time_domain: TimeDomain::Steady,
            representation_level: RepresentationLevel::WindFarm,
            turbine_representation: Some(TurbineRepresentation::Actuator),
            location: None,
            input_description: "Turbine layout, power curves and a wind rose.".to_owned(),
            output_description: "Per-turbine power and farm annual energy production."
                .to_owned(),
        }
    }
}
