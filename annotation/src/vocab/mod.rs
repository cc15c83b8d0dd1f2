//! Bundled vocabularies.
//!
//! - [`wind`]: wind measurement terms and the speed/direction example
//! - [`metadata`]: wind energy software metadata documents

pub mod metadata;
pub mod wind;
