//! Survey export and document formats
//!
//! - `tsv` - LimeSurvey's tab-separated survey-structure export
//! - `lss` - LimeSurvey's XML survey archive
//! - `resonant` - the Resonant survey JSON schema (conversion target)
//! - `common` - the shared relational tables both readers produce

pub mod common;
pub mod lss;
pub mod resonant;
pub mod tsv;
