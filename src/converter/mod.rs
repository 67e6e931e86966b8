//! Survey conversion entry points
//!
//! One pipeline, parameterized by the input-format adapter:
//! ingestion → tree reconstruction → field mapping → serialization,
//! strictly sequential, single pass over the input.

mod assemble;
mod attributes;

pub use assemble::{AssemblyReport, assemble};
pub use attributes::map_attributes;

use crate::error::Result;
use crate::formats::resonant::{ProlificIntegration, Survey, write_survey};
use crate::formats::{lss, tsv};
use std::path::Path;
use std::str::FromStr;

/// The supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Tab-separated survey-structure export (`.txt` / `.tsv`).
    Tsv,
    /// LSS XML survey archive (`.lss` / `.xml`).
    Lss,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        extension.parse().ok()
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" | "txt" => Ok(Self::Tsv),
            "lss" | "xml" => Ok(Self::Lss),
            _ => Err(format!(
                "unknown input format '{s}'. Valid values: tsv/txt, lss/xml"
            )),
        }
    }
}

/// Caller-provided overrides applied after assembly.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Replace the survey title from the export.
    pub title: Option<String>,
    /// Attach a Prolific integration block to the survey settings.
    pub prolific: Option<ProlificIntegration>,
}

fn apply_options(survey: &mut Survey, options: &ConvertOptions) {
    if let Some(title) = &options.title {
        survey.title = title.clone();
    }
    if let Some(prolific) = &options.prolific {
        survey.settings.prolific_integration = Some(prolific.clone());
    }
}

/// Convert a tab-separated export in memory.
///
/// # Errors
/// Returns an error if the export is structurally unparseable.
pub fn tsv_to_survey(content: &str, options: &ConvertOptions) -> Result<(Survey, AssemblyReport)> {
    let tables = tsv::parse_tsv(content)?;
    let (mut survey, report) = assemble(&tables, SourceFormat::Tsv);
    apply_options(&mut survey, options);
    Ok((survey, report))
}

/// Convert an LSS archive in memory.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn lss_to_survey(content: &str, options: &ConvertOptions) -> Result<(Survey, AssemblyReport)> {
    let doc = lss::parse_lss(content)?;
    let tables = lss::to_tables(&doc);
    let (mut survey, report) = assemble(&tables, SourceFormat::Lss);
    apply_options(&mut survey, options);
    Ok((survey, report))
}

/// Convert a tab-separated export file to a Resonant survey JSON file.
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_tsv_to_resonant<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &ConvertOptions,
) -> Result<(Survey, AssemblyReport)> {
    tracing::info!(
        "Converting TSV→Resonant: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );
    let content = std::fs::read_to_string(&source)?;
    let (survey, report) = tsv_to_survey(&content, options)?;
    write_survey(&survey, dest)?;
    tracing::info!("Conversion complete");
    Ok((survey, report))
}

/// Convert an LSS archive file to a Resonant survey JSON file.
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_lss_to_resonant<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &ConvertOptions,
) -> Result<(Survey, AssemblyReport)> {
    tracing::info!(
        "Converting LSS→Resonant: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );
    let content = std::fs::read_to_string(&source)?;
    let (survey, report) = lss_to_survey(&content, options)?;
    write_survey(&survey, dest)?;
    tracing::info!("Conversion complete");
    Ok((survey, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_detection_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("survey.txt")),
            Some(SourceFormat::Tsv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("survey.TSV")),
            Some(SourceFormat::Tsv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("survey_735545.lss")),
            Some(SourceFormat::Lss)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("survey.xml")),
            Some(SourceFormat::Lss)
        );
        assert_eq!(SourceFormat::from_path(Path::new("survey.json")), None);
        assert_eq!(SourceFormat::from_path(Path::new("survey")), None);
    }

    #[test]
    fn test_options_override_title_and_prolific() {
        let content = "class\tid\tname\ttext\nS\t\tsurveyls_title\tOriginal\n";
        let options = ConvertOptions {
            title: Some("Overridden".to_string()),
            prolific: Some(ProlificIntegration {
                enabled: true,
                completion_code: "CLLV7C0K".to_string(),
                screenout_code: "SCREENOUT".to_string(),
            }),
        };
        let (survey, _) = tsv_to_survey(content, &options).unwrap();
        assert_eq!(survey.title, "Overridden");
        let prolific = survey.settings.prolific_integration.unwrap();
        assert!(prolific.enabled);
        assert_eq!(prolific.completion_code, "CLLV7C0K");
    }
}
