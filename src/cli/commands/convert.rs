//! CLI interface for survey conversion
use crate::converter::{
    ConvertOptions, SourceFormat, convert_lss_to_resonant, convert_tsv_to_resonant,
};
use crate::formats::resonant::ProlificIntegration;
use std::path::Path;

pub fn execute(
    source: &Path,
    destination: &Path,
    input_format: Option<&str>,
    title: Option<&str>,
    completion_code: Option<&str>,
    screenout_code: Option<&str>,
) -> anyhow::Result<()> {
    println!("Converting {source:?} to {destination:?}");

    // Use the provided format or auto-detect from the extension
    let format = if let Some(fmt) = input_format {
        fmt.parse::<SourceFormat>().map_err(anyhow::Error::msg)?
    } else {
        SourceFormat::from_path(source).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot detect input format from source file extension \
                 (expected .txt/.tsv or .lss/.xml, or pass --input-format)"
            )
        })?
    };

    let options = ConvertOptions {
        title: title.map(ToString::to_string),
        prolific: completion_code.map(|code| ProlificIntegration {
            enabled: true,
            completion_code: code.to_string(),
            screenout_code: screenout_code.unwrap_or("SCREENOUT").to_string(),
        }),
    };

    let (survey, report) = match format {
        SourceFormat::Tsv => {
            println!("Converting TSV -> Resonant JSON");
            convert_tsv_to_resonant(source, destination, &options)?
        }
        SourceFormat::Lss => {
            println!("Converting LSS -> Resonant JSON");
            convert_lss_to_resonant(source, destination, &options)?
        }
    };

    let total_questions: usize = survey
        .question_groups
        .iter()
        .map(|group| group.questions.len())
        .sum();

    println!("Converted successfully to {destination:?}");
    println!("   Title: {}", survey.title);
    println!("   Groups: {}", survey.question_groups.len());
    println!("   Questions: {total_questions}");
    if report.has_drops() {
        println!(
            "   Skipped orphaned rows: {} questions, {} subquestions, {} answer options",
            report.dropped_questions, report.dropped_subquestions, report.dropped_answers
        );
    }

    Ok(())
}
