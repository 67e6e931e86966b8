//! # limeport
//!
//! A pure-Rust converter from LimeSurvey survey exports to the Resonant
//! survey-hosting platform's JSON schema.
//!
//! ## Supported Formats
//!
//! - **TSV** - LimeSurvey's tab-separated survey-structure export
//!   (tagged rows: `S` setting, `G` group, `Q` question, `SQ` subquestion,
//!   `A` answer option)
//! - **LSS** - LimeSurvey's XML survey archive (relational tables joined
//!   by gid/qid/aid, including the `question_attributes` bag)
//! - **Resonant JSON** - the target schema (groups → questions →
//!   subquestions / answer options)
//!
//! ## Quick Start
//!
//! ### Converting Export Files
//!
//! ```no_run
//! use limeport::converter::{ConvertOptions, convert_lss_to_resonant};
//!
//! let options = ConvertOptions::default();
//! let (survey, report) = convert_lss_to_resonant("survey.lss", "survey.json", &options)?;
//! println!("{} groups converted", survey.question_groups.len());
//! if report.has_drops() {
//!     eprintln!("{} orphaned questions skipped", report.dropped_questions);
//! }
//! # Ok::<(), limeport::Error>(())
//! ```
//!
//! ### Working in Memory
//!
//! ```
//! use limeport::converter::{ConvertOptions, tsv_to_survey};
//!
//! let export = "class\tid\tname\ttext\nS\t\tsurveyls_title\tMy Survey\n";
//! let (survey, _report) = tsv_to_survey(export, &ConvertOptions::default())?;
//! assert_eq!(survey.title, "My Survey");
//! # Ok::<(), limeport::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `limeport` command-line binary

pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        AssemblyReport, ConvertOptions, SourceFormat, convert_lss_to_resonant,
        convert_tsv_to_resonant, lss_to_survey, tsv_to_survey,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::common::{
        AnswerRecord, AttributeBag, GroupRecord, QuestionRecord, SubquestionRecord, SurveyTables,
    };
    pub use crate::formats::lss::{LssDocument, parse_lss, read_lss};
    pub use crate::formats::resonant::{
        AnswerOption, ProlificIntegration, Question, QuestionAttributes, QuestionGroup,
        QuestionSettings, QuestionType, Subquestion, Survey, SurveyFormat, SurveySettings,
        SurveyStatus, serialize_survey, write_survey,
    };
    pub use crate::formats::tsv::{TsvRow, parse_tsv, read_tsv};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
