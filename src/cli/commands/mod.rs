use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a LimeSurvey export to Resonant survey JSON
    Convert {
        /// Source export file (.txt/.tsv tab-separated, or .lss/.xml archive)
        source: PathBuf,

        /// Destination JSON file
        destination: PathBuf,

        /// Input format (auto-detected from extension if not specified)
        #[arg(short = 'i', long)]
        input_format: Option<String>,

        /// Override the survey title from the export
        #[arg(long)]
        title: Option<String>,

        /// Prolific completion code (enables the Prolific integration block)
        #[arg(long)]
        completion_code: Option<String>,

        /// Prolific screen-out code
        #[arg(long, requires = "completion_code")]
        screenout_code: Option<String>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                input_format,
                title,
                completion_code,
                screenout_code,
            } => convert::execute(
                source,
                destination,
                input_format.as_deref(),
                title.as_deref(),
                completion_code.as_deref(),
                screenout_code.as_deref(),
            ),
        }
    }
}
