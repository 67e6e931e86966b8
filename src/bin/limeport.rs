//! limeport command-line binary

fn main() -> anyhow::Result<()> {
    limeport::cli::run_cli()
}
