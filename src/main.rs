use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate classifier.h and classifier.cc from a boosted-stump model.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// XML model document
    model: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let (config, source) =
        stumpgen::config::load_from_environment().context("loading configuration")?;
    log::debug!("configuration from {:?}: {:?}", source, config);

    let report = stumpgen::Generator::new(config)
        .run(&cli.model)
        .with_context(|| format!("generating classifier from {}", cli.model.display()))?;

    log::info!(
        "wrote {} and {} ({} vote statements)",
        report.header_path.display(),
        report.source_path.display(),
        report.num_vote_statements
    );
    Ok(())
}

fn main() -> ExitCode {
    stumpgen::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(e) = err.downcast_ref::<stumpgen::StumpgenError>() {
                log::debug!("failure category: {}", e.category());
            }
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
