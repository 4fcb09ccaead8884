pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod opcodes;
pub mod table;

use config::GeneratorConfig;
use error::GenerateError;
use generator::GenerationSummary;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

pub use generator::generate_from_html;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Fetches the reference page and regenerates both initializer files.
pub fn run(args: args::Args) -> Result<(), GenerateError> {
    setup_logging(&args.log_path)?;
    let config = GeneratorConfig::default();

    let html = fetch::fetch_page(&config.url)?;
    if let Some(path) = &args.save_html {
        fetch::save_page(path, &html)?;
    }

    let summary = generate_from_html(&html, &config)?;
    log_summary(&summary);
    Ok(())
}

fn log_summary(summary: &GenerationSummary) {
    for table in [&summary.unprefixed, &summary.cb_prefixed] {
        info!(
            "{:<12} {:>3} opcodes, {:>3} unused -> {}",
            table.label,
            table.defined,
            table.empty,
            table.path.display()
        );
    }
}
