use std::path::PathBuf;

use clap::Parser;

/// Regenerates opcodes.inl and cb_opcodes.inl from the pastraiser opcode tables.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    // Also write the fetched page here.
    #[arg(long)]
    pub save_html: Option<PathBuf>,
}
