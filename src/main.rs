use clap::Parser;

use gameboy_opcodes::args::Args;
use gameboy_opcodes::error::GenerateError;

fn main() -> Result<(), GenerateError> {
    gameboy_opcodes::run(Args::parse())
}
