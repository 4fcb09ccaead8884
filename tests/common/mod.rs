pub mod ring_logger;

pub use ring_logger::{captured_lines, dump_log, init_logger};

use std::fs;
use std::path::PathBuf;

use gameboy_opcodes::config::GeneratorConfig;

/// Fresh output directory per test, so parallel tests never share files.
pub fn output_config(test_name: &str) -> GeneratorConfig {
    let dir = std::env::temp_dir().join(format!(
        "gameboy_opcodes_{}_{}",
        test_name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    GeneratorConfig::in_dir(dir)
}

pub fn cleanup(config: &GeneratorConfig) {
    if let Some(dir) = config.opcodes_path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

/// `tests/fixtures/x.html` -> `tests/fixtures/x.<suffix>`
pub fn sibling(html_path: &str, suffix: &str) -> PathBuf {
    let path = PathBuf::from(html_path);
    path.with_extension(suffix)
}
