use std::path::PathBuf;

use crate::constants::{CB_OPCODES_FILE, OPCODE_TABLE_URL, OPCODES_FILE};

/// Where the tables come from and where the generated fragments go.
/// The binary always runs with `GeneratorConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub url: String,
    pub opcodes_path: PathBuf,
    pub cb_opcodes_path: PathBuf,
}

impl GeneratorConfig {
    /// Same file names, placed under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        GeneratorConfig {
            opcodes_path: dir.join(OPCODES_FILE),
            cb_opcodes_path: dir.join(CB_OPCODES_FILE),
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            url: OPCODE_TABLE_URL.to_string(),
            opcodes_path: PathBuf::from(OPCODES_FILE),
            cb_opcodes_path: PathBuf::from(CB_OPCODES_FILE),
        }
    }
}
