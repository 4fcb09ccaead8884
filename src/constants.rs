/// Reference page holding both Game Boy opcode tables.
pub const OPCODE_TABLE_URL: &str = "http://pastraiser.com/cpu/gameboy/gameboy_opcodes.html";

pub const OPCODES_FILE: &str = "opcodes.inl";
pub const CB_OPCODES_FILE: &str = "cb_opcodes.inl";

// Position of each table among the page's <table> elements.
pub const UNPREFIXED_TABLE_INDEX: usize = 0;
pub const CB_PREFIXED_TABLE_INDEX: usize = 1;

pub const UNPREFIXED_LABEL: &str = "unprefixed";
pub const CB_PREFIXED_LABEL: &str = "CB-prefixed";

pub const CB_PREFIX_OPCODE_BYTE: u8 = 0xCB;

/// Placeholder content of an unused opcode cell (`&nbsp;`).
pub const NBSP: &str = "\u{a0}";
/// Separates the length from the cycle counts, e.g. `2&nbsp;&nbsp;12/8`.
pub const TIMING_SEPARATOR: &str = "\u{a0}\u{a0}";
/// Separates the taken and not-taken cycle counts.
pub const CYCLE_SEPARATOR: char = '/';

/// Data cells per row, the low nibble of the opcode.
pub const CELLS_PER_ROW: usize = 16;
