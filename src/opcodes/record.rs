use std::fmt;

/// One populated cell of an opcode table.
///
/// Length and cycle counts are kept as the text found on the page, they are
/// spliced verbatim into the generated initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeRecord {
    code: usize,
    name: String,
    length: String,
    cycles: String,
    short_cycles: String,
}

impl OpcodeRecord {
    pub fn new(
        code: usize,
        name: impl Into<String>,
        length: impl Into<String>,
        cycles: impl Into<String>,
        short_cycles: impl Into<String>,
    ) -> Self {
        OpcodeRecord {
            code,
            name: name.into(),
            length: length.into(),
            cycles: cycles.into(),
            short_cycles: short_cycles.into(),
        }
    }

    pub fn code(&self) -> usize {
        self.code
    }

    /// Lowercase, unpadded: `0x0`, `0x1f`, `0xcb`.
    pub fn code_literal(&self) -> String {
        format!("{:#x}", self.code)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    /// Cycles when a conditional branch is taken, or the only count.
    pub fn cycles(&self) -> &str {
        &self.cycles
    }

    /// Cycles when a conditional branch is not taken.
    pub fn short_cycles(&self) -> &str {
        &self.short_cycles
    }
}

impl fmt::Display for OpcodeRecord {
    // Field order of `struct Op { code, length, short, long, debug }`.
    // Quotes inside the name are not escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, \"{}\"",
            self.code_literal(),
            self.length,
            self.short_cycles,
            self.cycles,
            self.name
        )
    }
}

/// A table position, either unused (`&nbsp;` on the page) or an opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpcodeSlot {
    Empty,
    Defined(OpcodeRecord),
}

impl OpcodeSlot {
    pub fn record(&self) -> Option<&OpcodeRecord> {
        match self {
            OpcodeSlot::Empty => None,
            OpcodeSlot::Defined(record) => Some(record),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OpcodeSlot::Empty)
    }
}

impl fmt::Display for OpcodeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeSlot::Empty => Ok(()),
            OpcodeSlot::Defined(record) => write!(f, "{}", record),
        }
    }
}
