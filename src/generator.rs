use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::constants::{CB_PREFIX_OPCODE_BYTE, CB_PREFIXED_LABEL, UNPREFIXED_LABEL};
use crate::error::GenerateError;
use crate::opcodes::{OpcodeSlot, extract, format_slots};
use crate::table::{OpcodePage, RawTable};

/// What was written for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub label: &'static str,
    pub path: PathBuf,
    pub defined: usize,
    pub empty: usize,
}

impl TableSummary {
    fn of(label: &'static str, path: &Path, slots: &[OpcodeSlot]) -> Self {
        let empty = slots.iter().filter(|slot| slot.is_empty()).count();
        TableSummary {
            label,
            path: path.to_path_buf(),
            defined: slots.len() - empty,
            empty,
        }
    }

    pub fn slots(&self) -> usize {
        self.defined + self.empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub unprefixed: TableSummary,
    pub cb_prefixed: TableSummary,
}

/// Parses both tables out of `html` and writes their initializer fragments.
///
/// Each table is extracted and written before the next one is read, so a
/// malformed CB-prefixed table still leaves a fresh unprefixed file behind.
pub fn generate_from_html(
    html: &str,
    config: &GeneratorConfig,
) -> Result<GenerationSummary, GenerateError> {
    let page = OpcodePage::from_html(html)?;

    let unprefixed = generate_table(UNPREFIXED_LABEL, &page.unprefixed, &config.opcodes_path)?;
    if let Some(prefix) = unprefixed.get(usize::from(CB_PREFIX_OPCODE_BYTE)) {
        check_prefix_slot(prefix);
    }
    let unprefixed = TableSummary::of(UNPREFIXED_LABEL, &config.opcodes_path, &unprefixed);

    let cb_prefixed = generate_table(CB_PREFIXED_LABEL, &page.cb_prefixed, &config.cb_opcodes_path)?;
    let cb_prefixed = TableSummary::of(CB_PREFIXED_LABEL, &config.cb_opcodes_path, &cb_prefixed);

    Ok(GenerationSummary {
        unprefixed,
        cb_prefixed,
    })
}

fn generate_table(
    label: &'static str,
    table: &RawTable,
    path: &Path,
) -> Result<Vec<OpcodeSlot>, GenerateError> {
    debug!("Reading {} table: {} data rows", label, table.data_rows());
    let slots = extract(table).map_err(|source| GenerateError::Extract {
        table: label,
        source,
    })?;

    fs::write(path, format_slots(&slots))?;
    info!(
        "Wrote {} {} opcode slots to '{}'",
        slots.len(),
        label,
        path.display()
    );
    Ok(slots)
}

/// The unprefixed table names the CB prefix at 0xCB. Anything else there means
/// rows or cells moved and names are paired with the wrong codes.
fn check_prefix_slot(slot: &OpcodeSlot) {
    let names_prefix = slot
        .record()
        .is_some_and(|record| record.name().contains("CB"));
    if !names_prefix {
        warn!(
            "Slot {:#04x} of the {} table does not name the CB prefix, the page layout may have changed",
            CB_PREFIX_OPCODE_BYTE, UNPREFIXED_LABEL
        );
    }
}
