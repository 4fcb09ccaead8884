use super::{ExtractError, OpcodeRecord, OpcodeSlot};
use crate::constants::{CELLS_PER_ROW, CYCLE_SEPARATOR, NBSP, TIMING_SEPARATOR};
use crate::table::{RawCell, RawTable};

/// Walks the table below its header row and right of its header column.
///
/// The slot for data row `i`, cell `j` carries opcode `16 * i + j`, so a
/// table of `R` full rows yields `16 * R` slots where the position of a slot
/// is its opcode.
pub fn extract(table: &RawTable) -> Result<Vec<OpcodeSlot>, ExtractError> {
    let mut slots = Vec::with_capacity(table.data_rows() * CELLS_PER_ROW);
    for (row, raw_row) in table.rows.iter().skip(1).enumerate() {
        let cells = raw_row.cells.len();
        if cells < 2 {
            return Err(ExtractError::ShortRow { row, cells });
        }

        let data_cells = &raw_row.cells[1..];
        if data_cells.len() > CELLS_PER_ROW {
            return Err(ExtractError::TooManyCells {
                row,
                cells: data_cells.len(),
            });
        }

        for (column, cell) in data_cells.iter().enumerate() {
            slots.push(read_slot(row, column, cell)?);
        }
    }
    Ok(slots)
}

/// Opcode for a data coordinate. `extract` keeps `column` below 16.
fn opcode_value(row: usize, column: usize) -> usize {
    debug_assert!(column < CELLS_PER_ROW);
    row * CELLS_PER_ROW + column
}

fn read_slot(row: usize, column: usize, cell: &RawCell) -> Result<OpcodeSlot, ExtractError> {
    let name = cell
        .node(0)
        .ok_or(ExtractError::MissingContent { row, column })?;
    if name == NBSP {
        return Ok(OpcodeSlot::Empty);
    }

    let timing = cell
        .node(1)
        .ok_or(ExtractError::MissingTiming { row, column })?;
    let mut fields = timing.split(TIMING_SEPARATOR);
    let length = fields.next().unwrap_or(timing);
    let cycle_field = fields
        .next()
        .ok_or_else(|| ExtractError::MissingSeparator {
            row,
            column,
            text: timing.to_string(),
        })?;

    // Tokens after the second are dropped.
    let mut counts = cycle_field.split(CYCLE_SEPARATOR);
    let cycles = counts.next().unwrap_or(cycle_field);
    let short_cycles = counts.next().unwrap_or(cycles);

    Ok(OpcodeSlot::Defined(OpcodeRecord::new(
        opcode_value(row, column),
        name,
        length,
        cycles,
        short_cycles,
    )))
}
