use super::{RawTable, parse_tables};
use crate::constants::{CB_PREFIXED_TABLE_INDEX, UNPREFIXED_TABLE_INDEX};
use crate::error::GenerateError;

/// The two opcode tables of the reference page, picked by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodePage {
    pub unprefixed: RawTable,
    pub cb_prefixed: RawTable,
}

impl OpcodePage {
    pub fn from_html(html: &str) -> Result<Self, GenerateError> {
        Self::from_tables(parse_tables(html))
    }

    /// Any tables after the second one are ignored.
    pub fn from_tables(mut tables: Vec<RawTable>) -> Result<Self, GenerateError> {
        let found = tables.len();
        for index in [UNPREFIXED_TABLE_INDEX, CB_PREFIXED_TABLE_INDEX] {
            if index >= found {
                return Err(GenerateError::MissingTable { index, found });
            }
        }

        // Higher index first so the lower one stays in place.
        let cb_prefixed = tables.swap_remove(CB_PREFIXED_TABLE_INDEX);
        let unprefixed = tables.swap_remove(UNPREFIXED_TABLE_INDEX);
        Ok(OpcodePage {
            unprefixed,
            cb_prefixed,
        })
    }
}
