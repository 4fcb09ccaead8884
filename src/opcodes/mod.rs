mod error;
mod extract;
mod format;
mod record;

pub use error::ExtractError;
pub use extract::extract;
pub use format::{format_slot, format_slots};
pub use record::{OpcodeRecord, OpcodeSlot};
