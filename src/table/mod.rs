mod document;
mod page;
mod raw;

pub use document::parse_tables;
pub use page::OpcodePage;
pub use raw::{RawCell, RawRow, RawTable};
