/// A single `<td>`, reduced to its text content nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    nodes: Vec<String>,
}

impl RawCell {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawCell {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn node(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(String::as_str)
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<RawCell>,
}

impl RawRow {
    pub fn new(cells: Vec<RawCell>) -> Self {
        RawRow { cells }
    }
}

/// Rows of cells, header row and header column included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        RawTable { rows }
    }

    /// Number of rows after the header row.
    pub fn data_rows(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}
