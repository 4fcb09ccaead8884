use scraper::{ElementRef, Html, Selector};

use super::{RawCell, RawRow, RawTable};

/// Parses an HTML document and returns every `<table>` in document order.
pub fn parse_tables(html: &str) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    let tables = selector("table");
    let rows = selector("tr");
    let cells = selector("td");

    document
        .select(&tables)
        .map(|table| read_table(table, &rows, &cells))
        .collect()
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

fn read_table(table: ElementRef<'_>, rows: &Selector, cells: &Selector) -> RawTable {
    RawTable::new(
        table
            .select(rows)
            .map(|row| RawRow::new(row.select(cells).map(read_cell).collect()))
            .collect(),
    )
}

// `<td>NOP<br>1&nbsp;&nbsp;4<br>- - - -</td>` becomes ["NOP", "1\u{a0}\u{a0}4", "- - - -"].
fn read_cell(cell: ElementRef<'_>) -> RawCell {
    RawCell::new(cell.text().filter(|node| !is_layout_whitespace(node)))
}

/// Source formatting between tags. NBSP is not ASCII whitespace and survives.
fn is_layout_whitespace(node: &str) -> bool {
    node.chars().all(|c| c.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {

    use super::*;

    const PAGE: &str = r#"<html><body>
        <table>
          <tr><td>&nbsp;</td><td>x0</td><td>x1</td></tr>
          <tr><td>0x</td><td>NOP<br>1&nbsp;&nbsp;4<br>- - - -</td><td>&nbsp;</td></tr>
        </table>
        <p>between</p>
        <table>
          <tr><td>&nbsp;</td><td>x0</td></tr>
          <tr><td>0x</td><td>RLC B<br>2&nbsp;&nbsp;8<br>Z 0 0 C</td></tr>
        </table>
    </body></html>"#;

    #[test]
    fn test_tables_in_document_order() {
        let tables = parse_tables(PAGE);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[1].rows[1].cells[1].node(0), Some("RLC B"));
    }

    #[test]
    fn test_cell_text_nodes() {
        let tables = parse_tables(PAGE);
        let row = &tables[0].rows[1];
        assert_eq!(row.cells.len(), 3);
        assert_eq!(
            row.cells[1].nodes(),
            ["NOP", "1\u{a0}\u{a0}4", "- - - -"]
        );
        assert_eq!(row.cells[2].nodes(), ["\u{a0}"]);
    }

    #[test]
    fn test_layout_whitespace_is_dropped() {
        let html = "<table><tr><td>INC B<br>\n<span>1&nbsp;&nbsp;4</span>\n</td></tr></table>";
        let tables = parse_tables(html);
        let cell = &tables[0].rows[0].cells[0];
        assert_eq!(cell.nodes(), ["INC B", "1\u{a0}\u{a0}4"]);

        assert!(is_layout_whitespace(" \n\t"));
        assert!(!is_layout_whitespace("\u{a0}"));
    }

    #[test]
    fn test_no_tables() {
        assert!(parse_tables("<html><body><p>moved</p></body></html>").is_empty());
    }
}
