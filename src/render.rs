//! Plain-text rendering of a document.

use sumgrid_core::{CellRef, Document};

/// Render every cell's display text as an aligned table with A1-style headers.
pub(crate) fn render_table(doc: &Document) -> String {
    let rows = doc.rows();
    let cols = doc.cols();

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    doc.get_display_value(&CellRef::new(row, col))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    let label_width = rows.to_string().len();
    let widths: Vec<usize> = (0..cols)
        .map(|col| {
            cells
                .iter()
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
                .max(CellRef::column_label(col).len())
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (col, width) in widths.iter().enumerate() {
        out.push_str(&format!(" | {:<width$}", CellRef::column_label(col), width = width));
    }
    out.push('\n');

    for (row, values) in cells.iter().enumerate() {
        out.push_str(&format!("{:>width$}", row + 1, width = label_width));
        for (value, width) in values.iter().zip(&widths) {
            out.push_str(&format!(" | {:<width$}", value, width = *width));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use sumgrid_core::{CellRef, Document, RecordingSink, SheetConfig};

    #[test]
    fn renders_headers_and_values() {
        let mut doc = Document::new(SheetConfig::new(2, 2).unwrap()).unwrap();
        let mut sink = RecordingSink::new();
        doc.set_cell_value(CellRef::new(0, 0), "5", &mut sink).unwrap();
        doc.set_cell_value(CellRef::new(1, 1), "=A1+10", &mut sink)
            .unwrap();

        let table = render_table(&doc);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec!["  | A | B ", "1 | 5 |   ", "2 |   | 15"]);
    }
}
