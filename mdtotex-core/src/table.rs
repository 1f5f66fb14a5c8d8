// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Typed cell and row records handed from the cell builder to the table renderer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn column_spec(alignment: Option<Self>) -> char {
        match alignment {
            Some(Self::Center) => 'c',
            Some(Self::Right) => 'r',
            Some(Self::Left) | None => 'l',
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub align: Option<Alignment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCell {
    /// Already-rendered LaTeX.
    pub content: String,
    pub flags: CellFlags,
}

impl TableCell {
    pub fn new(content: impl Into<String>, flags: CellFlags) -> Self {
        Self {
            content: content.into(),
            flags,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn push(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }
}

impl FromIterator<TableCell> for TableRow {
    fn from_iter<I: IntoIterator<Item = TableCell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Builds a `tabular` environment.
///
/// Column count and alignment come from the first row. Shorter rows are padded with empty
/// cells and longer rows are truncated to that width.
pub fn render_table(header: Option<&TableRow>, body: &[TableRow]) -> String {
    let Some(first) = header.or(body.first()) else {
        return String::new();
    };
    let columns = first.cells.len();

    let spec = first
        .cells
        .iter()
        .map(|cell| Alignment::column_spec(cell.flags.align).to_string())
        .collect::<Vec<_>>()
        .join("|");

    let mut lines = Vec::new();
    lines.push(format!("\\begin{{tabular}}{{|{spec}|}}"));
    lines.push("\\hline".to_string());
    if let Some(header) = header {
        lines.push(format_row(header, columns));
        lines.push("\\hline".to_string());
    }
    for row in body {
        lines.push(format_row(row, columns));
    }
    if !body.is_empty() {
        lines.push("\\hline".to_string());
    }
    lines.push("\\end{tabular}".to_string());

    format!("\n{}\n\n", lines.join("\n"))
}

fn format_row(row: &TableRow, columns: usize) -> String {
    let mut cells = row
        .cells
        .iter()
        .take(columns)
        .map(|cell| cell.content.as_str())
        .collect::<Vec<_>>();
    while cells.len() < columns {
        cells.push("");
    }
    format!("{} \\\\", cells.join(" & "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, Option<Alignment>)]) -> TableRow {
        cells
            .iter()
            .map(|(content, align)| TableCell::new(*content, CellFlags { align: *align }))
            .collect()
    }

    // 行为：列格式来自首行的对齐标记，表头与表体之间有横线。
    #[test]
    fn header_and_body() {
        let header = row(&[("A", Some(Alignment::Center)), ("B", None)]);
        let body = [row(&[("1", None), ("2", None)])];
        assert_eq!(
            render_table(Some(&header), &body),
            "\n\\begin{tabular}{|c|l|}\n\\hline\nA & B \\\\\n\\hline\n1 & 2 \\\\\n\\hline\n\\end{tabular}\n\n"
        );
    }

    // 行为：右对齐映射为 r。
    #[test]
    fn right_alignment() {
        let header = row(&[("x", Some(Alignment::Right)), ("y", Some(Alignment::Left))]);
        assert!(render_table(Some(&header), &[]).contains("{|r|l|}"));
    }

    // 行为：行过短时补空单元格，过长时截断。
    #[test]
    fn ragged_rows_are_padded_or_truncated() {
        let header = row(&[("A", None), ("B", None)]);
        let body = [row(&[("1", None)]), row(&[("1", None), ("2", None), ("3", None)])];
        let table = render_table(Some(&header), &body);
        assert!(table.contains("\n1 &  \\\\\n"));
        assert!(table.contains("\n1 & 2 \\\\\n"));
        assert!(!table.contains('3'));
    }

    // 行为：没有表头时由首个表体行决定列格式。
    #[test]
    fn body_only() {
        let body = [row(&[("1", Some(Alignment::Center))])];
        assert_eq!(
            render_table(None, &body),
            "\n\\begin{tabular}{|c|}\n\\hline\n1 \\\\\n\\hline\n\\end{tabular}\n\n"
        );
    }

    // 行为：空表不产生输出。
    #[test]
    fn empty_table() {
        assert_eq!(render_table(None, &[]), "");
    }
}
