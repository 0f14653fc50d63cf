/// One cell of a listing row. Every field is display text except the two
/// hyperlink columns, which carry a formula instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Formula(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// The one place hyperlink formulas are built. Embedded quotes are
    /// doubled, the Excel escape. Stored without the leading `=`, which is
    /// what the reader hands back and what the writer prefixes itself.
    pub fn hyperlink(url: &str, label: &str) -> Self {
        let url = url.replace('"', "\"\"");
        let label = label.replace('"', "\"\"");
        Cell::Formula(format!("HYPERLINK(\"{url}\", \"{label}\")"))
    }

    pub fn display(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Formula(s) => s,
        }
    }
}

/// One fixed-schema record for a single listing. Constructed once per URL,
/// appended to the sheet, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    cells: Vec<Cell>,
}

impl ListingRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
