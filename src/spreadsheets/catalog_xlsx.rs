use crate::domain::listing::{Cell, ListingRow};
use crate::domain::schema::SCHEMA;
use crate::errors::CatalogError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The append-only catalog table. Opening reloads the whole file (or creates
/// it, header first); every append rewrites it in full. Concurrent writers
/// are not supported: last writer wins.
pub struct CatalogSheet {
    path: PathBuf,
    rows: Vec<Vec<Cell>>,
}

impl CatalogSheet {
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            let rows = load_rows(&path)?;
            Ok(Self { path, rows })
        } else {
            let sheet = Self {
                path,
                rows: Vec::new(),
            };
            sheet.save()?;
            Ok(sheet)
        }
    }

    pub fn append_row(&mut self, row: &ListingRow) -> Result<(), CatalogError> {
        self.rows.push(row.cells().to_vec());
        self.save()
    }

    /// Data rows only; the header is not counted.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn save(&self) -> Result<(), CatalogError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let bold = Format::new().set_bold();
        for (col, field) in SCHEMA.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, field.header, &bold)
                .map_err(|e| {
                    CatalogError::Xlsx(format!("Failed to write header '{}': {e}", field.header))
                })?;
        }

        for (i, row) in self.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let c = col as u16;
                match cell {
                    Cell::Text(s) => worksheet.write_string(r, c, s),
                    Cell::Formula(f) => worksheet.write_formula(r, c, f.as_str()),
                }
                .map_err(|e| CatalogError::Xlsx(format!("Failed to write cell ({r}, {c}): {e}")))?;
            }
        }

        workbook
            .save(&self.path)
            .map_err(|e| CatalogError::Xlsx(format!("Failed to save {}: {e}", self.path.display())))
    }
}

/// Reads back the active (first) sheet, keeping formulas as formulas so
/// hyperlink cells survive the rewrite cycle. The header row is skipped;
/// `save` always writes its own.
fn load_rows(path: &Path) -> Result<Vec<Vec<Cell>>, CatalogError> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| CatalogError::Xlsx(format!("Failed to open {}: {e}", path.display())))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CatalogError::Xlsx(format!("{} has no worksheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| CatalogError::Xlsx(format!("Failed to read sheet {sheet_name}: {e}")))?;
    let formulas = workbook
        .worksheet_formula(&sheet_name)
        .map_err(|e| CatalogError::Xlsx(format!("Failed to read formulas of {sheet_name}: {e}")))?;

    let formula_start = formulas.start().unwrap_or((0, 0));
    let mut formula_map: HashMap<(u32, u32), String> = HashMap::new();
    for (r, c, formula) in formulas.used_cells() {
        if !formula.is_empty() {
            formula_map.insert(
                (formula_start.0 + r as u32, formula_start.1 + c as u32),
                formula.clone(),
            );
        }
    }

    let Some(start) = range.start() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for (i, row) in range.rows().enumerate() {
        let abs_row = start.0 + i as u32;
        if abs_row == 0 {
            continue; // header
        }
        let mut cells = Vec::with_capacity(row.len());
        for (j, value) in row.iter().enumerate() {
            let abs_col = start.1 + j as u32;
            let cell = match formula_map.get(&(abs_row, abs_col)) {
                Some(formula) => Cell::Formula(formula.clone()),
                None => Cell::Text(data_to_string(value)),
            };
            cells.push(cell);
        }
        rows.push(cells);
    }

    Ok(rows)
}

/// Everything in this sheet is display text; numbers only appear if someone
/// edited the file by hand, so integral floats drop their ".0".
fn data_to_string(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
