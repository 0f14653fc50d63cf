// console.rs
use crate::domain::listing::ListingRow;
use crate::domain::schema::SCHEMA;
use crate::errors::CatalogError;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::Command;

/// Where field values come from during composition. The real implementation
/// is the interactive console below; tests drive the composer with a
/// scripted source instead.
pub trait FieldSource {
    /// One-line value for a named field; blank input falls back to `default`.
    fn prompt(&mut self, label: &str, default: &str) -> Result<String, CatalogError>;
    /// Editor-buffer value for fields that span lines, collapsed to a single
    /// `", "`-delimited string; an emptied buffer falls back to `default`.
    fn edit_multiline(&mut self, label: &str, default: &str) -> Result<String, CatalogError>;
}

pub struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads one trimmed line, showing the default inline when there is one.
    /// EOF counts as a blank answer.
    pub fn read_value(&mut self, label: &str, default: &str) -> Result<String, CatalogError> {
        if default.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} [{default}]: ");
        }
        io::stdout()
            .flush()
            .map_err(|e| CatalogError::Io(format!("Failed to flush prompt: {e}")))?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| CatalogError::Io(format!("Failed to read input: {e}")))?;

        let value = line.trim();
        Ok(if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        })
    }
}

impl<R: BufRead> FieldSource for Console<R> {
    fn prompt(&mut self, label: &str, default: &str) -> Result<String, CatalogError> {
        self.read_value(label, default)
    }

    fn edit_multiline(&mut self, label: &str, default: &str) -> Result<String, CatalogError> {
        let raw = open_editor(label, default)?;
        Ok(finish_edit(&raw, default))
    }
}

/// Opens $EDITOR (default nano) on a scoped temp file seeded with the
/// scraped default, blocking until the operator closes it.
fn open_editor(label: &str, seed: &str) -> Result<String, CatalogError> {
    let suffix = format!("_{}.txt", label.replace('/', "-"));
    let mut file = tempfile::Builder::new()
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| CatalogError::Editor(format!("Failed to create temp file: {e}")))?;

    if !seed.is_empty() {
        writeln!(file, "{seed}")
            .map_err(|e| CatalogError::Editor(format!("Failed to seed temp file: {e}")))?;
        file.flush()
            .map_err(|e| CatalogError::Editor(format!("Failed to flush temp file: {e}")))?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "nano".to_string());
    Command::new(&editor)
        .arg(file.path())
        .status()
        .map_err(|e| CatalogError::Editor(format!("Failed to launch {editor}: {e}")))?;

    fs::read_to_string(file.path())
        .map_err(|e| CatalogError::Editor(format!("Failed to read edited buffer: {e}")))
}

/// Collapses an edited buffer to one line, falling back to the default when
/// the operator leaves it empty.
pub fn finish_edit(raw: &str, default: &str) -> String {
    let collapsed = collapse_lines(raw);
    if collapsed.is_empty() {
        default.to_string()
    } else {
        collapsed
    }
}

pub fn collapse_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Echoes the fully composed row so the operator can eyeball it against the
/// page before moving on.
pub fn echo_row(url: &str, row: &ListingRow) {
    println!("📋 Collected row for {url}:");
    for (field, cell) in SCHEMA.iter().zip(row.cells()) {
        println!("  {}: {}", field.header, cell.display());
    }
}
