// errors.rs
use std::fmt;

/// Errors that end the session: console I/O, the backing spreadsheet,
/// or an editor invocation. Scraping failures never pass through here;
/// they are reported at the call site and reduce to empty defaults.
#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Xlsx(String),
    Editor(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::Xlsx(msg) => write!(f, "Spreadsheet error: {msg}"),
            CatalogError::Editor(msg) => write!(f, "Editor error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}
