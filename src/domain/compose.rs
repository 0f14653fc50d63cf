use crate::console::FieldSource;
use crate::domain::listing::{Cell, ListingRow};
use crate::domain::schema::{Input, SCHEMA};
use crate::errors::CatalogError;
use crate::scraper::ScrapedDefaults;

/// Walks the schema in column order, merging scraped defaults with operator
/// input. The source already applies the blank-falls-back-to-default rule,
/// so an empty cell here means there was neither a default nor an override.
pub fn compose_row(
    source: &mut dyn FieldSource,
    defaults: &ScrapedDefaults,
) -> Result<ListingRow, CatalogError> {
    let mut cells = Vec::with_capacity(SCHEMA.len());

    for field in &SCHEMA {
        let default = field.scrape_key.map(|k| defaults.get(k)).unwrap_or("");
        let cell = match field.input {
            Input::Scraped => Cell::text(default),
            Input::Prompt => Cell::text(source.prompt(field.label, default)?),
            Input::Editor => Cell::text(source.edit_multiline(field.label, default)?),
            Input::Hyperlink => {
                let value = source.prompt(field.label, default)?;
                if value.is_empty() {
                    Cell::text("")
                } else {
                    Cell::hyperlink(&value, field.label)
                }
            }
        };
        cells.push(cell);
    }

    Ok(ListingRow::new(cells))
}
