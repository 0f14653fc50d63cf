pub mod catalog_xlsx;

pub use catalog_xlsx::CatalogSheet;
