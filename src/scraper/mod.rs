mod models;
mod scraper;
mod scraper_error;

pub use models::ScrapedDefaults;
pub use scraper::ListingScraper;
pub use scraper_error::ScraperError;
