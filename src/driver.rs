// driver.rs
use crate::browser;
use crate::console::{echo_row, Console};
use crate::domain::compose::compose_row;
use crate::domain::schema::keys;
use crate::errors::CatalogError;
use crate::scraper::{ListingScraper, ScrapedDefaults};
use crate::spreadsheets::CatalogSheet;
use std::fs;
use std::io;
use url::Url;

const OUTPUT_FILE: &str = "output.xlsx";

pub fn run() -> Result<(), CatalogError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    let answer = console.read_value("Enter a listing URL or the path to a file of URLs", "")?;
    let urls = gather_urls(answer.trim())?;
    if urls.is_empty() {
        println!("No URLs to process.");
        return Ok(());
    }

    let scraper = match ListingScraper::new() {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("⚠️ Scraper unavailable, falling back to manual entry: {e}");
            None
        }
    };

    for url in &urls {
        println!();
        println!("🚗 {url}");
        browser::open_listing(url);

        let mut defaults = match scraper.as_ref().map(|s| s.scrape_listing(url)) {
            Some(Ok(defaults)) => defaults,
            Some(Err(e)) => {
                eprintln!("⚠️ Scrape failed, starting from blank defaults: {e}");
                ScrapedDefaults::default()
            }
            None => ScrapedDefaults::default(),
        };
        defaults.set(keys::LINK, url.as_str());

        let row = compose_row(&mut console, &defaults)?;

        // Reload-and-rewrite on every append, so aborting mid-session keeps
        // everything already written.
        let mut sheet = CatalogSheet::open_or_create(OUTPUT_FILE)?;
        sheet.append_row(&row)?;

        echo_row(url, &row);
        println!("✅ Row {} saved to {OUTPUT_FILE}", sheet.row_count());
    }

    Ok(())
}

/// The one input prompt accepts either a literal URL or a path to a
/// newline-delimited list. An unreadable file ends the session.
fn gather_urls(answer: &str) -> Result<Vec<String>, CatalogError> {
    if looks_like_url(answer) {
        return Ok(vec![answer.to_string()]);
    }
    let contents = fs::read_to_string(answer)
        .map_err(|e| CatalogError::Io(format!("Failed to read URL file {answer}: {e}")))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn looks_like_url(answer: &str) -> bool {
    Url::parse(answer)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
