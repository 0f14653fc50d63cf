// scraper.rs
use crate::domain::schema::keys;
use crate::scraper::models::{PostingData, ScrapedDefaults};
use crate::scraper::ScraperError;
use chrono::{DateTime, Datelike};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Attr-group labels worth keeping, renamed to their scrape keys. Labels not
/// listed here have no column to land in and are dropped.
const ATTR_RENAMES: &[(&str, &str)] = &[
    ("odometer", keys::MILEAGE),
    ("cylinders", keys::ENGINE),
    ("title status", keys::ACCIDENTS),
    ("condition", keys::CONDITION),
    ("vin", keys::VIN),
    ("drive", keys::DRIVE),
];

pub struct ListingScraper {
    client: Client,
    selectors: Selectors,
}

/// The one supported page layout, as fixed tag/class selectors. Parsed once
/// at startup so a typo fails loudly instead of silently matching nothing.
struct Selectors {
    title: Selector,
    price: Selector,
    attr_span: Selector,
    posted: Selector,
    geo_placename: Selector,
    geo_region: Selector,
    geo_position: Selector,
    posting_data: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            title: parse_selector("#titletextonly")?,
            price: parse_selector("span.price")?,
            attr_span: parse_selector("p.attrgroup span")?,
            posted: parse_selector("time.date.timeago")?,
            geo_placename: parse_selector(r#"meta[name="geo.placename"]"#)?,
            geo_region: parse_selector(r#"meta[name="geo.region"]"#)?,
            geo_position: parse_selector(r#"meta[name="geo.position"]"#)?,
            posting_data: parse_selector(r#"script[id="ld_posting_data"]"#)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{css}: {e}")))
}

impl ListingScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            selectors: Selectors::new()?,
        })
    }

    /// One unauthenticated GET, then best-effort extraction. The error side
    /// is the "extraction unavailable" marker: the caller reports it and
    /// carries on with empty defaults.
    pub fn scrape_listing(&self, url: &str) -> Result<ScrapedDefaults, ScraperError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Http(format!("{url} returned {status}")));
        }

        let html = response
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(self.parse(&html))
    }

    /// Extraction never fails: anything the page does not have is simply
    /// absent from the returned defaults.
    pub fn parse(&self, html: &str) -> ScrapedDefaults {
        let document = Html::parse_document(html);
        let s = &self.selectors;
        let mut defaults = ScrapedDefaults::default();

        if let Some(title) = document.select(&s.title).next() {
            defaults.set(keys::CAR, text_of(&title));
        }
        if let Some(price) = document.select(&s.price).next() {
            defaults.set(keys::PRICE, strip_currency(&text_of(&price)));
        }

        // Two geo meta tags make the location string; the region keeps only
        // its last segment ("US-CA" -> "CA").
        let placename = meta_content(&document, &s.geo_placename);
        let region = meta_content(&document, &s.geo_region);
        let region_abbr = region.rsplit('-').next().unwrap_or("").trim();
        let location = [placename.as_str(), region_abbr]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        defaults.set(keys::LOCATION, location);

        // "37.77;-122.41" -> latitude / longitude
        let position = meta_content(&document, &s.geo_position);
        if let Some((lat, lon)) = position.split_once(';') {
            defaults.set(keys::LATITUDE, lat.trim());
            defaults.set(keys::LONGITUDE, lon.trim());
        }

        if let Some(datetime) = document
            .select(&s.posted)
            .next()
            .and_then(|t| t.value().attr("datetime"))
        {
            if let Some(status) = posted_status(datetime) {
                defaults.set(keys::STATUS, status);
            }
        }

        // "label: value" spans, remapped through the rename table.
        for span in document.select(&s.attr_span) {
            let text = text_of(&span);
            let Some((label, value)) = text.split_once(':') else {
                continue;
            };
            let label = label.trim().to_lowercase();
            if let Some((_, key)) = ATTR_RENAMES.iter().find(|(from, _)| *from == label) {
                defaults.set(key, value.trim());
            }
        }

        // The embedded posting-data script backfills the two fields the
        // markup sometimes omits.
        if let Some(node) = document.select(&s.posting_data).next() {
            let json = node.text().collect::<String>();
            if let Ok(data) = serde_json::from_str::<PostingData>(&json) {
                if defaults.get(keys::CAR).is_empty() {
                    if let Some(name) = data.name {
                        defaults.set(keys::CAR, name.trim());
                    }
                }
                if defaults.get(keys::PRICE).is_empty() {
                    if let Some(price) = data.offers.and_then(|o| o.price) {
                        let price = match price {
                            serde_json::Value::String(s) => s,
                            serde_json::Value::Number(n) => n.to_string(),
                            _ => String::new(),
                        };
                        defaults.set(keys::PRICE, strip_currency(&price));
                    }
                }
            }
        }

        defaults
    }
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn meta_content(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|m| m.value().attr("content"))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn strip_currency(price: &str) -> String {
    price.trim().trim_start_matches('$').trim().to_string()
}

/// Machine timestamp attribute -> "posted <month>/<day>", no zero padding.
fn posted_status(datetime: &str) -> Option<String> {
    let parsed = DateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(datetime))
        .ok()?;
    Some(format!("posted {}/{}", parsed.month(), parsed.day()))
}
