use serde::Deserialize;
use std::collections::HashMap;

/// Best-effort values pulled out of a listing page, keyed by the schema's
/// scrape keys. Produced fresh per URL, consumed once by the composer.
/// Missing fields read back as "".
#[derive(Debug, Default)]
pub struct ScrapedDefaults {
    values: HashMap<String, String>,
}

impl ScrapedDefaults {
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Empty values are not stored; absence and emptiness are the same thing
    /// to the composer.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(key.to_string(), value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ld_posting_data
//  ├── name
//  └── offers
//       └── price        (number or string, site-dependent)

#[derive(Debug, Deserialize)]
pub struct PostingData {
    pub name: Option<String>,
    pub offers: Option<PostingOffer>,
}

#[derive(Debug, Deserialize)]
pub struct PostingOffer {
    pub price: Option<serde_json::Value>,
}
