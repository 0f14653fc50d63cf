use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    Http(String),
    Selector(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::Http(msg) => write!(f, "HTTP error: {msg}"),
            ScraperError::Selector(msg) => write!(f, "Bad selector: {msg}"),
        }
    }
}

impl Error for ScraperError {}
