// src/domain/schema.rs

/// Keys the page analyzer writes scraped defaults under. Shared with the
/// schema below so the two sides cannot drift apart.
pub mod keys {
    pub const CAR: &str = "car";
    pub const MILEAGE: &str = "mileage";
    pub const PRICE: &str = "price";
    pub const LINK: &str = "link";
    pub const DRIVE: &str = "drive";
    pub const ENGINE: &str = "engine";
    pub const VIN: &str = "vin";
    pub const ACCIDENTS: &str = "accidents";
    pub const CONDITION: &str = "condition";
    pub const LOCATION: &str = "location";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const STATUS: &str = "status";
}

/// How a field's value is gathered from the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// One-line prompt, scraped default shown inline.
    Prompt,
    /// External editor session for values that span lines (hours, address).
    Editor,
    /// No interaction; the scraped value (or "") is taken verbatim.
    Scraped,
    /// One-line prompt whose non-empty result becomes a hyperlink cell.
    Hyperlink,
}

pub struct FieldSpec {
    /// Column header in the spreadsheet.
    pub header: &'static str,
    /// Label shown at the prompt.
    pub label: &'static str,
    /// Key into the scraped defaults, if the page analyzer can pre-fill this.
    pub scrape_key: Option<&'static str>,
    pub input: Input,
}

pub const COLUMN_COUNT: usize = 20;

/// The fixed sheet schema. Column order and count must match the header row
/// of the backing file, so new fields go at the end or not at all.
pub const SCHEMA: [FieldSpec; COLUMN_COUNT] = [
    FieldSpec {
        header: "Car",
        label: "year and model",
        scrape_key: Some(keys::CAR),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Mileage",
        label: "mileage",
        scrape_key: Some(keys::MILEAGE),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Price",
        label: "price",
        scrape_key: Some(keys::PRICE),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Link",
        label: "link",
        scrape_key: Some(keys::LINK),
        input: Input::Hyperlink,
    },
    FieldSpec {
        header: "Drive",
        label: "drive",
        scrape_key: Some(keys::DRIVE),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Engine",
        label: "engine",
        scrape_key: Some(keys::ENGINE),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "VIN",
        label: "VIN",
        scrape_key: Some(keys::VIN),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "MPG",
        label: "MPG",
        scrape_key: None,
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Accidents/Damage/Title",
        label: "accidents/damage/title",
        scrape_key: Some(keys::ACCIDENTS),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Condition",
        label: "condition",
        scrape_key: Some(keys::CONDITION),
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Company",
        label: "company/person",
        scrape_key: None,
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Website",
        label: "website",
        scrape_key: None,
        input: Input::Hyperlink,
    },
    FieldSpec {
        header: "Location",
        label: "address",
        scrape_key: Some(keys::LOCATION),
        input: Input::Editor,
    },
    FieldSpec {
        header: "Latitude",
        label: "latitude",
        scrape_key: Some(keys::LATITUDE),
        input: Input::Scraped,
    },
    FieldSpec {
        header: "Longitude",
        label: "longitude",
        scrape_key: Some(keys::LONGITUDE),
        input: Input::Scraped,
    },
    FieldSpec {
        header: "Hours",
        label: "hours",
        scrape_key: None,
        input: Input::Editor,
    },
    FieldSpec {
        header: "Contact",
        label: "contact",
        scrape_key: None,
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Phone",
        label: "phone",
        scrape_key: None,
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Email",
        label: "email",
        scrape_key: None,
        input: Input::Prompt,
    },
    FieldSpec {
        header: "Status",
        label: "status",
        scrape_key: Some(keys::STATUS),
        input: Input::Prompt,
    },
];
