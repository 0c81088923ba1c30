//! Calendar-date wire format.
//!
//! Date-typed entity fields travel as `YYYY-MM-DD` strings and are held as
//! [`NaiveDate`] in memory. Absent dates stay absent in both directions.

use chrono::NaiveDate;
use thiserror::Error;

/// Format used for every date field on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
#[error("Invalid date '{raw}', expected YYYY-MM-DD: {source}")]
pub struct DateParseError {
    raw: String,
    #[source]
    source: chrono::ParseError,
}

/// Convert an in-memory date to its wire representation.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a wire date back into memory.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|source| DateParseError {
        raw: raw.to_string(),
        source,
    })
}

/// Serde adapter for `Option<NaiveDate>` fields.
///
/// Use together with `default` so a missing field deserializes to `None`:
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "Option::is_none", with = "qacm_shared::date::optional")]
/// pub creation_date: Option<NaiveDate>,
/// ```
pub mod optional {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| super::parse_date(&value))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
