//! Column decoders for record fields.
//!
//! The service sends most numeric columns as JSON strings (`"25544"`) and
//! some as numbers, and uses empty strings or `null` for missing values.
//! These decoders accept either encoding and reject anything that does not
//! parse, so a malformed value fails the record instead of being dropped.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::query::parse_timestamp;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Int(i64),
    Float(f64),
    Text(String),
}

fn non_blank(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub(crate) fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value)),
        Some(Raw::Float(value)) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
            Ok(Some(value as i64))
        }
        Some(Raw::Float(value)) => Err(D::Error::custom(format!(
            "expected an integer, found {}",
            value
        ))),
        Some(Raw::Text(text)) => non_blank(&text)
            .map(|text| {
                text.parse::<i64>()
                    .map_err(|_| D::Error::custom(format!("expected an integer, found '{}'", text)))
            })
            .transpose(),
    }
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value as f64)),
        Some(Raw::Float(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => non_blank(&text)
            .map(|text| {
                text.parse::<f64>()
                    .map_err(|_| D::Error::custom(format!("expected a number, found '{}'", text)))
            })
            .transpose(),
    }
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(value)) => Some(value.to_string()),
        Some(Raw::Float(value)) => Some(value.to_string()),
        Some(Raw::Text(text)) if text.is_empty() => None,
        Some(Raw::Text(text)) => Some(text),
    })
}

pub(crate) fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => non_blank(&text)
            .map(|text| parse_timestamp(text).map_err(D::Error::custom))
            .transpose(),
    }
}

pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => non_blank(&text)
            .map(|text| {
                parse_timestamp(text)
                    .map(|instant| instant.date_naive())
                    .map_err(D::Error::custom)
            })
            .transpose(),
    }
}
