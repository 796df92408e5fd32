//! Source records consumed by the routing core.
//!
//! Records mirror the documents held by the backing store. Coordinates and
//! radii travel as decimal strings and are parsed straight into
//! [`Decimal`] so no binary floating point is ever involved.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named physical point with an arrival-tolerance radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(with = "decimal_text")]
    pub lat: Decimal,
    #[serde(with = "decimal_text")]
    pub lng: Decimal,
    #[serde(with = "decimal_text")]
    pub alt: Decimal,
    #[serde(with = "decimal_text")]
    pub rad: Decimal,
}

impl Location {
    /// Build a location from the decimal strings stored in the dataset.
    pub fn parse(
        name: impl Into<String>,
        lat: &str,
        lng: &str,
        alt: &str,
        rad: &str,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            lat: parse_decimal("lat", lat)?,
            lng: parse_decimal("lng", lng)?,
            alt: parse_decimal("alt", alt)?,
            rad: parse_decimal("rad", rad)?,
        })
    }

    pub fn position(&self) -> Position {
        Position {
            lat: self.lat,
            lng: self.lng,
            alt: self.alt,
        }
    }
}

/// Walkable connection between two locations with direction-specific text.
///
/// `forward_info` describes travelling `name_a` to `name_b`, `backward_info`
/// the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indication {
    pub name_a: String,
    pub name_b: String,
    pub forward_info: String,
    pub backward_info: String,
}

impl Indication {
    /// Whether this record joins `a` and `b` in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.name_a == a && self.name_b == b) || (self.name_a == b && self.name_b == a)
    }
}

/// Alias name pointing at an underlying location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub of: String,
}

/// Latitude / longitude / altitude triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(with = "decimal_text")]
    pub lat: Decimal,
    #[serde(with = "decimal_text")]
    pub lng: Decimal,
    #[serde(with = "decimal_text")]
    pub alt: Decimal,
}

impl Position {
    pub fn new(lat: Decimal, lng: Decimal, alt: Decimal) -> Self {
        Self { lat, lng, alt }
    }

    /// Parse a position from the decimal strings supplied by a caller.
    pub fn parse(lat: &str, lng: &str, alt: &str) -> Result<Self> {
        Ok(Self {
            lat: parse_decimal("lat", lat)?,
            lng: parse_decimal("lng", lng)?,
            alt: parse_decimal("alt", alt)?,
        })
    }
}

pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::InvalidDecimal {
            field,
            value: value.to_string(),
        })
}

/// Serde adapter keeping coordinates as decimal text.
///
/// Strings and integers are accepted; JSON floats are refused because they
/// have already been rounded to binary floating point by the time they
/// reach the visitor.
mod decimal_text {
    use std::fmt;

    use rust_decimal::Decimal;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(DecimalText)
    }

    struct DecimalText;

    impl<'de> Visitor<'de> for DecimalText {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a decimal string or an integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            super::parse_decimal("coordinate", value).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }
    }
}

/// Render a decimal without trailing zeros, e.g. `3.50` becomes `3.5`.
pub(crate) fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
