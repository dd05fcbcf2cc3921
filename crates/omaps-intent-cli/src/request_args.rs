//! Command-line encodings of request extras and positions.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use omaps_intent::{Coordinates, ExtraValue};
use thiserror::Error;

/// A `key=type:value` extra supplied on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExtraArg {
    pub(crate) key: String,
    pub(crate) value: ExtraValue,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ExtraArgError {
    #[error("expected KEY=TYPE:VALUE, got '{0}'")]
    Shape(String),
    #[error("unknown extra type '{0}' (expected string, double, float, long or bool)")]
    UnknownType(String),
    #[error("invalid number '{value}': {source}")]
    Float {
        value: String,
        source: ParseFloatError,
    },
    #[error("invalid integer '{value}': {source}")]
    Integer {
        value: String,
        source: ParseIntError,
    },
    #[error("invalid flag '{value}': {source}")]
    Flag {
        value: String,
        source: ParseBoolError,
    },
    #[error("expected LAT,LON, got '{0}'")]
    Position(String),
}

/// Parses `key=type:value`.
pub(crate) fn parse_extra(raw: &str) -> Result<ExtraArg, ExtraArgError> {
    let (key, typed) = raw
        .split_once('=')
        .ok_or_else(|| ExtraArgError::Shape(raw.to_owned()))?;
    let (kind, value) = typed
        .split_once(':')
        .ok_or_else(|| ExtraArgError::Shape(raw.to_owned()))?;
    if key.is_empty() {
        return Err(ExtraArgError::Shape(raw.to_owned()));
    }

    let parsed = match kind {
        "string" => ExtraValue::Text(value.to_owned()),
        "double" => ExtraValue::Double(parse_float(value)?),
        "float" => ExtraValue::Float(parse_float(value)?),
        "long" => ExtraValue::Long(value.parse().map_err(|source| ExtraArgError::Integer {
            value: value.to_owned(),
            source,
        })?),
        "bool" => ExtraValue::Bool(value.parse().map_err(|source| ExtraArgError::Flag {
            value: value.to_owned(),
            source,
        })?),
        other => return Err(ExtraArgError::UnknownType(other.to_owned())),
    };

    Ok(ExtraArg {
        key: key.to_owned(),
        value: parsed,
    })
}

/// Parses a `LAT,LON` device position.
pub(crate) fn parse_position(raw: &str) -> Result<Coordinates, ExtraArgError> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| ExtraArgError::Position(raw.to_owned()))?;
    Ok(Coordinates::new(
        parse_float(lat.trim())?,
        parse_float(lon.trim())?,
    ))
}

fn parse_float<T>(value: &str) -> Result<T, ExtraArgError>
where
    T: std::str::FromStr<Err = ParseFloatError>,
{
    value.parse().map_err(|source| ExtraArgError::Float {
        value: value.to_owned(),
        source,
    })
}
