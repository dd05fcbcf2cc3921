//! Travel modes and route endpoints shared by recognizers and commands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel mode selecting a routing profile.
///
/// Each mode carries the host routing code. Route construction compares the
/// codes against two different thresholds, so the numbering is part of the
/// observable behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterType {
    /// Car routing.
    Vehicle,
    /// Walking routing.
    Pedestrian,
    /// Cycling routing.
    Bicycle,
    /// Public transport routing.
    Transit,
    /// No explicit mode requested.
    #[default]
    Unspecified,
}

impl RouterType {
    /// Decodes a lowercase token; anything unknown is [`Self::Unspecified`].
    ///
    /// # Example
    ///
    /// ```
    /// use omaps_intent::RouterType;
    ///
    /// assert_eq!(RouterType::from_token("bicycle"), RouterType::Bicycle);
    /// assert_eq!(RouterType::from_token("Bicycle"), RouterType::Unspecified);
    /// assert_eq!(RouterType::from_token(""), RouterType::Unspecified);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "vehicle" => Self::Vehicle,
            "pedestrian" => Self::Pedestrian,
            "bicycle" => Self::Bicycle,
            "transit" => Self::Transit,
            _ => Self::Unspecified,
        }
    }

    /// Returns the host routing code; `-1` for [`Self::Unspecified`].
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Vehicle => 0,
            Self::Pedestrian => 1,
            Self::Bicycle => 2,
            Self::Transit => 3,
            Self::Unspecified => -1,
        }
    }

    /// Returns the canonical token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Pedestrian => "pedestrian",
            Self::Bicycle => "bicycle",
            Self::Transit => "transit",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for RouterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Display name; empty when the caller supplied none.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl RoutePoint {
    /// Creates a route point.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// A latitude/longitude pair carried by persisted commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Converts coordinates and an optional address into a route point.
///
/// Absent or empty addresses become an empty name.
#[must_use]
pub fn route_point(coordinates: Coordinates, address: Option<&str>) -> RoutePoint {
    RoutePoint::new(address.unwrap_or_default(), coordinates.lat, coordinates.lon)
}
