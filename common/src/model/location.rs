//! Location value objects shared by every contribution shape.
//!
//! A [`LocationFix`] either carries a full [`Coordinates`] pair or none at all.
//! On the wire the pair is flattened into `latitude` / `longitude` keys; the
//! conversion from [`RawLocationFix`] refuses payloads that set only one of
//! them or that fall outside the legal ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Latitude must be between -90 and 90 (got {0})")]
    LatitudeOutOfRange(f64),
    #[error("Longitude must be between -180 and 180 (got {0})")]
    LongitudeOutOfRange(f64),
    #[error("Latitude and longitude must be provided together")]
    HalfSpecified,
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validates both values against their ranges. Out-of-range or non-finite
    /// input is rejected rather than clamped; both errors are reported when
    /// both values are wrong, latitude first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Vec<CoordinateError>> {
        let mut errors = Vec::new();
        if !in_range(latitude, LATITUDE_RANGE) {
            errors.push(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !in_range(longitude, LONGITUDE_RANGE) {
            errors.push(CoordinateError::LongitudeOutOfRange(longitude));
        }
        if errors.is_empty() {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(errors)
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Map previews skip the exact (0, 0) point. Storage does not.
    pub fn is_map_renderable(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    pub fn to_point(self) -> MapPoint {
        MapPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// How a fix was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationMethod {
    #[serde(rename = "GPS")]
    Gps,
    Manual,
    #[serde(rename = "IP")]
    Ip,
}

impl fmt::Display for LocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LocationMethod::Gps => "GPS",
            LocationMethod::Manual => "Manual",
            LocationMethod::Ip => "IP",
        };
        f.write_str(label)
    }
}

/// Location attached to a submission or read back from storage.
///
/// `LocationFix::default()` is the "not yet set" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocationFix", into = "RawLocationFix")]
pub struct LocationFix {
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
    /// Reported accuracy radius in meters.
    pub accuracy: Option<f64>,
    pub method: Option<LocationMethod>,
}

impl LocationFix {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn at(coordinates: Coordinates, method: LocationMethod) -> Self {
        Self {
            coordinates: Some(coordinates),
            address: None,
            accuracy: None,
            method: Some(method),
        }
    }

    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        self
    }

    pub fn with_accuracy(mut self, accuracy: Option<f64>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn is_set(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude())
    }

    /// Point to hand to a map preview, if any.
    pub fn preview(&self) -> Option<MapPoint> {
        self.coordinates
            .filter(Coordinates::is_map_renderable)
            .map(Coordinates::to_point)
    }
}

/// Flat JSON form of a [`LocationFix`]. Requests carry this form so that
/// coordinate problems can be reported next to other validation errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLocationFix {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub method: Option<LocationMethod>,
}

impl RawLocationFix {
    /// Checks the pair, returning every coordinate problem found.
    pub fn into_fix(self) -> Result<LocationFix, Vec<CoordinateError>> {
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)?),
            (None, None) => None,
            _ => return Err(vec![CoordinateError::HalfSpecified]),
        };
        Ok(LocationFix {
            coordinates,
            address: None,
            accuracy: self.accuracy,
            method: self.method,
        }
        .with_address(self.address))
    }
}

impl TryFrom<RawLocationFix> for LocationFix {
    type Error = CoordinateError;

    fn try_from(raw: RawLocationFix) -> Result<Self, Self::Error> {
        raw.into_fix().map_err(|mut errors| errors.remove(0))
    }
}

impl From<LocationFix> for RawLocationFix {
    fn from(fix: LocationFix) -> Self {
        RawLocationFix {
            latitude: fix.latitude(),
            longitude: fix.longitude(),
            address: fix.address,
            accuracy: fix.accuracy,
            method: fix.method,
        }
    }
}

/// A bare point for map rendering surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the client's device GPS capability reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GpsReport {
    /// The runtime has no geolocation capability at all.
    Unavailable,
    Reading(GpsReading),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsReading {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// Why a resolution attempt did not produce a fix. These are expected states;
/// each one carries the prompt shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    GpsUnavailable,
    GpsDenied,
    GpsInvalidReading,
    IpLookupFailed,
}

impl Degradation {
    pub fn prompt(&self) -> &'static str {
        match self {
            Degradation::GpsUnavailable => {
                "GPS location is not available on this device. Please use manual entry or IP-based location."
            }
            Degradation::GpsDenied => {
                "Location access failed. Please allow location access in your browser settings, reload the page, or enter your location manually."
            }
            Degradation::GpsInvalidReading => {
                "The device reported an invalid position. Please try again or enter your location manually."
            }
            Degradation::IpLookupFailed => {
                "Could not detect location from IP. Please use manual entry."
            }
        }
    }
}

/// Outcome of one location acquisition attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(LocationFix),
    Degraded(Degradation),
}

impl Resolution {
    pub fn fix(&self) -> Option<&LocationFix> {
        match self {
            Resolution::Resolved(fix) => Some(fix),
            Resolution::Degraded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_fix_reports_every_coordinate_problem() {
        let raw = RawLocationFix {
            latitude: Some(95.0),
            longitude: Some(-181.0),
            ..Default::default()
        };
        assert_eq!(
            raw.into_fix().unwrap_err(),
            vec![
                CoordinateError::LatitudeOutOfRange(95.0),
                CoordinateError::LongitudeOutOfRange(-181.0),
            ]
        );

        let half = RawLocationFix {
            longitude: Some(80.0),
            ..Default::default()
        };
        assert_eq!(half.into_fix().unwrap_err(), vec![CoordinateError::HalfSpecified]);

        let fix = RawLocationFix {
            latitude: Some(13.0827),
            longitude: Some(80.2707),
            address: Some("  Mylapore ".into()),
            ..Default::default()
        }
        .into_fix()
        .unwrap();
        assert_eq!(fix.address.as_deref(), Some("Mylapore"));
        assert!(fix.is_set());
    }

    #[test]
    fn coordinates_accept_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn coordinates_reject_out_of_range_without_clamping() {
        let errors = Coordinates::new(90.5, -181.0).unwrap_err();
        assert_eq!(
            errors,
            vec![
                CoordinateError::LatitudeOutOfRange(90.5),
                CoordinateError::LongitudeOutOfRange(-181.0)
            ]
        );
        assert!(Coordinates::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn zero_point_is_set_but_not_previewed() {
        let fix = LocationFix::at(Coordinates::new(0.0, 0.0).unwrap(), LocationMethod::Manual);
        assert!(fix.is_set());
        assert_eq!(fix.preview(), None);

        let fix = LocationFix::at(Coordinates::new(0.0, 12.5).unwrap(), LocationMethod::Manual);
        assert!(fix.preview().is_some());
    }

    #[test]
    fn json_rejects_half_specified_fix() {
        let err = serde_json::from_value::<LocationFix>(json!({ "latitude": 13.0 })).unwrap_err();
        assert!(err.to_string().contains("provided together"));

        let fix: LocationFix = serde_json::from_value(json!({})).unwrap();
        assert_eq!(fix, LocationFix::unset());
    }

    #[test]
    fn json_uses_flat_keys_and_method_tags() {
        let fix = LocationFix::at(Coordinates::new(13.0827, 80.2707).unwrap(), LocationMethod::Ip)
            .with_address(Some("Chennai, Tamil Nadu, India".into()));
        let value = serde_json::to_value(&fix).unwrap();
        assert_eq!(value["latitude"], json!(13.0827));
        assert_eq!(value["longitude"], json!(80.2707));
        assert_eq!(value["method"], json!("IP"));

        let back: LocationFix = serde_json::from_value(value).unwrap();
        assert_eq!(back, fix);
    }

    #[test]
    fn blank_address_is_dropped() {
        let fix = LocationFix::unset().with_address(Some("   ".into()));
        assert_eq!(fix.address, None);
    }

    #[test]
    fn gps_report_is_tagged() {
        let report: GpsReport = serde_json::from_value(json!({
            "status": "reading",
            "latitude": 10.0,
            "longitude": 20.0,
            "accuracy": 15.0
        }))
        .unwrap();
        assert_eq!(
            report,
            GpsReport::Reading(GpsReading {
                latitude: Some(10.0),
                longitude: Some(20.0),
                accuracy: Some(15.0),
            })
        );
        let report: GpsReport = serde_json::from_value(json!({ "status": "unavailable" })).unwrap();
        assert_eq!(report, GpsReport::Unavailable);
    }
}
