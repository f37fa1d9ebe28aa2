//! # Location Resolver
//!
//! Turns one acquisition attempt into either a complete [`LocationFix`] or an
//! explicit [`Degradation`]. Three methods are supported:
//!
//! - **GPS**: the client forwards what its device capability reported. A
//!   missing capability or a reading without both coordinates is a degraded
//!   outcome, never an error, so the caller can offer another method.
//! - **Manual**: a coordinate pair typed by the user. Out-of-range values are
//!   rejected outright.
//! - **IP**: a single bounded request to the configured geolocation service.
//!   Every failure mode collapses into [`Degradation::IpLookupFailed`].
//!
//! No function here ever yields a fix with only one coordinate.

pub mod ip;

use common::model::location::{
    CoordinateError, Coordinates, Degradation, GpsReport, LocationFix, LocationMethod, Resolution,
};
use common::requests::ManualLocationRequest;
use ip::IpLocator;
use log::warn;

pub fn resolve_gps(report: GpsReport) -> Resolution {
    let reading = match report {
        GpsReport::Unavailable => return Resolution::Degraded(Degradation::GpsUnavailable),
        GpsReport::Reading(reading) => reading,
    };

    let (Some(latitude), Some(longitude)) = (reading.latitude, reading.longitude) else {
        return Resolution::Degraded(Degradation::GpsDenied);
    };

    match Coordinates::new(latitude, longitude) {
        Ok(coordinates) => Resolution::Resolved(
            LocationFix::at(coordinates, LocationMethod::Gps).with_accuracy(reading.accuracy),
        ),
        Err(errors) => {
            warn!("Discarding GPS reading ({latitude}, {longitude}): {errors:?}");
            Resolution::Degraded(Degradation::GpsInvalidReading)
        }
    }
}

pub fn resolve_manual(request: ManualLocationRequest) -> Result<LocationFix, Vec<CoordinateError>> {
    let coordinates = Coordinates::new(request.latitude, request.longitude)?;
    Ok(LocationFix::at(coordinates, LocationMethod::Manual).with_address(request.address))
}

pub async fn resolve_ip(locator: &IpLocator) -> Resolution {
    match locator.lookup().await {
        Ok(location) => Resolution::Resolved(
            LocationFix::at(location.coordinates, LocationMethod::Ip)
                .with_address(Some(location.address())),
        ),
        Err(e) => {
            warn!("IP geolocation via {} failed: {}", locator.endpoint(), e);
            Resolution::Degraded(Degradation::IpLookupFailed)
        }
    }
}
