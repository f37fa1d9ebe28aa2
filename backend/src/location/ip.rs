//! Client for the third-party IP geolocation service.

use common::model::location::{CoordinateError, Coordinates};
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Location reported for the caller's public IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct IpLocation {
    pub coordinates: Coordinates,
    pub city: String,
    pub region: String,
    pub country: String,
}

impl IpLocation {
    /// Address line in the form "city, region, country".
    pub fn address(&self) -> String {
        format!("{}, {}, {}", self.city, self.region, self.country)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IpLookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("coordinates out of range: {0}")]
    OutOfRange(CoordinateError),
}

/// Fields we rely on from the lookup body. Anything else is ignored; a body
/// without all of these is malformed.
#[derive(Debug, Deserialize)]
struct LookupBody {
    latitude: f64,
    longitude: f64,
    city: String,
    region: String,
    country_name: String,
}

pub struct IpLocator {
    http_client: reqwest::Client,
    endpoint: String,
}

impl IpLocator {
    /// Builds a locator whose every request is bounded by `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("heritage-hub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn lookup(&self) -> Result<IpLocation, IpLookupError> {
        debug!("IP geolocation lookup via {}", self.endpoint);
        let response = self.http_client.get(&self.endpoint).send().await?;

        if response.status() != StatusCode::OK {
            return Err(IpLookupError::Status(response.status()));
        }

        let bytes = response.bytes().await?;
        let body: LookupBody = serde_json::from_slice(&bytes)
            .map_err(|e| IpLookupError::Malformed(e.to_string()))?;

        let coordinates = Coordinates::new(body.latitude, body.longitude)
            .map_err(|mut errors| IpLookupError::OutOfRange(errors.remove(0)))?;

        Ok(IpLocation {
            coordinates,
            city: body.city,
            region: body.region,
            country: body.country_name,
        })
    }
}
