// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Address geocoding.
//!
//! Lookups only need a coordinate and a label, so the geocoder sits behind
//! a small trait. [`NominatimGeocoder`] talks to OpenStreetMap's Nominatim
//! search API, which needs no API key but does require a real User-Agent.

use crate::models::Point;
use serde::Deserialize;
use std::future::Future;

/// A geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub point: Point,
    /// Human-readable name of the match
    pub display_name: String,
}

/// Turns a free-text address into a coordinate.
pub trait Geocoder {
    /// Geocode `address`. `Ok(None)` means the service found no match.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<GeocodedLocation>, GeocodeError>> + Send;
}

/// Nominatim search API client.
#[derive(Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
    region_suffix: String,
}

impl NominatimGeocoder {
    /// Create a client for the Nominatim instance at `base_url`.
    ///
    /// `region_suffix` is appended to every query (e.g. ", Texas, USA") to
    /// keep matches in the mapped area.
    pub fn new(
        base_url: &str,
        region_suffix: &str,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            region_suffix: region_suffix.to_string(),
        })
    }

    fn query_for(&self, address: &str) -> String {
        format!("{}{}", address.trim(), self.region_suffix)
    }
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedLocation>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let query = self.query_for(address);

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("limit", "1"), ("q", query.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Nominatim rate limit hit (429)");
            }

            return Err(GeocodeError::Status(format!("HTTP {}: {}", status, body)));
        }

        let hits: Vec<NominatimHit> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(format!("JSON parse error: {}", e)))?;

        hits.into_iter().next().map(NominatimHit::into_location).transpose()
    }
}

/// One entry of a Nominatim search response.
///
/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
pub struct NominatimHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

impl NominatimHit {
    pub fn into_location(self) -> Result<GeocodedLocation, GeocodeError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodeError::Parse(format!("invalid latitude: {}", self.lat)))?;
        let lng: f64 = self
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodeError::Parse(format!("invalid longitude: {}", self.lon)))?;

        Ok(GeocodedLocation {
            point: Point::new(lat, lng),
            display_name: self.display_name,
        })
    }
}

/// Errors from geocoding.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoder returned an error: {0}")]
    Status(String),

    #[error("Invalid geocoder response: {0}")]
    Parse(String),
}
