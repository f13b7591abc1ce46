// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use district_locator::models::Point;
use district_locator::services::{
    BoundaryStore, GeocodeError, GeocodedLocation, Geocoder,
};
use geojson::{Feature, Geometry, JsonObject, Value};
use std::collections::HashMap;

/// Bundled simplified map of all 38 Texas districts.
#[allow(dead_code)]
pub const TEXAS_DISTRICTS: &str = "data/tx_congressional_districts.geojson";

/// Census-style sample (CD118FP / GEOID schema).
#[allow(dead_code)]
pub const CENSUS_SAMPLE: &str = "tests/fixtures/tx_cd118_sample.geojson";

/// District 8 around The Woodlands, Conroe, and Huntsville.
#[allow(dead_code)]
pub const DISTRICT_8_RING: &[(f64, f64)] = &[
    (-95.9, 31.1),
    (-95.0, 31.1),
    (-94.5, 30.9),
    (-94.5, 30.4),
    (-95.0, 30.0),
    (-95.6, 30.05),
    (-96.0, 30.5),
    (-96.0, 30.9),
    (-95.9, 31.1),
];

/// Build a Polygon feature from `(lng, lat)` vertices and attributes.
#[allow(dead_code)]
pub fn polygon_feature(ring: &[(f64, f64)], properties: serde_json::Value) -> Feature {
    let positions = ring.iter().map(|&(x, y)| vec![x, y]).collect();
    feature(Value::Polygon(vec![positions]), properties)
}

/// Axis-aligned rectangle feature with a `district` attribute.
#[allow(dead_code)]
pub fn rect_feature(district: &str, min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Feature {
    polygon_feature(
        &[
            (min_lng, min_lat),
            (max_lng, min_lat),
            (max_lng, max_lat),
            (min_lng, max_lat),
            (min_lng, min_lat),
        ],
        serde_json::json!({ "district": district }),
    )
}

#[allow(dead_code)]
pub fn feature(value: Value, properties: serde_json::Value) -> Feature {
    let properties: Option<JsonObject> = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    };
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// Store loaded with the district 8 sample plus a disjoint district 1 square.
#[allow(dead_code)]
pub fn district_8_store() -> BoundaryStore {
    let store = BoundaryStore::new();
    store
        .load(
            vec![
                polygon_feature(DISTRICT_8_RING, serde_json::json!({ "district": "8" })),
                rect_feature("1", -94.4, 31.8, -94.0, 32.2),
            ],
            None,
        )
        .expect("Failed to load sample districts");
    store
}

/// Geocoder answering from a fixed table.
#[derive(Default)]
#[allow(dead_code)]
pub struct StubGeocoder {
    pub answers: HashMap<String, GeocodedLocation>,
    pub fail: bool,
}

#[allow(dead_code)]
impl StubGeocoder {
    pub fn with(mut self, address: &str, lat: f64, lng: f64, display_name: &str) -> Self {
        self.answers.insert(
            address.to_string(),
            GeocodedLocation {
                point: Point::new(lat, lng),
                display_name: display_name.to_string(),
            },
        );
        self
    }

    pub fn failing() -> Self {
        Self {
            answers: HashMap::new(),
            fail: true,
        }
    }
}

impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedLocation>, GeocodeError> {
        if self.fail {
            return Err(GeocodeError::Status("HTTP 503: unavailable".to_string()));
        }
        Ok(self.answers.get(address).cloned())
    }
}
