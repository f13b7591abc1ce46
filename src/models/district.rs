// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District boundary model and geometry handling.

use crate::geometry::point_in_polygon;
use geo::{MultiPolygon, Polygon};
use geojson::JsonObject;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Attribute keys that carry a human-readable district name.
const NAME_FIELDS: &[&str] = &["NAMELSAD", "name", "NAME"];

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(p: Point) -> Self {
        geo::Coord { x: p.lng, y: p.lat }
    }
}

/// A congressional district with its boundary geometry.
#[derive(Debug, Clone)]
pub struct DistrictFeature {
    /// Canonical district id (e.g., "8"), never empty
    pub district_id: String,
    /// Boundary geometry (can be Polygon or MultiPolygon)
    pub geometry: DistrictGeometry,
    /// Attributes as they appeared in the source data
    pub raw_attributes: JsonObject,
}

impl DistrictFeature {
    /// Name to show for this district.
    ///
    /// Uses the source's own name attribute when it has one.
    pub fn display_name(&self) -> String {
        NAME_FIELDS
            .iter()
            .filter_map(|key| self.raw_attributes.get(*key))
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Congressional District {}", self.district_id))
    }

    /// Check if this district's outer boundary contains `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.geometry.contains(point)
    }
}

/// District geometry - either a simple polygon or multi-polygon.
///
/// Only outer rings take part in containment; holes are ignored.
#[derive(Debug, Clone)]
pub enum DistrictGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl DistrictGeometry {
    /// Check if a point falls inside any outer ring of this geometry.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            DistrictGeometry::Polygon(p) => point_in_polygon(point, &p.exterior().0),
            DistrictGeometry::MultiPolygon(mp) => mp
                .0
                .iter()
                .any(|p| point_in_polygon(point, &p.exterior().0)),
        }
    }

    /// The outer ring used for label placement.
    pub fn primary_ring(&self) -> Option<&geo::LineString<f64>> {
        match self {
            DistrictGeometry::Polygon(p) => Some(p.exterior()),
            DistrictGeometry::MultiPolygon(mp) => mp.0.first().map(|p| p.exterior()),
        }
    }
}
