// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Styling and labels for the district map renderer.

use crate::geometry::centroid_of_ring;
use crate::models::{Classification, DistrictGeometry, LookupResult, Point};
use crate::services::boundary::BoundarySet;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Fill for the highlighted district and its search marker.
pub const HIGHLIGHT_COLOR: &str = "#C41E3A";
/// Marker color for addresses in other districts.
pub const OTHER_MARKER_COLOR: &str = "#4B5563";
/// Marker color for addresses outside every loaded district.
pub const NOT_FOUND_MARKER_COLOR: &str = "#9CA3AF";

const STROKE_COLOR: &str = "#333";

/// Alternating light greys so neighbouring districts stay distinguishable.
const DISTRICT_PALETTE: [&str; 8] = [
    "#f7f7f7", "#e8e8e8", "#f0f0f0", "#fafafa", "#f5f5f5", "#ebebeb", "#f2f2f2", "#fcfcfc",
];

/// Polygon style for one district layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistrictStyle {
    pub fill_color: String,
    pub fill_opacity: f64,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

/// Style a district polygon.
pub fn district_style(district_id: &str, highlighted: &str) -> DistrictStyle {
    if district_id == highlighted {
        return DistrictStyle {
            fill_color: HIGHLIGHT_COLOR.to_string(),
            fill_opacity: 0.6,
            color: STROKE_COLOR.to_string(),
            weight: 3.0,
            opacity: 1.0,
        };
    }

    let slot = district_id.parse::<usize>().unwrap_or(0) % DISTRICT_PALETTE.len();
    DistrictStyle {
        fill_color: DISTRICT_PALETTE[slot].to_string(),
        fill_opacity: 0.25,
        color: STROKE_COLOR.to_string(),
        weight: 1.5,
        opacity: 1.0,
    }
}

/// Text label placed over a district.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistrictLabel {
    pub district_id: String,
    pub position: Point,
    pub highlighted: bool,
}

/// One label per district, at the vertex mean of its first outer ring.
///
/// Districts with an empty ring get no label.
pub fn district_labels(set: &BoundarySet, highlighted: &str) -> Vec<DistrictLabel> {
    set.features()
        .iter()
        .filter_map(|f| {
            let ring = f.geometry.primary_ring()?;
            let position = centroid_of_ring(&ring.0)?;
            Some(DistrictLabel {
                district_id: f.district_id.clone(),
                position,
                highlighted: f.district_id == highlighted,
            })
        })
        .collect()
}

/// District ids in numeric order, for the sidebar list.
pub fn sorted_district_ids(set: &BoundarySet) -> Vec<String> {
    let mut ids: Vec<String> = set.features().iter().map(|f| f.district_id.clone()).collect();
    // Ids are digit strings without leading zeros
    ids.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    ids
}

/// Search marker for a lookup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Marker {
    pub position: Point,
    pub color: String,
    /// Short text on the marker (district number, or "?")
    pub label: String,
    pub popup: String,
}

/// Build the search marker shown for `result`.
pub fn marker_for(result: &LookupResult) -> Marker {
    let (color, label, popup) = match (&result.classification, &result.district_id) {
        (Classification::Highlighted, Some(id)) => (
            HIGHLIGHT_COLOR,
            id.clone(),
            format!(
                "{} is in Congressional District {}, our district!",
                result.label, id
            ),
        ),
        (Classification::Other, Some(id)) => (
            OTHER_MARKER_COLOR,
            id.clone(),
            format!("{} is in Congressional District {}.", result.label, id),
        ),
        _ => (
            NOT_FOUND_MARKER_COLOR,
            "?".to_string(),
            format!(
                "{} is not inside any mapped congressional district.",
                result.label
            ),
        ),
    };

    Marker {
        position: result.point,
        color: color.to_string(),
        label,
        popup,
    }
}

/// GeoJSON of the loaded districts with style properties attached.
///
/// Each feature carries `district`, `name`, `highlighted`, `style`, and
/// `labelPosition` (when one can be computed).
pub fn styled_feature_collection(set: &BoundarySet, highlighted: &str) -> FeatureCollection {
    let features = set
        .features()
        .iter()
        .map(|f| {
            let mut properties = JsonObject::new();
            properties.insert("district".to_string(), f.district_id.clone().into());
            properties.insert("name".to_string(), f.display_name().into());
            properties.insert(
                "highlighted".to_string(),
                (f.district_id == highlighted).into(),
            );
            if let Ok(style) = serde_json::to_value(district_style(&f.district_id, highlighted)) {
                properties.insert("style".to_string(), style);
            }
            let label = f
                .geometry
                .primary_ring()
                .and_then(|ring| centroid_of_ring(&ring.0));
            if let Some(position) = label.and_then(|p| serde_json::to_value(p).ok()) {
                properties.insert("labelPosition".to_string(), position);
            }

            let geometry = match &f.geometry {
                DistrictGeometry::Polygon(p) => Geometry::new(geojson::Value::from(p)),
                DistrictGeometry::MultiPolygon(mp) => Geometry::new(geojson::Value::from(mp)),
            };

            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
