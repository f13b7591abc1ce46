// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District boundary loading and point lookup.
//!
//! The store holds one immutable [`BoundarySet`] behind an `Arc`. Loading
//! builds a complete new set and swaps it in, so a lookup that already took
//! a snapshot keeps answering from the old set.

use crate::models::{DistrictFeature, DistrictGeometry, Point};
use crate::services::resolver::{resolve_district_id, ResolveError};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the currently loaded district boundaries.
///
/// Cloning is cheap and every clone sees the same loaded set.
#[derive(Default, Clone)]
pub struct BoundaryStore {
    current: Arc<RwLock<Arc<BoundarySet>>>,
}

impl BoundaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded set with `features`.
    ///
    /// On error the previous set stays in place.
    pub fn load(
        &self,
        features: Vec<Feature>,
        preferred_field: Option<&str>,
    ) -> Result<LoadReport, BoundaryError> {
        let (set, report) = BoundarySet::from_features(features, preferred_field)?;
        self.replace(set);
        Ok(report)
    }

    /// Load districts from a GeoJSON string.
    pub fn load_from_json(
        &self,
        json_data: &str,
        preferred_field: Option<&str>,
    ) -> Result<LoadReport, BoundaryError> {
        self.load(parse_features(json_data)?, preferred_field)
    }

    /// Load districts from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        preferred_field: Option<&str>,
    ) -> Result<LoadReport, BoundaryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| BoundaryError::IoError(e.to_string()))?;
        self.load_from_json(&json_data, preferred_field)
    }

    /// Download a GeoJSON FeatureCollection and load it.
    pub async fn fetch_from_url(
        &self,
        http: &reqwest::Client,
        url: &str,
        preferred_field: Option<&str>,
    ) -> Result<LoadReport, BoundaryError> {
        tracing::info!(url, "Fetching district boundaries");

        let response = http
            .get(url)
            .send()
            .await
            .map_err(|e| BoundaryError::FetchError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BoundaryError::FetchError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BoundaryError::FetchError(e.to_string()))?;
        self.load_from_json(&body, preferred_field)
    }

    /// Swap in an already built set.
    pub fn replace(&self, set: BoundarySet) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(set);
    }

    /// The set currently in use.
    pub fn snapshot(&self) -> Arc<BoundarySet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Id of the first loaded district containing `point`.
    pub fn find_district_for_point(&self, point: Point) -> Option<String> {
        self.snapshot()
            .find_district_for_point(point)
            .map(|f| f.district_id.clone())
    }
}

/// An ordered, immutable collection of district features.
#[derive(Debug, Default)]
pub struct BoundarySet {
    features: Vec<DistrictFeature>,
}

impl BoundarySet {
    /// Build a set from GeoJSON features, resolving district ids.
    ///
    /// Features without a usable id (or repeating an earlier id) are left
    /// out and listed in the report. Broken geometry fails the whole load.
    pub fn from_features(
        features: Vec<Feature>,
        preferred_field: Option<&str>,
    ) -> Result<(Self, LoadReport), BoundaryError> {
        let mut loaded = Vec::with_capacity(features.len());
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (index, feature) in features.into_iter().enumerate() {
            let geometry = match feature.geometry {
                Some(geom) => convert_geometry(index, geom.value)?,
                None => return Err(BoundaryError::MissingGeometry { index }),
            };
            let raw_attributes = feature.properties.unwrap_or_default();

            let district_id = match resolve_district_id(&raw_attributes, preferred_field) {
                Ok(id) => id,
                Err(ResolveError::NoDistrictField) => {
                    tracing::warn!(index, "Skipping feature with no district id");
                    skipped.push(SkippedFeature {
                        index,
                        district_id: None,
                        reason: SkipReason::MissingDistrictId,
                    });
                    continue;
                }
            };

            if !seen.insert(district_id.clone()) {
                tracing::warn!(index, district = %district_id, "Skipping duplicate district");
                skipped.push(SkippedFeature {
                    index,
                    district_id: Some(district_id),
                    reason: SkipReason::DuplicateDistrictId,
                });
                continue;
            }

            loaded.push(DistrictFeature {
                district_id,
                geometry,
                raw_attributes,
            });
        }

        tracing::info!(
            count = loaded.len(),
            skipped = skipped.len(),
            "Loaded district boundaries"
        );

        let report = LoadReport {
            loaded: loaded.len(),
            skipped,
        };
        Ok((Self { features: loaded }, report))
    }

    /// Get the loaded districts in source order.
    pub fn features(&self) -> &[DistrictFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Get a district by its canonical id.
    pub fn get(&self, district_id: &str) -> Option<&DistrictFeature> {
        self.features.iter().find(|f| f.district_id == district_id)
    }

    /// First district, in load order, whose outer boundary contains `point`.
    ///
    /// Districts should never overlap. If the source data has overlaps
    /// anyway, the one loaded first wins; see [`Self::matches_for_point`] to
    /// detect that case.
    pub fn find_district_for_point(&self, point: Point) -> Option<&DistrictFeature> {
        self.features.iter().find(|f| f.contains(point))
    }

    /// Index of the first matching district.
    pub fn position_for_point(&self, point: Point) -> Option<usize> {
        self.features.iter().position(|f| f.contains(point))
    }

    /// Every district containing `point`, in load order.
    pub fn matches_for_point(&self, point: Point) -> Vec<&DistrictFeature> {
        self.features.iter().filter(|f| f.contains(point)).collect()
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Number of districts now available for lookup
    pub loaded: usize,
    /// Features left out, in source order
    pub skipped: Vec<SkippedFeature>,
}

/// A source feature that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFeature {
    /// Position in the source FeatureCollection
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingDistrictId,
    DuplicateDistrictId,
}

/// Parse a GeoJSON document into its features.
fn parse_features(json_data: &str) -> Result<Vec<Feature>, BoundaryError> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| BoundaryError::ParseError(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::Geometry(_) => Err(BoundaryError::NotFeatureCollection),
    }
}

/// Convert GeoJSON geometry to our internal format.
fn convert_geometry(index: usize, value: geojson::Value) -> Result<DistrictGeometry, BoundaryError> {
    match value {
        geojson::Value::Polygon(rings) => Ok(DistrictGeometry::Polygon(convert_polygon(
            index, &rings,
        )?)),
        geojson::Value::MultiPolygon(polygons) => {
            let polygons = polygons
                .iter()
                .map(|rings| convert_polygon(index, rings))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DistrictGeometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        _ => Err(BoundaryError::UnsupportedGeometry { index }),
    }
}

fn convert_polygon(index: usize, rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, BoundaryError> {
    let mut rings = rings.iter().map(|ring| convert_ring(index, ring));
    let exterior = rings
        .next()
        .ok_or(BoundaryError::MalformedGeometry { index })??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn convert_ring(index: usize, ring: &[Vec<f64>]) -> Result<LineString<f64>, BoundaryError> {
    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(BoundaryError::MalformedGeometry { index }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

/// Errors from boundary loading.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to fetch boundaries: {0}")]
    FetchError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Expected a FeatureCollection of district boundaries")]
    NotFeatureCollection,

    #[error("Feature {index} has no geometry")]
    MissingGeometry { index: usize },

    #[error("Feature {index} has unsupported geometry type (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry { index: usize },

    #[error("Feature {index} has a polygon without rings or a position without coordinates")]
    MalformedGeometry { index: usize },
}
