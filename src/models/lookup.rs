// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lookup results handed to the map renderer.

use crate::models::{DistrictFeature, Point};
use crate::services::boundary::BoundarySet;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How a lookup result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Classification {
    /// Inside the campaign's own district
    Highlighted,
    /// Inside some other loaded district
    Other,
    /// Not inside any loaded district
    NotFound,
}

/// Classify a lookup against the highlighted district id.
pub fn classify(district_id: Option<&str>, highlighted: &str) -> Classification {
    match district_id {
        Some(id) if id == highlighted => Classification::Highlighted,
        Some(_) => Classification::Other,
        None => Classification::NotFound,
    }
}

/// Result of one address or point search.
///
/// Replaced on every search; nothing is kept between searches.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LookupResult {
    /// What the user searched for (geocoder display name or input)
    pub label: String,
    pub point: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    pub classification: Classification,
    /// Further districts that also contain the point (overlapping source data)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlapping: Vec<String>,
    #[serde(skip)]
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    matched: Option<(Arc<BoundarySet>, usize)>,
}

impl LookupResult {
    pub(crate) fn new(
        label: String,
        point: Point,
        highlighted: &str,
        matched: Option<(Arc<BoundarySet>, usize)>,
        overlapping: Vec<String>,
    ) -> Self {
        let district_id = matched
            .as_ref()
            .and_then(|(set, idx)| set.features().get(*idx))
            .map(|f| f.district_id.clone());
        let classification = classify(district_id.as_deref(), highlighted);

        Self {
            label,
            point,
            district_id,
            classification,
            overlapping,
            matched,
        }
    }

    /// The loaded feature the point fell in, from the snapshot that was queried.
    pub fn matched_feature(&self) -> Option<&DistrictFeature> {
        self.matched
            .as_ref()
            .and_then(|(set, idx)| set.features().get(*idx))
    }

    pub fn is_found(&self) -> bool {
        self.district_id.is_some()
    }
}
