// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Address and point lookup.
//!
//! Handles the search flow:
//! 1. Geocode the address (external service)
//! 2. Find the enclosing district in the loaded boundaries
//! 3. Classify it against the highlighted district for presentation

use crate::models::{LookupResult, Point};
use crate::services::boundary::BoundaryStore;
use crate::services::geocoder::{GeocodeError, Geocoder};

/// Outcome of an address search.
#[derive(Debug, Clone)]
pub enum LocateOutcome {
    /// The address was geocoded; the result may still be "not found".
    Resolved(LookupResult),
    /// The geocoder had no match for the address.
    AddressNotFound,
}

/// Resolves addresses and points to districts.
pub struct DistrictLocator<G> {
    boundaries: BoundaryStore,
    geocoder: G,
    highlighted_district: String,
}

impl<G: Geocoder> DistrictLocator<G> {
    pub fn new(boundaries: BoundaryStore, geocoder: G, highlighted_district: String) -> Self {
        Self {
            boundaries,
            geocoder,
            highlighted_district,
        }
    }

    pub fn boundaries(&self) -> &BoundaryStore {
        &self.boundaries
    }

    pub fn highlighted_district(&self) -> &str {
        &self.highlighted_district
    }

    /// Geocode `address` and look up its district.
    pub async fn locate(&self, address: &str) -> Result<LocateOutcome, GeocodeError> {
        tracing::info!(address, "Locating address");

        let Some(location) = self.geocoder.geocode(address).await? else {
            tracing::info!(address, "Address not found by geocoder");
            return Ok(LocateOutcome::AddressNotFound);
        };

        let label = if location.display_name.is_empty() {
            address.to_string()
        } else {
            location.display_name
        };

        Ok(LocateOutcome::Resolved(
            self.locate_point(location.point, label),
        ))
    }

    /// Look up the district containing `point`.
    pub fn locate_point(&self, point: Point, label: impl Into<String>) -> LookupResult {
        let snapshot = self.boundaries.snapshot();
        let position = snapshot.position_for_point(point);

        // Anything after the first match means the source polygons overlap
        let overlapping: Vec<String> = match position {
            Some(idx) => snapshot.features()[idx + 1..]
                .iter()
                .filter(|f| f.contains(point))
                .map(|f| f.district_id.clone())
                .collect(),
            None => Vec::new(),
        };

        let result = LookupResult::new(
            label.into(),
            point,
            &self.highlighted_district,
            position.map(|idx| (snapshot.clone(), idx)),
            overlapping,
        );

        if !result.overlapping.is_empty() {
            tracing::warn!(
                lat = point.lat,
                lng = point.lng,
                district = ?result.district_id,
                overlapping = ?result.overlapping,
                "Point is inside overlapping districts, using first loaded"
            );
        }

        tracing::debug!(
            lat = point.lat,
            lng = point.lng,
            district = ?result.district_id,
            classification = ?result.classification,
            "Lookup complete"
        );

        result
    }
}
