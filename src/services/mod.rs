// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - district lookup logic.

pub mod boundary;
pub mod geocoder;
pub mod lookup;
pub mod presentation;
pub mod resolver;

pub use boundary::{BoundaryError, BoundarySet, BoundaryStore, LoadReport};
pub use geocoder::{GeocodeError, GeocodedLocation, Geocoder, NominatimGeocoder};
pub use lookup::{DistrictLocator, LocateOutcome};
pub use resolver::{normalize_district_id, resolve_district_id, ResolveError};
