// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod district;
pub mod lookup;

pub use district::{DistrictFeature, DistrictGeometry, Point};
pub use lookup::{classify, Classification, LookupResult};
