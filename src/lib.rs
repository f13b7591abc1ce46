// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! District locator: find which congressional district an address is in
//!
//! This crate loads district boundary polygons (GeoJSON from hand-drawn
//! maps or Census exports), resolves each feature's district number, and
//! answers point-in-district lookups for the campaign map.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod services;
