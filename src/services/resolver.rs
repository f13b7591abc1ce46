// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District id resolution across boundary data schemas.
//!
//! Boundary files disagree on where the district number lives: hand-drawn
//! maps use `district`, Census TIGER exports use `CD118FP` (or the field for
//! whichever Congress they describe), and some only carry a combined
//! `GEOID` of state FIPS + district. Everything is normalized to the plain
//! decimal number as a string ("08" -> "8").
//!
//! Census placeholder codes such as `ZZ` (no district defined, usually
//! water) are not numbers and never resolve.

use geojson::JsonObject;
use serde_json::Value;

/// Attribute keys that hold the district number directly, in priority order.
pub const DISTRICT_FIELDS: &[&str] = &[
    "district",
    "DISTRICT",
    "District",
    "CD119FP",
    "CD118FP",
    "CD117FP",
    "CD116FP",
    "CD115FP",
    "CDFP",
    "district_number",
    "DISTRICT_NUMBER",
];

/// Attribute keys holding a combined state + district GEOID.
pub const GEOID_FIELDS: &[&str] = &["GEOID", "GEOID20", "GEOID10"];

/// Resolve the canonical district id for a feature's attributes.
///
/// Tries `preferred_field` first, then [`DISTRICT_FIELDS`], then the last
/// two characters of a [`GEOID_FIELDS`] value.
pub fn resolve_district_id(
    attributes: &JsonObject,
    preferred_field: Option<&str>,
) -> Result<String, ResolveError> {
    let direct = preferred_field
        .into_iter()
        .chain(DISTRICT_FIELDS.iter().copied())
        .filter_map(|key| attributes.get(key))
        .find_map(value_to_id);

    if let Some(id) = direct {
        return Ok(id);
    }

    GEOID_FIELDS
        .iter()
        .filter_map(|key| attributes.get(*key))
        .find_map(district_from_geoid)
        .ok_or(ResolveError::NoDistrictField)
}

/// Normalize a raw district value to its decimal form, stripping leading zeros.
///
/// Returns `None` unless the trimmed input is a non-empty run of ASCII digits.
pub fn normalize_district_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let stripped = raw.trim_start_matches('0');
    Some(if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    })
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => normalize_district_id(s),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                // Some exports store the district as a float (8.0)
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| format!("{}", f as u32))
            }
        }
        _ => None,
    }
}

fn district_from_geoid(value: &Value) -> Option<String> {
    let geoid = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let tail_start = geoid.char_indices().rev().nth(1)?.0;
    let tail = &geoid[tail_start..];
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    normalize_district_id(tail)
}

/// Errors from district id resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No recognized district attribute")]
    NoDistrictField,
}
