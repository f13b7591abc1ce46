// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District id resolution across data source schemas.

use district_locator::services::{resolve_district_id, ResolveError};
use geojson::JsonObject;
use serde_json::json;

fn attrs(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("attributes must be an object"),
    }
}

#[test]
fn test_census_field_strips_leading_zero() {
    let a = attrs(json!({ "CD118FP": "08" }));
    assert_eq!(resolve_district_id(&a, None), Ok("8".to_string()));
}

#[test]
fn test_geoid_fallback() {
    let a = attrs(json!({ "GEOID": "4803708" }));
    assert_eq!(resolve_district_id(&a, None), Ok("8".to_string()));

    let a = attrs(json!({ "GEOID20": "4836" }));
    assert_eq!(resolve_district_id(&a, None), Ok("36".to_string()));
}

#[test]
fn test_no_recognized_field_fails() {
    let a = attrs(json!({ "STATEFP": "48", "NAME": "Unassigned water area" }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );

    assert_eq!(
        resolve_district_id(&JsonObject::new(), None),
        Err(ResolveError::NoDistrictField)
    );
}

#[test]
fn test_numeric_values() {
    let a = attrs(json!({ "district": 8 }));
    assert_eq!(resolve_district_id(&a, None), Ok("8".to_string()));

    let a = attrs(json!({ "CD118FP": 36 }));
    assert_eq!(resolve_district_id(&a, None), Ok("36".to_string()));
}

#[test]
fn test_preferred_field_wins() {
    let a = attrs(json!({ "district": "3", "SLDUST": "012" }));
    assert_eq!(resolve_district_id(&a, Some("SLDUST")), Ok("12".to_string()));
}

#[test]
fn test_empty_preferred_field_falls_through() {
    let a = attrs(json!({ "DIST": "", "CD118FP": "22" }));
    assert_eq!(resolve_district_id(&a, Some("DIST")), Ok("22".to_string()));

    let a = attrs(json!({ "CD118FP": "22" }));
    assert_eq!(resolve_district_id(&a, Some("MISSING")), Ok("22".to_string()));
}

#[test]
fn test_direct_field_beats_geoid() {
    let a = attrs(json!({ "GEOID": "4802", "CD118FP": "07" }));
    assert_eq!(resolve_district_id(&a, None), Ok("7".to_string()));
}

#[test]
fn test_priority_order() {
    // Hand-drawn "district" comes before Census fields
    let a = attrs(json!({ "CD118FP": "09", "district": "10" }));
    assert_eq!(resolve_district_id(&a, None), Ok("10".to_string()));

    // Newer Congress field comes before older ones
    let a = attrs(json!({ "CD116FP": "02", "CD119FP": "05" }));
    assert_eq!(resolve_district_id(&a, None), Ok("5".to_string()));
}

#[test]
fn test_unusable_values_are_skipped() {
    let a = attrs(json!({ "district": null, "CDFP": true, "GEOID": "4815" }));
    assert_eq!(resolve_district_id(&a, None), Ok("15".to_string()));

    let a = attrs(json!({ "GEOID": "48ZZ" }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );
}

#[test]
fn test_census_placeholder_code_fails() {
    // TIGER encodes "no district defined" areas as ZZ
    let a = attrs(json!({ "STATEFP": "48", "CD118FP": "ZZ", "GEOID": "48ZZ" }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );

    // A placeholder in the preferred field falls through to the others
    let a = attrs(json!({ "CD118FP": "ZZ", "GEOID": "4814" }));
    assert_eq!(resolve_district_id(&a, Some("CD118FP")), Ok("14".to_string()));
}

#[test]
fn test_malformed_values_fail() {
    let a = attrs(json!({ "GEOID": "48+8" }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );

    let a = attrs(json!({ "district": 1e30 }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );

    let a = attrs(json!({ "district": "AL" }));
    assert_eq!(
        resolve_district_id(&a, None),
        Err(ResolveError::NoDistrictField)
    );
}

#[test]
fn test_at_large_district() {
    let a = attrs(json!({ "CD118FP": "00" }));
    assert_eq!(resolve_district_id(&a, None), Ok("0".to_string()));
}
