// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map styling, labels, and export tests.

mod common;

use common::{district_8_store, rect_feature, StubGeocoder, CENSUS_SAMPLE, TEXAS_DISTRICTS};
use district_locator::models::Point;
use district_locator::services::presentation::{
    district_labels, district_style, marker_for, sorted_district_ids, styled_feature_collection,
    HIGHLIGHT_COLOR, NOT_FOUND_MARKER_COLOR, OTHER_MARKER_COLOR,
};
use district_locator::services::{BoundaryStore, DistrictLocator};

#[test]
fn test_highlighted_style() {
    let style = district_style("8", "8");
    assert_eq!(style.fill_color, HIGHLIGHT_COLOR);
    assert_eq!(style.fill_opacity, 0.6);
    assert_eq!(style.weight, 3.0);
}

#[test]
fn test_other_styles_alternate() {
    let a = district_style("1", "8");
    let b = district_style("2", "8");
    let c = district_style("9", "8");

    assert_ne!(a.fill_color, HIGHLIGHT_COLOR);
    assert_ne!(a.fill_color, b.fill_color);
    // Palette has eight slots
    assert_eq!(a.fill_color, c.fill_color);
    assert_eq!(a.fill_opacity, 0.25);
    assert_eq!(a.weight, 1.5);
}

#[test]
fn test_sorted_ids_are_numeric() {
    let store = BoundaryStore::new();
    store
        .load(
            vec![
                rect_feature("10", 0.0, 0.0, 1.0, 1.0),
                rect_feature("0", 2.0, 0.0, 3.0, 1.0),
                rect_feature("2", 4.0, 0.0, 5.0, 1.0),
                rect_feature("1", 6.0, 0.0, 7.0, 1.0),
            ],
            None,
        )
        .unwrap();

    assert_eq!(
        sorted_district_ids(&store.snapshot()),
        vec!["0", "1", "2", "10"]
    );
}

#[test]
fn test_sorted_texas_districts() {
    let store = BoundaryStore::new();
    store.load_from_file(TEXAS_DISTRICTS, None).unwrap();

    let expected: Vec<String> = (1..=38).map(|n| n.to_string()).collect();
    assert_eq!(sorted_district_ids(&store.snapshot()), expected);
}

#[test]
fn test_labels_at_vertex_mean() {
    let store = BoundaryStore::new();
    store
        .load(
            vec![
                rect_feature("1", 0.0, 0.0, 2.0, 2.0),
                rect_feature("8", 10.0, 10.0, 14.0, 14.0),
            ],
            None,
        )
        .unwrap();

    let labels = district_labels(&store.snapshot(), "8");
    assert_eq!(labels.len(), 2);

    // Closed 5-vertex ring: the repeated corner skews the mean
    assert_eq!(labels[0].district_id, "1");
    assert_eq!(labels[0].position, Point::new(0.8, 0.8));
    assert!(!labels[0].highlighted);

    assert_eq!(labels[1].district_id, "8");
    assert!(labels[1].highlighted);
}

#[test]
fn test_multipolygon_label_uses_first_part() {
    let store = BoundaryStore::new();
    store.load_from_file(CENSUS_SAMPLE, None).unwrap();

    let labels = district_labels(&store.snapshot(), "8");
    let label_36 = labels.iter().find(|l| l.district_id == "36").unwrap();

    // Mainland part only; the island part is far to the south west
    assert!(label_36.position.lat > 29.5 && label_36.position.lat < 30.4);
    assert!(label_36.position.lng > -94.5 && label_36.position.lng < -93.5);
}

#[test]
fn test_markers() {
    let geocoder = StubGeocoder::default();
    let locator = DistrictLocator::new(district_8_store(), geocoder, "8".into());

    let marker = marker_for(&locator.locate_point(Point::new(30.17, -95.46), "The Woodlands"));
    assert_eq!(marker.color, HIGHLIGHT_COLOR);
    assert_eq!(marker.label, "8");
    assert!(marker.popup.contains("The Woodlands"));
    assert!(marker.popup.contains("District 8"));
    assert_eq!(marker.position, Point::new(30.17, -95.46));

    let marker = marker_for(&locator.locate_point(Point::new(32.0, -94.2), "Tyler"));
    assert_eq!(marker.color, OTHER_MARKER_COLOR);
    assert_eq!(marker.label, "1");

    let marker = marker_for(&locator.locate_point(Point::new(40.0, -100.0), "Nebraska"));
    assert_eq!(marker.color, NOT_FOUND_MARKER_COLOR);
    assert_eq!(marker.label, "?");
    assert!(marker.popup.contains("not inside"));
}

#[test]
fn test_styled_feature_collection() {
    let store = BoundaryStore::new();
    store.load_from_file(CENSUS_SAMPLE, None).unwrap();

    let collection = styled_feature_collection(&store.snapshot(), "8");
    assert_eq!(collection.features.len(), 3);

    let first = &collection.features[0];
    assert_eq!(first.property("district").and_then(|v| v.as_str()), Some("8"));
    assert_eq!(
        first.property("name").and_then(|v| v.as_str()),
        Some("Congressional District 8")
    );
    assert_eq!(
        first.property("highlighted").and_then(|v| v.as_bool()),
        Some(true)
    );
    assert_eq!(
        first.property("style").and_then(|s| s.get("fillColor")).and_then(|v| v.as_str()),
        Some(HIGHLIGHT_COLOR)
    );
    assert!(first.property("labelPosition").is_some());

    let third = &collection.features[2];
    assert_eq!(
        third.property("highlighted").and_then(|v| v.as_bool()),
        Some(false)
    );
    assert!(matches!(
        third.geometry.as_ref().map(|g| &g.value),
        Some(geojson::Value::MultiPolygon(_))
    ));

    // The export loads back with the same districts
    let json = serde_json::to_string(&collection).unwrap();
    let reloaded = BoundaryStore::new();
    let report = reloaded.load_from_json(&json, None).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(
        reloaded.find_district_for_point(Point::new(30.17, -95.46)),
        Some("8".to_string())
    );
}
