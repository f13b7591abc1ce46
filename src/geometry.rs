// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planar geometry helpers for district lookup.
//!
//! Rings are sequences of `geo::Coord` with `x` = longitude and
//! `y` = latitude, as they come out of GeoJSON. They may be open or closed
//! (first vertex repeated as the last).

use crate::models::Point;
use geo::Coord;

/// Even-odd ray casting test of `point` against `ring`.
///
/// A horizontal ray is cast from the point toward increasing longitude and
/// edge crossings are counted. Points exactly on an edge or vertex may land
/// on either side.
///
/// Rings with fewer than three distinct vertices never contain anything.
pub fn point_in_polygon(point: Point, ring: &[Coord<f64>]) -> bool {
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return false;
    }

    let (px, py) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > py) != (b.y > py) {
            let crossing_x = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
            if px < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of the ring's vertices, as given.
///
/// This is not the area-weighted centroid and can fall outside concave
/// shapes; it is only good enough for placing a label.
pub fn centroid_of_ring(ring: &[Coord<f64>]) -> Option<Point> {
    if ring.is_empty() {
        return None;
    }

    let n = ring.len() as f64;
    let (sum_x, sum_y) = ring
        .iter()
        .fold((0.0, 0.0), |(x, y), c| (x + c.x, y + c.y));

    Some(Point::new(sum_y / n, sum_x / n))
}

/// Drop the closing vertex if the ring repeats its first vertex.
fn open_ring(ring: &[Coord<f64>]) -> &[Coord<f64>] {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}
