// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Circles and arcs on a spherical earth.
//!
//! GML describes curved airspace boundaries either by a center point with
//! radius and start/end bearing (`ArcByCenterPoint`, `CircleByCenterPoint`)
//! or by three points on the arc (`Arc`, `ArcString`). Both are interpolated
//! into straight segments here. The earth is approximated by a sphere with
//! the WGS-84 equatorial radius, which is accurate enough for the radii used
//! in airspace definitions.

use geo::{Bearing, Destination, Distance, HaversineMeasure, Point};

use super::Coordinate;

/// Radius of the spherical earth in meter.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Number of segments of a full circle.
pub const CIRCLE_SEGMENTS: usize = 64;

/// Minimum number of segments of an arc.
pub const MIN_ARC_SEGMENTS: usize = 16;

/// Number of arc segments spent on a full 360° sweep.
pub const ARC_SEGMENTS_PER_CIRCLE: f64 = 128.0;

/// Determinant below which three points are taken as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Points an arc should connect to in its ring.
///
/// If both are known, the arc is oriented such that it starts close to the
/// `previous` point and ends close to the `next` point.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Anchors {
    /// Last point of the ring before the arc.
    pub previous: Option<Coordinate>,
    /// First point of the ring after the arc.
    pub next: Option<Coordinate>,
}

/// Sphere with the [`EARTH_RADIUS`].
const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS);

/// Returns the point at `distance` meter from the `origin` in direction of
/// the true `bearing` in degree.
pub fn destination(origin: Coordinate, bearing: f64, distance: f64) -> Coordinate {
    let point = EARTH.destination(Point::from(origin), bearing, distance);
    Coordinate::from(point.0)
}

/// Returns the initial true bearing in degree from `from` to `to` in the
/// range [0, 360).
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    EARTH.bearing(Point::from(from), Point::from(to))
}

/// Returns the great circle distance in meter between two points.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    EARTH.distance(Point::from(a), Point::from(b))
}

/// Returns a closed circle of `segments + 1` points.
///
/// The points start north of the `center` and run clockwise. The last point
/// is an exact copy of the first.
///
/// # Examples
///
/// ```
/// use aixm_geom::geom::{arc, Coordinate};
///
/// let points = arc::circle(Coordinate::new(8.0, 50.0), 5_000.0, arc::CIRCLE_SEGMENTS);
/// assert_eq!(points.len(), 65);
/// assert_eq!(points.first(), points.last());
/// ```
pub fn circle(center: Coordinate, radius: f64, segments: usize) -> Vec<Coordinate> {
    let segments = segments.max(1);
    let step = 360.0 / segments as f64;

    let mut points: Vec<Coordinate> = (0..segments)
        .map(|i| destination(center, i as f64 * step, radius))
        .collect();

    if let Some(first) = points.first().copied() {
        points.push(first);
    }

    points
}

/// Returns the number of segments for an arc spanning `span` degree.
pub fn arc_segments(span: f64) -> usize {
    let segments = (ARC_SEGMENTS_PER_CIRCLE * span / 360.0).round() as usize;
    segments.max(MIN_ARC_SEGMENTS)
}

/// Returns the sweep of an arc from the `start` to the `end` bearing.
///
/// The sweep is clockwise if the end bearing isn't less than the start
/// bearing. Its magnitude is the bearing difference reduced into (0, 360],
/// so equal bearings describe a full circle.
pub fn sweep(start: f64, end: f64) -> (bool, f64) {
    let diff = end - start;
    let clockwise = diff >= 0.0;
    let span = diff.abs() % 360.0;

    (clockwise, if span == 0.0 { 360.0 } else { span })
}

/// Interpolates an arc around the `center` with `radius` meter from the
/// `start` to the `end` bearing.
///
/// Returns `arc_segments(span) + 1` points. The arc is reversed if that
/// connects it better to both [`Anchors`]; on a tie it is kept as is.
///
/// # Examples
///
/// ```
/// use aixm_geom::geom::{arc, Coordinate};
///
/// let points = arc::arc_by_center(
///     Coordinate::new(0.0, 0.0),
///     111_320.0,
///     0.0,
///     90.0,
///     arc::Anchors::default(),
/// );
/// assert_eq!(points.len(), 33);
/// ```
pub fn arc_by_center(
    center: Coordinate,
    radius: f64,
    start: f64,
    end: f64,
    anchors: Anchors,
) -> Vec<Coordinate> {
    let (clockwise, span) = sweep(start, end);
    let points = interpolate(center, radius, start, span, clockwise);

    orient(points, anchors)
}

/// Interpolates the arc through three points.
///
/// The center is the planar circumcenter of the points, the radius is the
/// distance to the first point and the direction is the one that passes the
/// middle point. Collinear points are returned unchanged as a straight path.
pub fn arc_through(p1: Coordinate, p2: Coordinate, p3: Coordinate) -> Vec<Coordinate> {
    let Some(center) = circumcenter(p1, p2, p3) else {
        return vec![p1, p2, p3];
    };

    let radius = distance(center, p1);
    let b1 = bearing(center, p1);
    let b2 = bearing(center, p2);
    let b3 = bearing(center, p3);

    let forward = (b3 - b1).rem_euclid(360.0);
    let forward = if forward == 0.0 { 360.0 } else { forward };
    let clockwise = (b2 - b1).rem_euclid(360.0) < forward;
    let span = if clockwise { forward } else { 360.0 - forward };

    interpolate(center, radius, b1, span, clockwise)
}

/// Returns the circumcenter of three points in the lon/lat plane, or `None`
/// if they are collinear.
fn circumcenter(a: Coordinate, b: Coordinate, c: Coordinate) -> Option<Coordinate> {
    let (ax, ay) = (a.longitude, a.latitude);
    let (bx, by) = (b.longitude, b.latitude);
    let (cx, cy) = (c.longitude, c.latitude);

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < COLLINEAR_EPSILON {
        return None;
    }

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;

    let x = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let y = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;

    Some(Coordinate::new(x, y))
}

fn interpolate(
    center: Coordinate,
    radius: f64,
    start: f64,
    span: f64,
    clockwise: bool,
) -> Vec<Coordinate> {
    let segments = arc_segments(span);
    let step = if clockwise { span } else { -span } / segments as f64;

    (0..=segments)
        .map(|i| destination(center, start + i as f64 * step, radius))
        .collect()
}

fn orient(mut points: Vec<Coordinate>, anchors: Anchors) -> Vec<Coordinate> {
    let (Some(previous), Some(next)) = (anchors.previous, anchors.next) else {
        return points;
    };
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return points;
    };

    let score = distance(previous, first) + distance(last, next);
    let reversed_score = distance(previous, last) + distance(first, next);

    if reversed_score < score {
        points.reverse();
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    fn assert_near(c: Coordinate, longitude: f64, latitude: f64) {
        assert!(
            (c.longitude - longitude).abs() < EPSILON && (c.latitude - latitude).abs() < EPSILON,
            "{c} should be near ({longitude}, {latitude})"
        );
    }

    #[test]
    fn destination_along_the_equator() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_near(destination(origin, 0.0, 111_320.0), 0.0, 1.0);
        assert_near(destination(origin, 90.0, 111_320.0), 1.0, 0.0);
        assert_near(destination(origin, 180.0, 111_320.0), 0.0, -1.0);
        assert_near(destination(origin, 270.0, 111_320.0), -1.0, 0.0);
    }

    #[test]
    fn destination_across_the_antimeridian() {
        let c = destination(Coordinate::new(179.5, 0.0), 90.0, 111_320.0);
        assert_near(c, -179.5, 0.0);
    }

    #[test]
    fn bearing_and_distance_agree_with_destination() {
        let origin = Coordinate::new(9.57666667, 53.9925);
        let target = destination(origin, 101.0, 25_000.0);
        assert!((bearing(origin, target) - 101.0).abs() < 0.01);
        assert!((distance(origin, target) - 25_000.0).abs() < 0.5);
    }

    #[test]
    fn circle_is_closed() {
        for segments in [4, 16, 64, 100] {
            let points = circle(Coordinate::new(10.0, 50.0), 9_260.0, segments);
            assert_eq!(points.len(), segments + 1);
            assert_eq!(points[0], points[segments]);
        }
    }

    #[test]
    fn sweep_direction_and_span() {
        assert_eq!(sweep(0.0, 90.0), (true, 90.0));
        assert_eq!(sweep(90.0, 0.0), (false, 90.0));
        assert_eq!(sweep(350.0, 10.0), (false, 340.0));
        assert_eq!(sweep(10.0, 10.0), (true, 360.0));
        assert_eq!(sweep(0.0, 720.0), (true, 360.0));
    }

    #[test]
    fn segment_count() {
        assert_eq!(arc_segments(90.0), 32);
        assert_eq!(arc_segments(360.0), 128);
        assert_eq!(arc_segments(10.0), MIN_ARC_SEGMENTS);
    }

    #[test]
    fn zero_span_arc_is_full_circle() {
        let center = Coordinate::new(0.0, 0.0);
        let points = arc_by_center(center, 10_000.0, 45.0, 45.0, Anchors::default());
        assert_eq!(points.len(), 129);
        assert_near(points[0], points[128].longitude, points[128].latitude);
    }

    #[test]
    fn quarter_arc_clockwise() {
        let center = Coordinate::new(0.0, 0.0);
        let points = arc_by_center(center, 111_320.0, 0.0, 90.0, Anchors::default());
        assert_eq!(points.len(), 33);
        assert_near(points[0], 0.0, 1.0);
        assert_near(points[32], 1.0, 0.0);
        // clockwise from north passes north-east
        assert!(points[16].longitude > 0.5 && points[16].latitude > 0.5);
    }

    #[test]
    fn quarter_arc_counter_clockwise() {
        let center = Coordinate::new(0.0, 0.0);
        let points = arc_by_center(center, 111_320.0, 90.0, 0.0, Anchors::default());
        assert_eq!(points.len(), 33);
        assert_near(points[0], 1.0, 0.0);
        assert_near(points[32], 0.0, 1.0);
    }

    #[test]
    fn arc_is_reversed_towards_anchors() {
        let center = Coordinate::new(0.0, 0.0);
        let anchors = Anchors {
            previous: Some(Coordinate::new(1.0, 0.0)),
            next: Some(Coordinate::new(0.0, 1.0)),
        };
        let points = arc_by_center(center, 111_320.0, 0.0, 90.0, anchors);
        assert_near(points[0], 1.0, 0.0);
        assert_near(points[32], 0.0, 1.0);
    }

    #[test]
    fn arc_needs_both_anchors_to_reverse() {
        let center = Coordinate::new(0.0, 0.0);
        let anchors = Anchors {
            previous: Some(Coordinate::new(1.0, 0.0)),
            next: None,
        };
        let points = arc_by_center(center, 111_320.0, 0.0, 90.0, anchors);
        assert_near(points[0], 0.0, 1.0);
    }

    #[test]
    fn arc_keeps_orientation_on_tie() {
        // both endpoints are equally far from the anchors
        let center = Coordinate::new(0.0, 0.0);
        let anchors = Anchors {
            previous: Some(center),
            next: Some(center),
        };
        let points = arc_by_center(center, 111_320.0, 0.0, 90.0, anchors);
        assert_near(points[0], 0.0, 1.0);
    }

    #[test]
    fn collinear_points_stay_straight() {
        let p1 = Coordinate::new(0.0, 0.0);
        let p2 = Coordinate::new(1.0, 1.0);
        let p3 = Coordinate::new(2.0, 2.0);
        assert_eq!(arc_through(p1, p2, p3), vec![p1, p2, p3]);
    }

    #[test]
    fn three_point_arc_passes_all_points() {
        let center = Coordinate::new(0.0, 0.0);
        let p1 = destination(center, 0.0, 20_000.0);
        let p2 = destination(center, 45.0, 20_000.0);
        let p3 = destination(center, 90.0, 20_000.0);

        let points = arc_through(p1, p2, p3);
        assert_eq!(points.len(), arc_segments(90.0) + 1);
        assert_near(points[0], p1.longitude, p1.latitude);
        assert_near(points[points.len() - 1], p3.longitude, p3.latitude);
        assert!(points.iter().any(|c| distance(*c, p2) < 1_000.0));
    }

    #[test]
    fn three_point_arc_counter_clockwise() {
        let center = Coordinate::new(0.0, 0.0);
        let p1 = destination(center, 90.0, 20_000.0);
        let p2 = destination(center, 45.0, 20_000.0);
        let p3 = destination(center, 0.0, 20_000.0);

        let points = arc_through(p1, p2, p3);
        assert_eq!(points.len(), arc_segments(90.0) + 1);
        assert_near(points[points.len() - 1], p3.longitude, p3.latitude);
        assert!(points.iter().all(|c| c.longitude > -EPSILON && c.latitude > -EPSILON));
    }
}
