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

//! Polygon assembly from GML surfaces.
//!
//! An airspace boundary is a ring of curve members. Each member is either an
//! inline curve of straight runs and arcs, or a reference to a shared
//! [`GeoBorder`](crate::GeoBorder) whose vertices are looked up in the
//! [`BorderRegistry`]. The members are concatenated in document order, the
//! ring is closed and the resulting polygon is repaired if it is invalid.

use geo::{BooleanOps, Validation};
use log::{debug, warn};

use super::arc::{self, Anchors};
use super::curve::{self, srs};
use super::{line_string, Coordinate, Geometry};
use crate::border::BorderRegistry;
use crate::xml;

/// Conversion factors of the radius units to meter.
const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
const KILOMETER_IN_METER: f64 = 1000.0;
const FEET_IN_METER: f64 = 0.3048;
const STATUTE_MILE_IN_METER: f64 = 1609.344;

/// Minimum number of points of a closed ring.
const MIN_RING_POINTS: usize = 4;

/// Assembles the geometry of a surface.
///
/// Every patch becomes one polygon. A single polygon is returned as such,
/// several as a multi polygon. Patches that don't form a valid ring are
/// dropped and `None` is returned if no patch remains.
pub(crate) fn surface(
    surface: &xml::Surface,
    borders: &BorderRegistry,
    srs_name: Option<&str>,
) -> Option<Geometry> {
    let srs_name = srs(&surface.srs_name, srs_name);

    let mut polygons: Vec<geo::Polygon<f64>> = surface
        .patches
        .iter()
        .flat_map(|patches| &patches.polygon_patches)
        .filter_map(|patch| {
            let srs_name = srs(&patch.srs_name, srs_name);
            let exterior = patch.exterior.as_ref()?;
            let points = exterior_points(exterior, borders, srs_name);
            polygon(points)
        })
        .collect();

    match polygons.len() {
        0 => None,
        1 => polygons.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(geo::MultiPolygon::new(polygons))),
    }
}

/// Unions the area geometries of several surfaces into one.
///
/// A single geometry is returned unchanged.
pub fn union(geometries: Vec<Geometry>) -> Option<Geometry> {
    if geometries.len() <= 1 {
        return geometries.into_iter().next();
    }

    let mut merged = geometries
        .iter()
        .filter_map(Geometry::to_multi_polygon)
        .reduce(|acc, mp| acc.union(&mp))?;

    match merged.0.len() {
        0 => None,
        1 => merged.0.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(merged)),
    }
}

/// Closes the ring and builds a valid polygon of it.
///
/// Returns `None` if the ring has fewer than four points after closing or if
/// the polygon is invalid and can't be repaired. An invalid polygon is
/// repaired by unioning it with itself, which splits it at its
/// self-intersections. If that yields several polygons, only the first one
/// is kept.
pub fn polygon(mut points: Vec<Coordinate>) -> Option<geo::Polygon<f64>> {
    let open = match (points.first(), points.last()) {
        (Some(first), Some(last)) => !first.same_position(last),
        _ => false,
    };
    if let (true, Some(&first)) = (open, points.first()) {
        points.push(first);
    }

    if points.len() < MIN_RING_POINTS {
        debug!("dropping ring with {} point(s)", points.len());
        return None;
    }

    let polygon = geo::Polygon::new(line_string(&points), vec![]);
    if polygon.is_valid() {
        return Some(polygon);
    }

    // nodes the self-intersections and rebuilds the rings like a
    // zero-width buffer
    let repaired = geo::MultiPolygon::new(vec![polygon]).union(&geo::MultiPolygon::new(vec![]));
    let count = repaired.0.len();
    let Some(first) = repaired.0.into_iter().next() else {
        warn!("dropping invalid ring of {} points", points.len());
        return None;
    };

    if count > 1 {
        warn!("repaired ring fell apart into {count} polygons, keeping the first");
    }

    Some(first)
}

fn exterior_points(
    exterior: &xml::Exterior,
    borders: &BorderRegistry,
    srs_name: Option<&str>,
) -> Vec<Coordinate> {
    if let Some(ring) = &exterior.ring {
        return ring_points(ring, borders, srs_name);
    }

    exterior
        .linear_ring
        .as_ref()
        .map(|ring| curve::points(ring, srs_name))
        .unwrap_or_default()
}

/// Concatenates the points of all ring members.
fn ring_points(
    ring: &xml::Ring,
    borders: &BorderRegistry,
    srs_name: Option<&str>,
) -> Vec<Coordinate> {
    let mut points: Vec<Coordinate> = Vec::new();
    let members = &ring.curve_members;

    for (i, member) in members.iter().enumerate() {
        match &member.curve {
            Some(c) => {
                // the ring closes onto its first point after the last member
                let next = match members.get(i + 1) {
                    Some(next) => member_start(next, borders, srs_name),
                    None => points.first().copied(),
                };
                let coords = curve_points(c, srs_name, points.last().copied(), next);
                curve::append(&mut points, coords);
            }
            None => {
                let Some(href) = member.href.as_deref() else {
                    continue;
                };
                match borders.get(href) {
                    Some(coords) => points.extend_from_slice(coords),
                    None => debug!("unresolved border reference {href}"),
                }
            }
        }
    }

    points
}

/// Returns the first point a ring member will contribute, if it's known
/// without interpolating the member.
fn member_start(
    member: &xml::CurveMember,
    borders: &BorderRegistry,
    srs_name: Option<&str>,
) -> Option<Coordinate> {
    match &member.curve {
        Some(c) => {
            let srs_name = srs(&c.srs_name, srs_name);
            match &c.segments {
                Some(segments) => segments
                    .items
                    .first()
                    .and_then(|s| segment_start(s, srs_name)),
                None => fallback_segment(c)
                    .and_then(|s| segment_start(&s, srs_name))
                    .or_else(|| {
                        let list = c.pos_list.as_ref()?;
                        curve::pos_list(list, srs_name).first().copied()
                    }),
            }
        }
        None => borders
            .get(member.href.as_deref()?)
            .and_then(|coords| coords.first().copied()),
    }
}

/// Returns the points of an inline curve.
///
/// Each arc is anchored between the last point produced so far and the start
/// of the following segment, or the `previous` and `next` points of the ring
/// at the curve's ends.
fn curve_points(
    c: &xml::Curve,
    srs_name: Option<&str>,
    previous: Option<Coordinate>,
    next: Option<Coordinate>,
) -> Vec<Coordinate> {
    let srs_name = srs(&c.srs_name, srs_name);

    let Some(segments) = &c.segments else {
        return match fallback_segment(c) {
            Some(segment) => segment_points(&segment, srs_name, Anchors { previous, next }),
            None => c
                .pos_list
                .as_ref()
                .map(|l| curve::pos_list(l, srs_name))
                .unwrap_or_default(),
        };
    };

    let mut points: Vec<Coordinate> = Vec::new();
    for (i, segment) in segments.items.iter().enumerate() {
        let anchors = Anchors {
            previous: points.last().copied().or(previous),
            next: match segments.items.get(i + 1) {
                Some(s) => segment_start(s, srs_name),
                None => next,
            },
        };
        curve::append(&mut points, segment_points(segment, srs_name, anchors));
    }

    points
}

/// Borrowed view of a curve segment.
#[derive(Copy, Clone)]
enum SegmentRef<'a> {
    Straight(&'a xml::PointSequence),
    ArcByCenter(&'a xml::ArcByCenterPoint),
    Circle(&'a xml::ArcByCenterPoint),
    ThreePointArc(&'a xml::PointSequence),
}

/// Picks the single segment of a curve without `gml:segments` container in
/// the order straight run, center arc, circle and three-point arc.
fn fallback_segment(c: &xml::Curve) -> Option<SegmentRef<'_>> {
    c.geodesic_string
        .as_ref()
        .or(c.line_string_segment.as_ref())
        .map(SegmentRef::Straight)
        .or_else(|| c.arc_by_center_point.as_ref().map(SegmentRef::ArcByCenter))
        .or_else(|| c.circle_by_center_point.as_ref().map(SegmentRef::Circle))
        .or_else(|| c.arc_string.as_ref().map(SegmentRef::ThreePointArc))
}

/// Common access to listed and fallback segments.
trait SegmentView {
    fn view(&self) -> Option<SegmentRef<'_>>;
}

impl SegmentView for xml::CurveSegment {
    fn view(&self) -> Option<SegmentRef<'_>> {
        match self {
            Self::GeodesicString(seq) | Self::LineStringSegment(seq) => {
                Some(SegmentRef::Straight(seq))
            }
            Self::ArcByCenterPoint(a) => Some(SegmentRef::ArcByCenter(a)),
            Self::CircleByCenterPoint(c) => Some(SegmentRef::Circle(c)),
            Self::ArcString(seq) | Self::Arc(seq) => Some(SegmentRef::ThreePointArc(seq)),
            Self::Unsupported => None,
        }
    }
}

impl SegmentView for SegmentRef<'_> {
    fn view(&self) -> Option<SegmentRef<'_>> {
        Some(*self)
    }
}

fn segment_start(segment: &impl SegmentView, srs_name: Option<&str>) -> Option<Coordinate> {
    match segment.view()? {
        SegmentRef::Straight(seq) | SegmentRef::ThreePointArc(seq) => {
            curve::points(seq, srs_name).first().copied()
        }
        SegmentRef::ArcByCenter(a) => {
            let (center, radius) = center_and_radius(a, srs_name)?;
            let start = angle(&a.start_angle)?;
            Some(arc::destination(center, start, radius))
        }
        // a circle doesn't connect to its neighbours
        SegmentRef::Circle(_) => None,
    }
}

fn segment_points(
    segment: &impl SegmentView,
    srs_name: Option<&str>,
    anchors: Anchors,
) -> Vec<Coordinate> {
    let Some(view) = segment.view() else {
        debug!("skipping unsupported curve segment");
        return Vec::new();
    };

    match view {
        SegmentRef::Straight(seq) => curve::points(seq, srs_name),
        SegmentRef::ArcByCenter(a) => {
            let srs_name = srs(&a.srs_name, srs_name);
            let (Some((center, radius)), Some(start), Some(end)) = (
                center_and_radius(a, srs_name),
                angle(&a.start_angle),
                angle(&a.end_angle),
            ) else {
                debug!("skipping arc without center, radius or angles");
                return Vec::new();
            };
            arc::arc_by_center(center, radius, start, end, anchors)
        }
        SegmentRef::Circle(c) => {
            let srs_name = srs(&c.srs_name, srs_name);
            match center_and_radius(c, srs_name) {
                Some((center, radius)) => arc::circle(center, radius, arc::CIRCLE_SEGMENTS),
                None => {
                    debug!("skipping circle without center or radius");
                    Vec::new()
                }
            }
        }
        SegmentRef::ThreePointArc(seq) => three_point_arcs(&curve::points(seq, srs_name)),
    }
}

/// Interpolates an arc string of `2n + 1` points as `n` consecutive arcs.
///
/// Fewer than three points are returned as a straight path.
fn three_point_arcs(points: &[Coordinate]) -> Vec<Coordinate> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut coords = Vec::new();
    let mut i = 0;
    while i + 2 < points.len() {
        curve::append(
            &mut coords,
            arc::arc_through(points[i], points[i + 1], points[i + 2]),
        );
        i += 2;
    }

    // an even number of points leaves a final straight leg
    if i + 1 < points.len() {
        curve::append(&mut coords, points[i..].to_vec());
    }

    coords
}

fn center_and_radius(
    a: &xml::ArcByCenterPoint,
    srs_name: Option<&str>,
) -> Option<(Coordinate, f64)> {
    let srs_name = srs(&a.srs_name, srs_name);

    let center = a
        .pos
        .as_ref()
        .and_then(|p| curve::pos(p, srs_name))
        .or_else(|| {
            let point = a.point_property.as_ref()?.point.as_ref()?;
            curve::point(point, srs_name)
        })
        .or_else(|| {
            let list = a.pos_list.as_ref()?;
            curve::pos_list(list, srs_name).first().copied()
        })?;

    let radius = a.radius.as_ref()?;
    let radius = radius_in_meter(radius.number()?, radius.uom.as_deref());

    Some((center, radius))
}

fn angle(value: &Option<xml::ValWithUom>) -> Option<f64> {
    value.as_ref()?.number()
}

/// Converts a radius to meter, taking meter if the unit is unknown.
fn radius_in_meter(value: f64, uom: Option<&str>) -> f64 {
    match uom.map(str::to_ascii_uppercase).as_deref() {
        Some("NM") | Some("[NMI_I]") => value * NAUTICAL_MILE_IN_METER,
        Some("KM") => value * KILOMETER_IN_METER,
        Some("FT") | Some("[FT_I]") => value * FEET_IN_METER,
        Some("MI") | Some("[MI_I]") => value * STATUTE_MILE_IN_METER,
        _ => value,
    }
}
