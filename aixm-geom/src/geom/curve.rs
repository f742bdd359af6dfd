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

//! Line geometries from simple curves.

use log::debug;

use super::{axis, line_string, Coordinate, Geometry};
use crate::xml;

/// Returns a line string if at least two coordinates are given.
pub fn line(coords: &[Coordinate]) -> Option<Geometry> {
    if coords.len() < 2 {
        debug!("dropping line with {} point(s)", coords.len());
        return None;
    }

    Some(Geometry::LineString(line_string(coords)))
}

/// Combines the line geometries of consecutive segments into one path.
///
/// Missing geometries are skipped. A single line is returned as is, several
/// lines become a multi line string and `None` is returned if no line
/// remains.
///
/// # Examples
///
/// ```
/// use aixm_geom::geom::{curve, Coordinate, Geometry};
///
/// let a = curve::line(&[Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)]);
/// let b = curve::line(&[Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)]);
///
/// let path = curve::combine([a.as_ref(), None, b.as_ref()]);
/// assert!(matches!(path, Some(Geometry::MultiLineString(_))));
/// ```
pub fn combine<'a, I>(geometries: I) -> Option<Geometry>
where
    I: IntoIterator<Item = Option<&'a Geometry>>,
{
    let mut lines: Vec<geo::LineString<f64>> = geometries
        .into_iter()
        .flatten()
        .flat_map(|geometry| match geometry {
            Geometry::LineString(l) => vec![l.clone()],
            Geometry::MultiLineString(ml) => ml.0.clone(),
            _ => Vec::new(),
        })
        .collect();

    match lines.len() {
        0 => None,
        1 => lines.pop().map(Geometry::LineString),
        _ => Some(Geometry::MultiLineString(geo::MultiLineString::new(lines))),
    }
}

/// Appends `coords` to `points`, skipping a leading point that repeats the
/// current last one.
pub(crate) fn append(points: &mut Vec<Coordinate>, coords: Vec<Coordinate>) {
    let mut coords = coords.into_iter().peekable();

    if let (Some(last), Some(first)) = (points.last(), coords.peek()) {
        if last.same_position(first) {
            coords.next();
        }
    }

    points.extend(coords);
}

/// Returns the reference system of an element or the inherited one.
pub(crate) fn srs<'a>(own: &'a Option<String>, inherited: Option<&'a str>) -> Option<&'a str> {
    own.as_deref().or(inherited)
}

pub(crate) fn pos(pos: &xml::Pos, srs_name: Option<&str>) -> Option<Coordinate> {
    let text = pos.value.as_deref()?;
    axis::parse_pos(text, srs(&pos.srs_name, srs_name))
}

pub(crate) fn pos_list(list: &xml::PosList, srs_name: Option<&str>) -> Vec<Coordinate> {
    let Some(text) = list.value.as_deref() else {
        return Vec::new();
    };

    let dimension = list
        .srs_dimension
        .as_deref()
        .and_then(|d| d.trim().parse().ok())
        .unwrap_or(2);

    axis::parse_pos_list(text, srs(&list.srs_name, srs_name), dimension)
}

/// Returns the location of a point with its elevation, if declared.
pub(crate) fn point(point: &xml::PointXml, srs_name: Option<&str>) -> Option<Coordinate> {
    let srs_name = srs(&point.srs_name, srs_name);
    let coord = pos(point.pos.as_ref()?, srs_name)?;

    match point.elevation.as_ref().and_then(xml::ValWithUom::number) {
        Some(elevation) => Some(coord.with_elevation(Some(elevation))),
        None => Some(coord),
    }
}

/// Returns the vertices of a point sequence in document order.
pub(crate) fn points(seq: &xml::PointSequence, srs_name: Option<&str>) -> Vec<Coordinate> {
    let srs_name = srs(&seq.srs_name, srs_name);

    let mut coords = Vec::new();
    for vertex in &seq.vertices {
        match vertex {
            xml::Vertex::Pos(p) => coords.extend(pos(p, srs_name)),
            xml::Vertex::PointProperty(p) => {
                coords.extend(p.point.as_ref().and_then(|p| point(p, srs_name)))
            }
            xml::Vertex::PosList(list) => coords.extend(pos_list(list, srs_name)),
            xml::Vertex::Unsupported => {}
        }
    }
    coords
}

/// Returns the vertices of a simple curve.
///
/// Only straight runs are taken into account. The runs of a `gml:segments`
/// container are concatenated; without container, a single straight run or
/// a bare `posList` inside the curve is used.
pub(crate) fn simple_curve(curve: &xml::Curve, srs_name: Option<&str>) -> Vec<Coordinate> {
    let srs_name = srs(&curve.srs_name, srs_name);

    if let Some(segments) = &curve.segments {
        let mut coords = Vec::new();
        for segment in &segments.items {
            match segment {
                xml::CurveSegment::GeodesicString(seq)
                | xml::CurveSegment::LineStringSegment(seq) => {
                    append(&mut coords, points(seq, srs_name));
                }
                _ => debug!("ignoring non-straight segment of simple curve"),
            }
        }
        return coords;
    }

    curve
        .geodesic_string
        .as_ref()
        .or(curve.line_string_segment.as_ref())
        .map(|seq| points(seq, srs_name))
        .or_else(|| curve.pos_list.as_ref().map(|l| pos_list(l, srs_name)))
        .unwrap_or_default()
}

/// Returns the line geometry of a simple curve, or `None` if it has fewer
/// than two valid vertices.
pub(crate) fn parse(curve: &xml::Curve, srs_name: Option<&str>) -> Option<Geometry> {
    line(&simple_curve(curve, srs_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(xml: &str) -> xml::Curve {
        quick_xml::de::from_str(xml).expect("curve should deserialize")
    }

    #[test]
    fn line_needs_two_points() {
        assert!(line(&[]).is_none());
        assert!(line(&[Coordinate::new(1.0, 2.0)]).is_none());
        assert!(line(&[Coordinate::new(1.0, 2.0), Coordinate::new(2.0, 3.0)]).is_some());
    }

    #[test]
    fn combine_single_and_multiple() {
        let a = line(&[Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)]);
        let b = line(&[Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)]);

        assert!(combine([None, None]).is_none());
        assert_eq!(combine([None, a.as_ref()]), a);

        match combine([a.as_ref(), b.as_ref()]) {
            Some(Geometry::MultiLineString(ml)) => assert_eq!(ml.0.len(), 2),
            other => panic!("expected multi line string but got {other:?}"),
        }
    }

    #[test]
    fn append_skips_joint() {
        let mut points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)];
        append(
            &mut points,
            vec![Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)],
        );
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn segments_are_concatenated() {
        let c = curve(
            r#"<gml:Curve xmlns:gml="http://www.opengis.net/gml/3.2"
                 srsName="urn:ogc:def:crs:EPSG::4326">
              <gml:segments>
                <gml:GeodesicString>
                  <gml:posList>52.0 -32.0 52.5 -32.0</gml:posList>
                </gml:GeodesicString>
                <gml:LineStringSegment>
                  <gml:pos>52.5 -32.0</gml:pos>
                  <gml:pos>52.5 -31.5</gml:pos>
                </gml:LineStringSegment>
              </gml:segments>
            </gml:Curve>"#,
        );

        let coords = simple_curve(&c, None);
        assert_eq!(
            coords,
            vec![
                Coordinate::new(-32.0, 52.0),
                Coordinate::new(-32.0, 52.5),
                Coordinate::new(-31.5, 52.5),
            ]
        );
    }

    #[test]
    fn mixed_vertices_keep_document_order() {
        let c = curve(
            r#"<gml:Curve xmlns:gml="http://www.opengis.net/gml/3.2"
                 srsName="urn:ogc:def:crs:OGC:1.3:CRS84">
              <gml:segments>
                <gml:LineStringSegment>
                  <gml:pos>0.0 0.0</gml:pos>
                  <gml:pointProperty>
                    <gml:Point>
                      <gml:pos>1.0 0.0</gml:pos>
                    </gml:Point>
                  </gml:pointProperty>
                  <gml:pos>1.0 1.0</gml:pos>
                  <gml:posList>0.0 1.0 0.0 2.0</gml:posList>
                </gml:LineStringSegment>
              </gml:segments>
            </gml:Curve>"#,
        );

        assert_eq!(
            simple_curve(&c, None),
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 1.0),
                Coordinate::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn bare_pos_list_with_inherited_srs() {
        let c = curve(
            r#"<gml:Curve xmlns:gml="http://www.opengis.net/gml/3.2">
              <gml:posList>10.0 50.0 11.0 51.0</gml:posList>
            </gml:Curve>"#,
        );

        let geometry = parse(&c, Some("urn:ogc:def:crs:OGC:1.3:CRS84"));
        match geometry {
            Some(Geometry::LineString(l)) => {
                assert_eq!(l.0[0], geo::coord! { x: 10.0, y: 50.0 });
                assert_eq!(l.0[1], geo::coord! { x: 11.0, y: 51.0 });
            }
            other => panic!("expected line string but got {other:?}"),
        }
    }

    #[test]
    fn line_of_three_dimensional_pos_list_is_flat() {
        let c = curve(
            r#"<gml:Curve xmlns:gml="http://www.opengis.net/gml/3.2"
                 srsName="urn:ogc:def:crs:OGC:1.3:CRS84">
              <gml:posList srsDimension="3">10.0 50.0 300.0 11.0 51.0 400.0</gml:posList>
            </gml:Curve>"#,
        );

        assert_eq!(
            parse(&c, None),
            Some(Geometry::LineString(geo::LineString::from(vec![
                (10.0, 50.0),
                (11.0, 51.0)
            ])))
        );
    }

    #[test]
    fn single_vertex_yields_nothing() {
        let c = curve(
            r#"<gml:Curve xmlns:gml="http://www.opengis.net/gml/3.2">
              <gml:segments>
                <gml:GeodesicString>
                  <gml:posList>52.0 -32.0</gml:posList>
                </gml:GeodesicString>
              </gml:segments>
            </gml:Curve>"#,
        );

        assert!(parse(&c, None).is_none());
    }
}
