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

//! Axis order of GML coordinate pairs.
//!
//! AIXM uses `urn:ogc:def:crs:EPSG::4326` in most documents, which lists
//! latitude first, while `CRS84` lists longitude first. Some producers omit
//! the `srsName` entirely, in which case the order is guessed from the
//! values themselves.

use log::debug;

use super::Coordinate;

/// Substring of an `srsName` that declares longitude-first order.
const LON_LAT_INDICATOR: &str = "CRS84";

/// Axis order of a raw coordinate pair.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AxisOrder {
    LonLat,
    LatLon,
}

impl AxisOrder {
    /// Returns the axis order declared by an `srsName`.
    pub fn from_srs_name(srs_name: &str) -> Self {
        if srs_name.to_ascii_uppercase().contains(LON_LAT_INDICATOR) {
            Self::LonLat
        } else {
            Self::LatLon
        }
    }

    /// Guesses the axis order of a pair without reference system.
    ///
    /// A first value beyond ±90° can't be a latitude. Otherwise the larger
    /// magnitude is taken as the longitude, and latitude first is assumed if
    /// the first value isn't the larger one.
    pub fn guess(first: f64, second: f64) -> Self {
        if first.abs() > 90.0 || first.abs() > second.abs() {
            Self::LonLat
        } else {
            Self::LatLon
        }
    }
}

/// Resolves a raw pair into a longitude-first [`Coordinate`].
///
/// The `srs_name` is the reference system of the pair itself or, if it has
/// none, the one inherited from the closest enclosing element.
///
/// # Examples
///
/// ```
/// use aixm_geom::geom::axis;
///
/// let c = axis::resolve(45.0, 10.0, Some("urn:ogc:def:crs:EPSG::4326"));
/// assert_eq!((c.longitude, c.latitude), (10.0, 45.0));
/// ```
pub fn resolve(first: f64, second: f64, srs_name: Option<&str>) -> Coordinate {
    let order = match srs_name {
        Some(srs_name) => AxisOrder::from_srs_name(srs_name),
        None => AxisOrder::guess(first, second),
    };

    match order {
        AxisOrder::LonLat => Coordinate::new(first, second),
        AxisOrder::LatLon => Coordinate::new(second, first),
    }
}

/// Parses the text of a `gml:pos` element.
///
/// A third value is taken as the elevation. Returns `None` if fewer than
/// two numbers are present.
pub fn parse_pos(text: &str, srs_name: Option<&str>) -> Option<Coordinate> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next()?;
    let elevation = tokens.next().and_then(|z| z.parse().ok());

    parse_pair(first, second, srs_name).map(|c| c.with_elevation(elevation))
}

/// Parses the text of a `gml:posList` element.
///
/// The values are grouped by `dimension` (2 if not declared, 3 with an
/// elevation per position). Groups with a malformed number are skipped as
/// well as a trailing incomplete group.
pub fn parse_pos_list(text: &str, srs_name: Option<&str>, dimension: usize) -> Vec<Coordinate> {
    let dimension = dimension.max(2);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    tokens
        .chunks_exact(dimension)
        .filter_map(|group| {
            let elevation = group.get(2).and_then(|z| z.parse().ok());
            parse_pair(group[0], group[1], srs_name).map(|c| c.with_elevation(elevation))
        })
        .collect()
}

/// Parses two number tokens and resolves their axis order.
pub fn parse_pair(first: &str, second: &str, srs_name: Option<&str>) -> Option<Coordinate> {
    match (first.parse::<f64>(), second.parse::<f64>()) {
        (Ok(a), Ok(b)) if a.is_finite() && b.is_finite() => Some(resolve(a, b, srs_name)),
        _ => {
            debug!("skipping malformed coordinate pair \"{first} {second}\"");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSG_4326: &str = "urn:ogc:def:crs:EPSG::4326";
    const CRS84: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";

    #[test]
    fn crs84_is_lon_lat() {
        let c = resolve(10.0, 20.0, Some(CRS84));
        assert_eq!((c.longitude, c.latitude), (10.0, 20.0));
    }

    #[test]
    fn epsg_4326_is_lat_lon() {
        let c = resolve(45.0, 10.0, Some(EPSG_4326));
        assert_eq!((c.longitude, c.latitude), (10.0, 45.0));
    }

    #[test]
    fn any_other_hint_is_lat_lon() {
        // even if the values would suggest otherwise
        let c = resolve(120.0, 30.0, Some("EPSG:4258"));
        assert_eq!((c.longitude, c.latitude), (30.0, 120.0));
    }

    #[test]
    fn guess_without_hint() {
        let c = resolve(120.0, 30.0, None);
        assert_eq!((c.longitude, c.latitude), (120.0, 30.0));

        let c = resolve(-32.0, 10.0, None);
        assert_eq!((c.longitude, c.latitude), (-32.0, 10.0));

        let c = resolve(52.0, -32.0, None);
        assert_eq!((c.longitude, c.latitude), (52.0, -32.0));

        let c = resolve(10.0, 52.0, None);
        assert_eq!((c.longitude, c.latitude), (52.0, 10.0));

        // equal magnitudes fall back to latitude first
        let c = resolve(45.0, 45.0, None);
        assert_eq!((c.longitude, c.latitude), (45.0, 45.0));
        let c = resolve(45.0, -45.0, None);
        assert_eq!((c.longitude, c.latitude), (-45.0, 45.0));
    }

    #[test]
    fn pos_with_elevation() {
        let c = parse_pos("52.288888 -32.035 18.0", Some(EPSG_4326)).unwrap();
        assert_eq!(c.longitude, -32.035);
        assert_eq!(c.latitude, 52.288888);
        assert_eq!(c.elevation, Some(18.0));
    }

    #[test]
    fn pos_needs_two_numbers() {
        assert!(parse_pos("52.0", None).is_none());
        assert!(parse_pos("52.0 abc", None).is_none());
        assert!(parse_pos("", None).is_none());
    }

    #[test]
    fn pos_list_skips_malformed_pairs() {
        let coords = parse_pos_list("52.0 -32.0 x 1.0 52.5 -31.5 53.0", Some(EPSG_4326), 2);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0], Coordinate::new(-32.0, 52.0));
        assert_eq!(coords[1], Coordinate::new(-31.5, 52.5));
    }

    #[test]
    fn pos_list_in_three_dimensions() {
        let coords = parse_pos_list("1 2 3 4 5 6", Some(CRS84), 3);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1], Coordinate::new(4.0, 5.0).with_elevation(Some(6.0)));
    }
}
