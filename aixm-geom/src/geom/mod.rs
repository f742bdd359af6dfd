// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Geometry reconstruction.
//!
//! Coordinates are always stored longitude first. The submodules turn raw GML
//! content into [`Geometry`] values:
//!
//! - [`axis`] resolves the axis order of coordinate pairs,
//! - [`arc`] synthesizes circles and arcs on a spherical earth,
//! - [`curve`] builds line strings and route paths,
//! - [`surface`] assembles, closes and repairs polygon rings.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod arc;
pub mod axis;
pub mod curve;
pub mod surface;

/// Coordinate in WGS-84 decimal degrees.
///
/// Unlike the GML source, which may list latitude first, the fields are
/// unambiguous once a coordinate was produced by [`axis::resolve`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,

    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Elevation, if the source declared one.
    pub elevation: Option<f64>,
}

impl Coordinate {
    /// Creates a new coordinate without elevation.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: None,
        }
    }

    /// Returns this coordinate with the `elevation` attached.
    pub fn with_elevation(self, elevation: Option<f64>) -> Self {
        Self { elevation, ..self }
    }

    /// Returns `true` if both coordinates describe the same horizontal
    /// position.
    pub fn same_position(&self, other: &Coordinate) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.elevation {
            Some(z) => write!(f, "({0}, {1}, {2})", self.longitude, self.latitude, z),
            None => write!(f, "({0}, {1})", self.longitude, self.latitude),
        }
    }
}

/// Reconstructed feature geometry.
///
/// The line and area variants use 2D `geo` types with `x` as longitude and
/// `y` as latitude, so an elevation given for their vertices (e.g. a
/// `posList` with `srsDimension="3"`) is dropped. Only points keep the full
/// [`Coordinate`] including the elevation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Point(Coordinate),
    LineString(geo::LineString<f64>),
    Polygon(geo::Polygon<f64>),
    MultiPolygon(geo::MultiPolygon<f64>),
    MultiLineString(geo::MultiLineString<f64>),
}

impl Geometry {
    /// Returns the polygons of an area geometry, or `None` for points and
    /// lines.
    pub fn to_multi_polygon(&self) -> Option<geo::MultiPolygon<f64>> {
        match self {
            Self::Polygon(p) => Some(geo::MultiPolygon::new(vec![p.clone()])),
            Self::MultiPolygon(mp) => Some(mp.clone()),
            _ => None,
        }
    }
}

impl From<&Geometry> for geo::Geometry<f64> {
    fn from(g: &Geometry) -> Self {
        match g {
            Geometry::Point(c) => geo::Geometry::Point((*c).into()),
            Geometry::LineString(l) => geo::Geometry::LineString(l.clone()),
            Geometry::Polygon(p) => geo::Geometry::Polygon(p.clone()),
            Geometry::MultiPolygon(mp) => geo::Geometry::MultiPolygon(mp.clone()),
            Geometry::MultiLineString(ml) => geo::Geometry::MultiLineString(ml.clone()),
        }
    }
}

/// Converts a sequence of coordinates into a `geo` line string.
pub(crate) fn line_string(coords: &[Coordinate]) -> geo::LineString<f64> {
    coords
        .iter()
        .map(|&c| geo::Coord::from(c))
        .collect::<Vec<_>>()
        .into()
}
