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

//! Public AIXM feature types yielded by the [`Features`](crate::Features)
//! iterator.
//!
//! Each struct is a flat representation of one AIXM 5.1 feature with its
//! geometry already reconstructed. Identifiers and references are canonical
//! (see [`canonical_id`](crate::canonical_id)) so they can be compared
//! directly. Absent values are `None`, never a sentinel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::{Coordinate, Geometry};

/// A parsed AIXM feature yielded by [`Features`](crate::Features).
///
/// # Examples
///
/// ```no_run
/// # let data = vec![];
/// for result in aixm_geom::Features::new(&data) {
///     match result.unwrap() {
///         aixm_geom::Feature::Navaid(nav) => {
///             println!("{:?} at {:?}", nav.designator, nav.location);
///         }
///         aixm_geom::Feature::Airspace(arsp) => {
///             println!("{:?} has geometry: {}", arsp.name, arsp.geometry.is_some());
///         }
///         _ => {}
///     }
/// }
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    /// An airport or heliport (AIXM `AirportHeliport`).
    AirportHeliport(AirportHeliport),
    /// A named waypoint or fix (AIXM `DesignatedPoint`).
    DesignatedPoint(DesignatedPoint),
    /// A radio navigation aid (AIXM `Navaid`).
    Navaid(Navaid),
    /// An airspace with its reconstructed boundary (AIXM `Airspace`).
    Airspace(Airspace),
    /// A shared boundary curve (AIXM `GeoBorder`).
    GeoBorder(GeoBorder),
    /// An en-route airway (AIXM `Route`).
    Route(Route),
    /// One leg of a route (AIXM `RouteSegment`).
    RouteSegment(RouteSegment),
}

impl Feature {
    /// Returns the canonical identifier of the feature.
    pub fn uuid(&self) -> &str {
        match self {
            Self::AirportHeliport(f) => &f.uuid,
            Self::DesignatedPoint(f) => &f.uuid,
            Self::Navaid(f) => &f.uuid,
            Self::Airspace(f) => &f.uuid,
            Self::GeoBorder(f) => &f.uuid,
            Self::Route(f) => &f.uuid,
            Self::RouteSegment(f) => &f.uuid,
        }
    }
}

/// An airport or heliport parsed from an AIXM `AirportHeliport` feature.
///
/// # Examples
///
/// ```no_run
/// # let ahp: aixm_geom::AirportHeliport = unimplemented!();
/// // Use the ICAO indicator for lookup, falling back to the designator
/// let ident = ahp.location_indicator_icao
///     .as_deref()
///     .or(ahp.designator.as_deref());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportHeliport {
    /// Canonical identifier (e.g. `"dd062d88-3e64-4a5d-bebd-89476db9ebea"`).
    pub uuid: String,
    /// Designator (e.g. `"EADH"`).
    pub designator: Option<String>,
    /// Human-readable name (e.g. `"DONLON/DOWNTOWN HELIPORT"`).
    pub name: Option<String>,
    /// ICAO location indicator, if assigned.
    pub location_indicator_icao: Option<String>,
    /// IATA designator, if assigned.
    pub iata_designator: Option<String>,
    /// Field elevation value.
    pub field_elevation: Option<f64>,
    /// Unit of measurement for [`field_elevation`](Self::field_elevation)
    /// (e.g. `"M"`, `"FT"`).
    pub field_elevation_uom: Option<String>,
    /// Aerodrome reference point as [`Geometry::Point`].
    pub location: Option<Geometry>,
}

/// A named waypoint or fix, parsed from an AIXM `DesignatedPoint` feature.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignatedPoint {
    pub uuid: String,
    /// Fix identifier (e.g. `"ABLAN"`).
    pub designator: Option<String>,
    pub name: Option<String>,
    /// Type code (e.g. `"ICAO"`, `"COORD"`).
    pub point_type: Option<String>,
    pub location: Option<Geometry>,
}

/// A radio navigation aid, parsed from an AIXM `Navaid` feature.
///
/// The station elevation, if declared, is the elevation of the
/// [`location`](Self::location) point.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub uuid: String,
    /// Identifier (e.g. `"BOR"`).
    pub designator: Option<String>,
    /// Human-readable name (e.g. `"BOORSPIJK"`).
    pub name: Option<String>,
    /// Type code (e.g. `"VOR"`, `"VOR_DME"`, `"NDB"`, `"TACAN"`).
    pub navaid_type: Option<String>,
    pub location: Option<Geometry>,
}

/// An airspace, parsed from an AIXM `Airspace` feature.
///
/// Every volume keeps its own horizontal projection. The
/// [`geometry`](Self::geometry) of the airspace is the union of them.
///
/// # Examples
///
/// ```no_run
/// # let arsp: aixm_geom::Airspace = unimplemented!();
/// if arsp.airspace_type.as_deref() == Some("CTR") {
///     println!("Control zone: {}", arsp.name.as_deref().unwrap_or("unnamed"));
/// }
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub uuid: String,
    /// Airspace type code (e.g. `"CTR"`, `"TMA"`, `"D"`, `"R"`, `"P"`).
    pub airspace_type: Option<String>,
    /// Designator (e.g. `"EADD CTR"`).
    pub designator: Option<String>,
    pub name: Option<String>,
    /// Geometry volumes with vertical limits and horizontal boundaries.
    pub volumes: Vec<AirspaceVolume>,
    /// Union of all volume geometries.
    pub geometry: Option<Geometry>,
}

/// A single airspace volume with vertical limits and a horizontal
/// projection.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirspaceVolume {
    /// Upper vertical limit value (e.g. `"195"`, `"UNL"`).
    pub upper_limit: Option<String>,
    /// Upper limit unit (e.g. `"FL"`, `"FT"`, `"M"`).
    pub upper_limit_uom: Option<String>,
    /// Upper limit datum reference (e.g. `"MSL"`, `"SFC"`).
    pub upper_limit_ref: Option<String>,
    /// Lower vertical limit value (e.g. `"GND"`, `"0"`).
    pub lower_limit: Option<String>,
    pub lower_limit_uom: Option<String>,
    pub lower_limit_ref: Option<String>,
    /// Polygon or multi polygon of the horizontal projection.
    pub geometry: Option<Geometry>,
}

/// A shared boundary, parsed from an AIXM `GeoBorder` feature.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBorder {
    pub uuid: String,
    /// Canonical `gml:id`, under which rings may reference the border as
    /// well.
    pub gml_id: Option<String>,
    pub name: Option<String>,
    /// Border type (e.g. `"STATE"`, `"COASTLINE"`).
    pub border_type: Option<String>,
    /// Vertices of the border curve in document order.
    pub coordinates: Vec<Coordinate>,
}

/// An en-route airway, parsed from an AIXM `Route` feature.
///
/// The segments are attached after all features were read, see
/// [`parse`](crate::parse).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub uuid: String,
    /// Designator prefix (e.g. `"U"` for upper airspace).
    pub designator_prefix: Option<String>,
    /// Second letter of the designator (e.g. `"L"`).
    pub designator_second_letter: Option<String>,
    /// Number of the designator (e.g. `"980"`).
    pub designator_number: Option<String>,
    pub multiple_identifier: Option<String>,
    pub name: Option<String>,
    /// Route type (e.g. `"ATS"`).
    pub route_type: Option<String>,
    /// Indices of the attached segments in
    /// [`Model::route_segments`](crate::Model::route_segments), in the order
    /// they were attached.
    pub segments: Vec<usize>,
    /// Path of all attached segments.
    pub path: Option<Geometry>,
    /// Total length in nautical miles of the attached segments that declare
    /// their length in `NM`.
    pub length: Option<f64>,
}

impl Route {
    /// Returns the full designator (e.g. `"UL980"`), or `None` if no part
    /// of it is declared.
    ///
    /// # Examples
    ///
    /// ```
    /// let route = aixm_geom::Route {
    ///     designator_prefix: Some("U".to_string()),
    ///     designator_second_letter: Some("L".to_string()),
    ///     designator_number: Some("980".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(route.designator().as_deref(), Some("UL980"));
    /// ```
    pub fn designator(&self) -> Option<String> {
        let designator: String = [
            &self.designator_prefix,
            &self.designator_second_letter,
            &self.designator_number,
            &self.multiple_identifier,
        ]
        .into_iter()
        .flatten()
        .map(|part| part.trim())
        .collect();

        if designator.is_empty() {
            None
        } else {
            Some(designator)
        }
    }
}

/// One leg of a route, parsed from an AIXM `RouteSegment` feature.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteSegment {
    pub uuid: String,
    /// Canonical reference to the [`Route`] formed by this segment.
    pub route: Option<String>,
    /// Canonical reference to the designated point or navaid at the start.
    pub start: Option<String>,
    /// Canonical reference to the designated point or navaid at the end.
    pub end: Option<String>,
    pub length: Option<f64>,
    /// Unit of measurement for [`length`](Self::length) (e.g. `"NM"`).
    pub length_uom: Option<String>,
    /// Line geometry of the segment's curve extent.
    pub geometry: Option<Geometry>,
}
