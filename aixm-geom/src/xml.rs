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

//! Serde-deserializable structs that mirror the AIXM 5.1 XML structure.
//!
//! These are internal types used by the parser. They map directly to the XML
//! nesting by local element name, then get converted into the flat public
//! [`Feature`](crate::Feature) types. Every GML geometry element keeps its
//! optional `srsName` so the reference system can be inherited downwards.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared AIXM types
// ---------------------------------------------------------------------------

/// The `gml:identifier` of a feature.
#[derive(Debug, Deserialize)]
pub(crate) struct Identifier {
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValWithUom {
    #[serde(rename = "@uom", default)]
    pub uom: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

impl ValWithUom {
    pub fn number(&self) -> Option<f64> {
        self.value.as_deref()?.trim().parse().ok()
    }
}

/// An xlink reference element (e.g. `<aixm:routeFormed xlink:href="..."/>`).
#[derive(Debug, Deserialize)]
pub(crate) struct XlinkRef {
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

// ---------------------------------------------------------------------------
// GML positions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct Pos {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PosList {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(rename = "@srsDimension", default)]
    pub srs_dimension: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

/// A `gml:Point` or `aixm:ElevatedPoint`.
#[derive(Debug, Deserialize)]
pub(crate) struct PointXml {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(default)]
    pub pos: Option<Pos>,
    #[serde(default)]
    pub elevation: Option<ValWithUom>,
}

/// A `gml:pointProperty` holding an inline point.
#[derive(Debug, Deserialize)]
pub(crate) struct PointProperty {
    #[serde(rename = "Point", default)]
    pub point: Option<PointXml>,
}

/// Location of a point feature (`aixm:location`, `aixm:ARP`).
#[derive(Debug, Deserialize)]
pub(crate) struct PointLocation {
    #[serde(rename = "ElevatedPoint", default)]
    pub elevated_point: Option<PointXml>,
    #[serde(rename = "Point", default)]
    pub point: Option<PointXml>,
}

impl PointLocation {
    pub fn point(&self) -> Option<&PointXml> {
        self.elevated_point.as_ref().or(self.point.as_ref())
    }
}

// ---------------------------------------------------------------------------
// GML curves
// ---------------------------------------------------------------------------

/// One vertex element of a point sequence.
#[derive(Debug, Deserialize)]
pub(crate) enum Vertex {
    #[serde(rename = "pos")]
    Pos(Pos),
    #[serde(rename = "pointProperty")]
    PointProperty(PointProperty),
    #[serde(rename = "posList")]
    PosList(PosList),
    #[serde(other)]
    Unsupported,
}

/// A run of straight vertices (`GeodesicString`, `LineStringSegment`,
/// `LinearRing`) or the points of a three-point arc (`ArcString`, `Arc`).
///
/// `pos`, `pointProperty` and `posList` may be mixed and are kept in
/// document order.
#[derive(Debug, Deserialize)]
pub(crate) struct PointSequence {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(rename = "$value", default)]
    pub vertices: Vec<Vertex>,
}

/// `ArcByCenterPoint` and `CircleByCenterPoint`.
#[derive(Debug, Deserialize)]
pub(crate) struct ArcByCenterPoint {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(default)]
    pub pos: Option<Pos>,
    #[serde(rename = "pointProperty", default)]
    pub point_property: Option<PointProperty>,
    #[serde(rename = "posList", default)]
    pub pos_list: Option<PosList>,
    #[serde(default)]
    pub radius: Option<ValWithUom>,
    #[serde(rename = "startAngle", default)]
    pub start_angle: Option<ValWithUom>,
    #[serde(rename = "endAngle", default)]
    pub end_angle: Option<ValWithUom>,
}

/// One entry of a `gml:segments` container.
#[derive(Debug, Deserialize)]
pub(crate) enum CurveSegment {
    GeodesicString(PointSequence),
    LineStringSegment(PointSequence),
    ArcByCenterPoint(ArcByCenterPoint),
    CircleByCenterPoint(ArcByCenterPoint),
    ArcString(PointSequence),
    Arc(PointSequence),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Segments {
    #[serde(rename = "$value", default)]
    pub items: Vec<CurveSegment>,
}

/// A `gml:Curve` or `aixm:Curve`.
///
/// Usually the segments are listed in a `gml:segments` container. Some
/// producers put a single segment or a bare `posList` directly into the
/// curve, which is covered by the remaining fields.
#[derive(Debug, Deserialize)]
pub(crate) struct Curve {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(default)]
    pub segments: Option<Segments>,
    #[serde(rename = "GeodesicString", default)]
    pub geodesic_string: Option<PointSequence>,
    #[serde(rename = "LineStringSegment", default)]
    pub line_string_segment: Option<PointSequence>,
    #[serde(rename = "ArcByCenterPoint", default)]
    pub arc_by_center_point: Option<ArcByCenterPoint>,
    #[serde(rename = "CircleByCenterPoint", default)]
    pub circle_by_center_point: Option<ArcByCenterPoint>,
    #[serde(rename = "ArcString", default)]
    pub arc_string: Option<PointSequence>,
    #[serde(rename = "posList", default)]
    pub pos_list: Option<PosList>,
}

/// A member of a `gml:Ring`, either an inline curve or a reference to a
/// shared boundary.
#[derive(Debug, Deserialize)]
pub(crate) struct CurveMember {
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
    #[serde(rename = "Curve", default)]
    pub curve: Option<Curve>,
}

// ---------------------------------------------------------------------------
// GML surfaces
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct Ring {
    #[serde(rename = "curveMember", default)]
    pub curve_members: Vec<CurveMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Exterior {
    #[serde(rename = "Ring", default)]
    pub ring: Option<Ring>,
    #[serde(rename = "LinearRing", default)]
    pub linear_ring: Option<PointSequence>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PolygonPatch {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(default)]
    pub exterior: Option<Exterior>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Patches {
    #[serde(rename = "PolygonPatch", default)]
    pub polygon_patches: Vec<PolygonPatch>,
}

/// A `gml:Surface` or `aixm:Surface`.
#[derive(Debug, Deserialize)]
pub(crate) struct Surface {
    #[serde(rename = "@srsName", default)]
    pub srs_name: Option<String>,
    #[serde(default)]
    pub patches: Option<Patches>,
}

// ---------------------------------------------------------------------------
// AirportHeliport
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AirportHeliportXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: AhpTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhpTimeSliceWrapper {
    #[serde(rename = "AirportHeliportTimeSlice")]
    pub inner: AhpTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhpTimeSlice {
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "locationIndicatorICAO", default)]
    pub location_indicator_icao: Option<String>,
    #[serde(rename = "designatorIATA", default)]
    pub iata_designator: Option<String>,
    #[serde(rename = "fieldElevation", default)]
    pub field_elevation: Option<ValWithUom>,
    #[serde(rename = "ARP", default)]
    pub arp: Option<PointLocation>,
}

// ---------------------------------------------------------------------------
// DesignatedPoint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DesignatedPointXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: DpTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DpTimeSliceWrapper {
    #[serde(rename = "DesignatedPointTimeSlice")]
    pub inner: DpTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DpTimeSlice {
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub point_type: Option<String>,
    #[serde(default)]
    pub location: Option<PointLocation>,
}

// ---------------------------------------------------------------------------
// Navaid
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct NavaidXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: NavTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavTimeSliceWrapper {
    #[serde(rename = "NavaidTimeSlice")]
    pub inner: NavTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavTimeSlice {
    #[serde(rename = "type", default)]
    pub navaid_type: Option<String>,
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<PointLocation>,
}

// ---------------------------------------------------------------------------
// Airspace
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: ArspTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArspTimeSliceWrapper {
    #[serde(rename = "AirspaceTimeSlice")]
    pub inner: ArspTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArspTimeSlice {
    #[serde(rename = "type", default)]
    pub airspace_type: Option<String>,
    #[serde(default)]
    pub designator: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "geometryComponent", default)]
    pub geometry_components: Vec<AirspaceGeometryComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceGeometryComponent {
    #[serde(rename = "AirspaceGeometryComponent")]
    pub inner: Option<AirspaceGeometryComponentInner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceGeometryComponentInner {
    #[serde(rename = "theAirspaceVolume")]
    pub the_airspace_volume: Option<TheAirspaceVolume>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TheAirspaceVolume {
    #[serde(rename = "AirspaceVolume")]
    pub volume: Option<AirspaceVolumeXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceVolumeXml {
    #[serde(rename = "upperLimit", default)]
    pub upper_limit: Option<ValWithUom>,
    #[serde(rename = "upperLimitReference", default)]
    pub upper_limit_reference: Option<String>,
    #[serde(rename = "lowerLimit", default)]
    pub lower_limit: Option<ValWithUom>,
    #[serde(rename = "lowerLimitReference", default)]
    pub lower_limit_reference: Option<String>,
    #[serde(rename = "horizontalProjection", default)]
    pub horizontal_projection: Option<HorizontalProjection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HorizontalProjection {
    #[serde(rename = "Surface")]
    pub surface: Option<Surface>,
}

// ---------------------------------------------------------------------------
// GeoBorder
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GeoBorderXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: GbTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GbTimeSliceWrapper {
    #[serde(rename = "GeoBorderTimeSlice")]
    pub inner: GbTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GbTimeSlice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub border_type: Option<String>,
    #[serde(default)]
    pub border: Option<CurveProperty>,
}

/// A property holding a curve (`aixm:border`, `aixm:curveExtent`).
#[derive(Debug, Deserialize)]
pub(crate) struct CurveProperty {
    #[serde(rename = "Curve", default)]
    pub curve: Option<Curve>,
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RouteXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: RteTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RteTimeSliceWrapper {
    #[serde(rename = "RouteTimeSlice")]
    pub inner: RteTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RteTimeSlice {
    #[serde(rename = "designatorPrefix", default)]
    pub designator_prefix: Option<String>,
    #[serde(rename = "designatorSecondLetter", default)]
    pub designator_second_letter: Option<String>,
    #[serde(rename = "designatorNumber", default)]
    pub designator_number: Option<String>,
    #[serde(rename = "multipleIdentifier", default)]
    pub multiple_identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub route_type: Option<String>,
}

// ---------------------------------------------------------------------------
// RouteSegment
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RouteSegmentXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Identifier>,
    #[serde(rename = "timeSlice")]
    pub time_slice: RsgTimeSliceWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RsgTimeSliceWrapper {
    #[serde(rename = "RouteSegmentTimeSlice")]
    pub inner: RsgTimeSlice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RsgTimeSlice {
    #[serde(default)]
    pub length: Option<ValWithUom>,
    #[serde(rename = "routeFormed", default)]
    pub route_formed: Option<XlinkRef>,
    #[serde(default)]
    pub start: Option<SegmentPointProperty>,
    #[serde(default)]
    pub end: Option<SegmentPointProperty>,
    #[serde(rename = "curveExtent", default)]
    pub curve_extent: Option<CurveProperty>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SegmentPointProperty {
    #[serde(rename = "EnRouteSegmentPoint", default)]
    pub point: Option<EnRouteSegmentPoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnRouteSegmentPoint {
    #[serde(rename = "pointChoice_fixDesignatedPoint", default)]
    pub fix_designated_point: Option<XlinkRef>,
    #[serde(rename = "pointChoice_navaidSystem", default)]
    pub navaid_system: Option<XlinkRef>,
}

impl EnRouteSegmentPoint {
    /// Returns the reference to the designated point or navaid.
    pub fn href(&self) -> Option<&str> {
        self.fix_designated_point
            .as_ref()
            .and_then(|r| r.href.as_deref())
            .or_else(|| self.navaid_system.as_ref().and_then(|r| r.href.as_deref()))
    }
}
