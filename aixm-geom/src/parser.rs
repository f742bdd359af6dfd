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

use std::path::Path;

use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::border::BorderRegistry;
use crate::error::Error;
use crate::features::*;
use crate::geom::{curve, surface, Geometry};
use crate::ident::canonical_id;
use crate::route;
use crate::xml;

/// Streaming iterator over AIXM features in an XML document.
///
/// Yields one [`Feature`] at a time as it encounters supported AIXM feature
/// elements in the XML stream. Unsupported elements are silently skipped. A
/// feature that can't be deserialized is yielded as
/// [`Error::InvalidFeature`] and the iteration continues. A malformed XML
/// stream ends the iteration after yielding the error.
///
/// # Examples
///
/// ```
/// use aixm_geom::{Feature, Features, Geometry};
///
/// let xml = br#"
///   <message:AIXMBasicMessage
///     xmlns:aixm="http://www.aixm.aero/schema/5.1"
///     xmlns:gml="http://www.opengis.net/gml/3.2"
///     xmlns:message="http://www.aixm.aero/schema/5.1/message">
///     <message:hasMember>
///       <aixm:DesignatedPoint gml:id="uuid.abc">
///         <gml:identifier codeSpace="urn:uuid:">abc</gml:identifier>
///         <aixm:timeSlice>
///           <aixm:DesignatedPointTimeSlice gml:id="DP1">
///             <aixm:interpretation>BASELINE</aixm:interpretation>
///             <aixm:designator>ABLAN</aixm:designator>
///             <aixm:location>
///               <aixm:Point srsName="urn:ogc:def:crs:EPSG::4326">
///                 <gml:pos>52.123 10.456</gml:pos>
///               </aixm:Point>
///             </aixm:location>
///           </aixm:DesignatedPointTimeSlice>
///         </aixm:timeSlice>
///       </aixm:DesignatedPoint>
///     </message:hasMember>
///   </message:AIXMBasicMessage>"#;
///
/// let features: Vec<_> = Features::new(&xml[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(features.len(), 1);
/// match &features[0] {
///     Feature::DesignatedPoint(dp) => {
///         assert!(matches!(dp.location, Some(Geometry::Point(_))));
///     }
///     _ => unreachable!(),
/// }
/// ```
pub struct Features<'a> {
    reader: Reader<&'a [u8]>,
    data: &'a [u8],
    buf: Vec<u8>,
    borders: BorderRegistry,
    only: Option<FeatureKind>,
    done: bool,
}

impl<'a> Features<'a> {
    /// Creates a new `Features` iterator from a byte slice.
    ///
    /// Ring members that reference a `GeoBorder` are skipped, use
    /// [`with_borders`](Self::with_borders) to splice them in.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_borders(data, BorderRegistry::default())
    }

    /// Creates a new `Features` iterator that resolves border references of
    /// airspace rings with the `borders`.
    pub fn with_borders(data: &'a [u8], borders: BorderRegistry) -> Self {
        let mut reader = Reader::from_reader(data);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            data,
            buf: Vec::new(),
            borders,
            only: None,
            done: false,
        }
    }

    /// Creates an iterator that yields only `GeoBorder` features.
    pub(crate) fn borders_only(data: &'a [u8]) -> Self {
        Self {
            only: Some(FeatureKind::GeoBorder),
            ..Self::new(data)
        }
    }

    /// Reads the subtree of the current start tag and deserializes it.
    fn read_feature(&mut self, kind: FeatureKind, tag: String) -> Result<Feature, Error> {
        let end = quick_xml::events::BytesEnd::new(end_tag_name(&tag));
        let span = self.reader.read_to_end(end.name())?;

        let content = std::str::from_utf8(&self.data[span.start as usize..span.end as usize])?;
        let xml = format!("<{tag}>{content}</{}>", end_tag_name(&tag));

        deserialize_feature(kind, &xml, &self.borders)
    }
}

impl Iterator for Features<'_> {
    type Item = Result<Feature, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            let kind = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    let Some(kind) = FeatureKind::from_local_name(local_name(name.as_ref()))
                    else {
                        continue;
                    };
                    if self.only.is_some_and(|only| only != kind) {
                        continue;
                    }
                    // start tag text including its attributes
                    Ok((kind, String::from_utf8_lossy(e.as_ref()).to_string()))
                }
                Ok(Event::Eof) => return None,
                Err(e) => Err(Error::from(e)),
                _ => continue,
            };

            let result = kind.and_then(|(kind, tag)| self.read_feature(kind, tag));
            if let Err(e) = &result {
                self.done = e.is_fatal();
            }

            return Some(result);
        }
    }
}

/// Which kind of feature we're deserializing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum FeatureKind {
    AirportHeliport,
    DesignatedPoint,
    Navaid,
    Airspace,
    GeoBorder,
    Route,
    RouteSegment,
}

impl FeatureKind {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"AirportHeliport" => Some(Self::AirportHeliport),
            b"DesignatedPoint" => Some(Self::DesignatedPoint),
            b"Navaid" => Some(Self::Navaid),
            b"Airspace" => Some(Self::Airspace),
            b"GeoBorder" => Some(Self::GeoBorder),
            b"Route" => Some(Self::Route),
            b"RouteSegment" => Some(Self::RouteSegment),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::AirportHeliport => "AirportHeliport",
            Self::DesignatedPoint => "DesignatedPoint",
            Self::Navaid => "Navaid",
            Self::Airspace => "Airspace",
            Self::GeoBorder => "GeoBorder",
            Self::Route => "Route",
            Self::RouteSegment => "RouteSegment",
        }
    }
}

/// Deserializes a feature XML fragment into the public [`Feature`] type.
fn deserialize_feature(
    kind: FeatureKind,
    xml: &str,
    borders: &BorderRegistry,
) -> Result<Feature, Error> {
    let invalid = |e: quick_xml::DeError| Error::InvalidFeature {
        kind: kind.as_str(),
        reason: e.to_string(),
    };

    Ok(match kind {
        FeatureKind::AirportHeliport => {
            let x: xml::AirportHeliportXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::AirportHeliport(x.into())
        }
        FeatureKind::DesignatedPoint => {
            let x: xml::DesignatedPointXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::DesignatedPoint(x.into())
        }
        FeatureKind::Navaid => {
            let x: xml::NavaidXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::Navaid(x.into())
        }
        FeatureKind::Airspace => {
            let x: xml::AirspaceXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::Airspace(airspace(x, borders))
        }
        FeatureKind::GeoBorder => {
            let x: xml::GeoBorderXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::GeoBorder(x.into())
        }
        FeatureKind::Route => {
            let x: xml::RouteXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::Route(x.into())
        }
        FeatureKind::RouteSegment => {
            let x: xml::RouteSegmentXml = quick_xml::de::from_str(xml).map_err(invalid)?;
            Feature::RouteSegment(x.into())
        }
    })
}

/// Returns the local name of an XML element, stripping any namespace prefix.
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .position(|&b| b == b':')
        .map_or(name, |pos| &name[pos + 1..])
}

/// Returns the qualified element name of a start tag's text.
fn end_tag_name(tag: &str) -> &str {
    tag.split_ascii_whitespace().next().unwrap_or(tag)
}

// ---------------------------------------------------------------------------
// Parse pass
// ---------------------------------------------------------------------------

/// All supported features of one AIXM document.
///
/// The routes already have their segments attached.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub airports: Vec<AirportHeliport>,
    pub navaids: Vec<Navaid>,
    pub designated_points: Vec<DesignatedPoint>,
    pub airspaces: Vec<Airspace>,
    pub borders: Vec<GeoBorder>,
    pub routes: Vec<Route>,
    pub route_segments: Vec<RouteSegment>,
}

impl Model {
    /// Returns the number of route segments attached to a route.
    pub fn linked_segment_count(&self) -> usize {
        self.routes.iter().map(|route| route.segments.len()).sum()
    }

    fn push(&mut self, feature: Feature) {
        match feature {
            Feature::AirportHeliport(f) => self.airports.push(f),
            Feature::DesignatedPoint(f) => self.designated_points.push(f),
            Feature::Navaid(f) => self.navaids.push(f),
            Feature::Airspace(f) => self.airspaces.push(f),
            Feature::GeoBorder(f) => self.borders.push(f),
            Feature::Route(f) => self.routes.push(f),
            Feature::RouteSegment(f) => self.route_segments.push(f),
        }
    }
}

/// Parses an AIXM document into a [`Model`].
///
/// The borders are collected first so that airspace rings can reference
/// them. After all features are read, the route segments are attached to
/// their routes. Features that fail to deserialize are skipped, only a
/// malformed XML stream fails the parse.
///
/// # Examples
///
/// ```
/// let model = aixm_geom::parse(b"<message:AIXMBasicMessage/>").unwrap();
/// assert!(model.airspaces.is_empty());
/// ```
pub fn parse(data: &[u8]) -> Result<Model, Error> {
    let borders = BorderRegistry::scan(data)?;
    let mut model = Model::default();

    for result in Features::with_borders(data, borders) {
        match result {
            Ok(feature) => model.push(feature),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => warn!("skipping feature: {e}"),
        }
    }

    route::link(&mut model.routes, &model.route_segments);

    debug!(
        "parsed {} airspaces, {} routes with {} of {} segments linked",
        model.airspaces.len(),
        model.routes.len(),
        model.linked_segment_count(),
        model.route_segments.len(),
    );

    Ok(model)
}

/// Reads and parses the AIXM document at `path`.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Model, Error> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::MissingInput);
    }

    let data = std::fs::read(path)?;
    parse(&data)
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public feature types
// ---------------------------------------------------------------------------

/// Returns the canonical identity of a feature, preferring the declared
/// `gml:identifier` over the `gml:id`.
fn uuid(identifier: Option<xml::Identifier>, gml_id: Option<&str>) -> String {
    identifier
        .and_then(|i| i.value)
        .filter(|v| !v.trim().is_empty())
        .as_deref()
        .or(gml_id)
        .map(canonical_id)
        .unwrap_or_default()
        .to_string()
}

fn reference(href: Option<&str>) -> Option<String> {
    href.map(canonical_id)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn location(location: Option<xml::PointLocation>) -> Option<Geometry> {
    let location = location?;
    let point = location.point()?;
    curve::point(point, None).map(Geometry::Point)
}

impl From<xml::AirportHeliportXml> for AirportHeliport {
    fn from(x: xml::AirportHeliportXml) -> Self {
        let ts = x.time_slice.inner;

        AirportHeliport {
            uuid: uuid(x.identifier, x.id.as_deref()),
            designator: ts.designator,
            name: ts.name,
            location_indicator_icao: ts.location_indicator_icao,
            iata_designator: ts.iata_designator,
            field_elevation: ts.field_elevation.as_ref().and_then(xml::ValWithUom::number),
            field_elevation_uom: ts.field_elevation.and_then(|v| v.uom),
            location: location(ts.arp),
        }
    }
}

impl From<xml::DesignatedPointXml> for DesignatedPoint {
    fn from(x: xml::DesignatedPointXml) -> Self {
        let ts = x.time_slice.inner;

        DesignatedPoint {
            uuid: uuid(x.identifier, x.id.as_deref()),
            designator: ts.designator,
            name: ts.name,
            point_type: ts.point_type,
            location: location(ts.location),
        }
    }
}

impl From<xml::NavaidXml> for Navaid {
    fn from(x: xml::NavaidXml) -> Self {
        let ts = x.time_slice.inner;

        Navaid {
            uuid: uuid(x.identifier, x.id.as_deref()),
            designator: ts.designator,
            name: ts.name,
            navaid_type: ts.navaid_type,
            location: location(ts.location),
        }
    }
}

fn airspace(x: xml::AirspaceXml, borders: &BorderRegistry) -> Airspace {
    let ts = x.time_slice.inner;
    let uuid = uuid(x.identifier, x.id.as_deref());

    let volumes: Vec<AirspaceVolume> = ts
        .geometry_components
        .into_iter()
        .filter_map(|gc| gc.inner)
        .filter_map(|gc| gc.the_airspace_volume)
        .filter_map(|tav| tav.volume)
        .map(|vol| AirspaceVolume {
            geometry: vol
                .horizontal_projection
                .as_ref()
                .and_then(|hp| hp.surface.as_ref())
                .and_then(|s| surface::surface(s, borders, None)),
            upper_limit: vol.upper_limit.as_ref().and_then(|v| v.value.clone()),
            upper_limit_uom: vol.upper_limit.and_then(|v| v.uom),
            upper_limit_ref: vol.upper_limit_reference,
            lower_limit: vol.lower_limit.as_ref().and_then(|v| v.value.clone()),
            lower_limit_uom: vol.lower_limit.and_then(|v| v.uom),
            lower_limit_ref: vol.lower_limit_reference,
        })
        .collect();

    let geometry = surface::union(volumes.iter().filter_map(|v| v.geometry.clone()).collect());
    if geometry.is_none() {
        debug!("airspace {uuid} has no geometry");
    }

    Airspace {
        uuid,
        airspace_type: ts.airspace_type,
        designator: ts.designator,
        name: ts.name,
        volumes,
        geometry,
    }
}

impl From<xml::GeoBorderXml> for GeoBorder {
    fn from(x: xml::GeoBorderXml) -> Self {
        let ts = x.time_slice.inner;

        GeoBorder {
            uuid: uuid(x.identifier, x.id.as_deref()),
            gml_id: reference(x.id.as_deref()),
            name: ts.name,
            border_type: ts.border_type,
            coordinates: ts
                .border
                .and_then(|b| b.curve)
                .map(|c| curve::simple_curve(&c, None))
                .unwrap_or_default(),
        }
    }
}

impl From<xml::RouteXml> for Route {
    fn from(x: xml::RouteXml) -> Self {
        let ts = x.time_slice.inner;

        Route {
            uuid: uuid(x.identifier, x.id.as_deref()),
            designator_prefix: ts.designator_prefix,
            designator_second_letter: ts.designator_second_letter,
            designator_number: ts.designator_number,
            multiple_identifier: ts.multiple_identifier,
            name: ts.name,
            route_type: ts.route_type,
            ..Default::default()
        }
    }
}

impl From<xml::RouteSegmentXml> for RouteSegment {
    fn from(x: xml::RouteSegmentXml) -> Self {
        let ts = x.time_slice.inner;
        let point_ref = |p: Option<xml::SegmentPointProperty>| {
            p.and_then(|p| p.point)
                .and_then(|p| reference(p.href()))
        };

        RouteSegment {
            uuid: uuid(x.identifier, x.id.as_deref()),
            route: ts
                .route_formed
                .and_then(|r| reference(r.href.as_deref())),
            start: point_ref(ts.start),
            end: point_ref(ts.end),
            length: ts.length.as_ref().and_then(xml::ValWithUom::number),
            length_uom: ts.length.and_then(|v| v.uom),
            geometry: ts
                .curve_extent
                .and_then(|c| c.curve)
                .and_then(|c| curve::parse(&c, None)),
        }
    }
}
