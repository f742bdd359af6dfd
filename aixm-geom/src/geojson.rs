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

use geo::BoundingRect;
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue, Value};

use crate::geom::Geometry;
use crate::parser::Model;

fn rect_to_bbox(rect: geo::Rect<f64>) -> Vec<f64> {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

fn value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point(c) => match c.elevation {
            Some(z) => Value::Point(vec![c.longitude, c.latitude, z]),
            None => Value::Point(vec![c.longitude, c.latitude]),
        },
        Geometry::LineString(l) => Value::from(l),
        Geometry::Polygon(p) => Value::from(p),
        Geometry::MultiPolygon(mp) => Value::from(mp),
        Geometry::MultiLineString(ml) => Value::from(ml),
    }
}

/// Collects the properties of one feature, leaving out absent values.
struct Properties(JsonObject);

impl Properties {
    fn new(kind: &str) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("feature".to_string(), JsonValue::from(kind));
        Self(properties)
    }

    fn text(mut self, key: &str, value: &Option<String>) -> Self {
        if let Some(value) = value {
            self.0.insert(key.to_string(), JsonValue::from(value.as_str()));
        }
        self
    }

    fn number(mut self, key: &str, value: Option<f64>) -> Self {
        if let Some(value) = value {
            self.0.insert(key.to_string(), JsonValue::from(value));
        }
        self
    }
}

fn feature(uuid: &str, geometry: &Geometry, properties: Properties) -> Feature {
    let bbox = geo::Geometry::from(geometry)
        .bounding_rect()
        .map(rect_to_bbox);

    Feature {
        bbox,
        geometry: Some(geojson::Geometry::new(value(geometry))),
        id: Some(geojson::feature::Id::String(uuid.to_string())),
        properties: Some(properties.0),
        foreign_members: None,
    }
}

impl Model {
    /// Returns all features with a geometry as GeoJSON feature collection.
    ///
    /// The feature's identifier is the GeoJSON `id`, its attributes are
    /// the `properties` together with a `"feature"` entry naming the AIXM
    /// feature type. Borders and route segments are only part of the
    /// collection through the airspaces and routes.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let mut features = Vec::new();

        for ahp in &self.airports {
            if let Some(geometry) = &ahp.location {
                let properties = Properties::new("AirportHeliport")
                    .text("designator", &ahp.designator)
                    .text("name", &ahp.name)
                    .text("locationIndicatorICAO", &ahp.location_indicator_icao)
                    .text("designatorIATA", &ahp.iata_designator)
                    .number("fieldElevation", ahp.field_elevation)
                    .text("fieldElevationUom", &ahp.field_elevation_uom);
                features.push(feature(&ahp.uuid, geometry, properties));
            }
        }

        for nav in &self.navaids {
            if let Some(geometry) = &nav.location {
                let properties = Properties::new("Navaid")
                    .text("designator", &nav.designator)
                    .text("name", &nav.name)
                    .text("type", &nav.navaid_type);
                features.push(feature(&nav.uuid, geometry, properties));
            }
        }

        for dp in &self.designated_points {
            if let Some(geometry) = &dp.location {
                let properties = Properties::new("DesignatedPoint")
                    .text("designator", &dp.designator)
                    .text("name", &dp.name)
                    .text("type", &dp.point_type);
                features.push(feature(&dp.uuid, geometry, properties));
            }
        }

        for arsp in &self.airspaces {
            if let Some(geometry) = &arsp.geometry {
                // limits of the first volume
                let volume = arsp.volumes.first().cloned().unwrap_or_default();

                let properties = Properties::new("Airspace")
                    .text("type", &arsp.airspace_type)
                    .text("designator", &arsp.designator)
                    .text("name", &arsp.name)
                    .text("upperLimit", &volume.upper_limit)
                    .text("upperLimitUom", &volume.upper_limit_uom)
                    .text("upperLimitReference", &volume.upper_limit_ref)
                    .text("lowerLimit", &volume.lower_limit)
                    .text("lowerLimitUom", &volume.lower_limit_uom)
                    .text("lowerLimitReference", &volume.lower_limit_ref);
                features.push(feature(&arsp.uuid, geometry, properties));
            }
        }

        for route in &self.routes {
            if let Some(geometry) = &route.path {
                let properties = Properties::new("Route")
                    .text("designator", &route.designator())
                    .text("name", &route.name)
                    .text("type", &route.route_type)
                    .number("length", route.length)
                    .number("segments", Some(route.segments.len() as f64));
                features.push(feature(&route.uuid, geometry, properties));
            }
        }

        GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }
}
