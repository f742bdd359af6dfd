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

//! Linking of route segments to their routes.

use std::collections::HashMap;

use log::debug;

use crate::features::{Route, RouteSegment};
use crate::geom::curve;
use crate::ident::canonical_id;

/// Unit of segment lengths that are summed up to the route length.
const NAUTICAL_MILE_UOM: &str = "NM";

/// Attaches the `segments` to the `routes` they form.
///
/// Every segment whose route reference matches a route is appended to the
/// route's [`segments`](Route::segments) by its index. Segments with an
/// unknown or missing reference stay unattached. Afterwards, each route with
/// at least one segment gets the combined path and the total length of its
/// segments in nautical miles. Lengths in other units are left out.
pub fn link(routes: &mut [Route], segments: &[RouteSegment]) {
    let lookup: HashMap<String, usize> = routes
        .iter()
        .enumerate()
        .map(|(i, route)| (canonical_id(&route.uuid).to_string(), i))
        .collect();

    for (index, segment) in segments.iter().enumerate() {
        let Some(reference) = segment.route.as_deref().filter(|r| !r.is_empty()) else {
            debug!("segment {} has no route reference", segment.uuid);
            continue;
        };

        match lookup.get(canonical_id(reference)) {
            Some(&i) => routes[i].segments.push(index),
            None => debug!("segment {} references unknown route {reference}", segment.uuid),
        }
    }

    for route in routes.iter_mut().filter(|route| !route.segments.is_empty()) {
        let attached: Vec<&RouteSegment> =
            route.segments.iter().filter_map(|&i| segments.get(i)).collect();

        route.path = curve::combine(attached.iter().map(|s| s.geometry.as_ref()));
        route.length = Some(
            attached
                .iter()
                .filter(|s| s.length_uom.as_deref() == Some(NAUTICAL_MILE_UOM))
                .filter_map(|s| s.length)
                .sum(),
        );
    }
}
