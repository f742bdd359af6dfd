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

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::Error;
use crate::features::{Feature, GeoBorder};
use crate::geom::Coordinate;
use crate::ident::canonical_id;
use crate::parser::Features;

/// Lookup of shared boundary curves by their identity.
///
/// Airspace rings may reference a `GeoBorder` instead of repeating its
/// vertices. The registry holds the vertices of every border of a document
/// so that surface assembly can splice them into the ring. Keys are
/// canonical identifiers compared case-insensitively.
///
/// # Examples
///
/// ```
/// use aixm_geom::{BorderRegistry, Coordinate};
///
/// let mut borders = BorderRegistry::default();
/// borders.insert("urn:uuid:A1", vec![Coordinate::new(8.0, 50.0)]);
///
/// assert!(borders.get("#uuid.a1").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BorderRegistry {
    entries: HashMap<String, Vec<Coordinate>>,
}

impl BorderRegistry {
    /// Collects all borders of an AIXM document.
    ///
    /// Only a malformed XML stream fails the scan. Borders that can't be
    /// deserialized are skipped.
    pub fn scan(data: &[u8]) -> Result<Self, Error> {
        let mut registry = Self::default();

        for result in Features::borders_only(data) {
            match result {
                Ok(Feature::GeoBorder(border)) => registry.insert_border(&border),
                Ok(_) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => warn!("skipping border: {e}"),
            }
        }

        debug!("found {} border identities", registry.len());
        Ok(registry)
    }

    /// Adds the coordinates of a border under `id`.
    ///
    /// An empty coordinate list is not added.
    pub fn insert(&mut self, id: &str, coordinates: Vec<Coordinate>) {
        if coordinates.is_empty() {
            debug!("ignoring border {id} without coordinates");
            return;
        }

        self.entries.insert(key(id), coordinates);
    }

    /// Adds a border under its identifier and its `gml:id`.
    pub fn insert_border(&mut self, border: &GeoBorder) {
        if border.coordinates.is_empty() {
            debug!("ignoring border {} without coordinates", border.uuid);
            return;
        }

        self.insert(&border.uuid, border.coordinates.clone());
        if let Some(gml_id) = border.gml_id.as_deref() {
            self.insert(gml_id, border.coordinates.clone());
        }
    }

    /// Returns the coordinates of the border referenced by `id`, which may
    /// be any spelling of the identifier (e.g. an `xlink:href`).
    pub fn get(&self, id: &str) -> Option<&[Coordinate]> {
        self.entries.get(&key(id)).map(Vec::as_slice)
    }

    /// Returns the number of identities in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key(id: &str) -> String {
    canonical_id(id).to_lowercase()
}
