// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

//! AIXM 5.1 parser with GML geometry reconstruction.
//!
//! AIXM encodes geometries as GML fragments that can't be drawn as they are:
//! coordinate pairs may list the latitude first, airspace boundaries consist
//! of arcs given by center and angles, and rings splice in shared borders
//! by reference. This crate reads the supported [features] of an AIXM
//! document and reconstructs their points, lines and polygons in longitude
//! first order.
//!
//! # Examples
//!
//! Parse a whole document at once. The borders are collected first, then all
//! features are read and the route segments are attached to their routes:
//!
//! ```no_run
//! # fn main() -> Result<(), aixm_geom::Error> {
//! let model = aixm_geom::parse_file("Donlon.xml")?;
//!
//! for airspace in &model.airspaces {
//!     println!(
//!         "{} has geometry: {}",
//!         airspace.name.as_deref().unwrap_or("unnamed"),
//!         airspace.geometry.is_some()
//!     );
//! }
//!
//! for route in &model.routes {
//!     println!("{:?}: {:?} NM", route.designator(), route.length);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The [`Features`] iterator streams the features one by one if the routes
//! don't need to be linked.
//!
//! [features]: crate::Feature

mod border;
mod error;
mod features;
#[cfg(feature = "geojson")]
mod geojson;
pub mod geom;
mod ident;
mod parser;
mod route;
mod xml;

pub use border::BorderRegistry;
pub use error::Error;
pub use features::*;
pub use geom::{Coordinate, Geometry};
pub use ident::canonical_id;
pub use parser::{parse, parse_file, Features, Model};
pub use route::link;
