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

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

/// Converts the geometries of an AIXM 5.1 document to GeoJSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// AIXM document to read
    input: PathBuf,

    /// File to write the feature collection to, stdout if omitted
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let model = match aixm_geom::parse_file(&args.input) {
        Ok(model) => model,
        Err(e) => {
            error!("failed to parse {}: {e}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    info!(
        "read {} airports, {} navaids, {} points, {} airspaces and {} routes",
        model.airports.len(),
        model.navaids.len(),
        model.designated_points.len(),
        model.airspaces.len(),
        model.routes.len(),
    );

    let geojson = model.to_geojson().to_string();

    match args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, geojson) {
                error!("failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
        None => println!("{geojson}"),
    }

    ExitCode::SUCCESS
}
