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

//! Canonical identifiers.
//!
//! AIXM refers to the same feature in several spellings: the `gml:id`
//! attribute (`uuid.1b54...`), the `gml:identifier` element
//! (`1b54...` with a `urn:uuid:` code space) and `xlink:href` references
//! (`urn:uuid:1b54...` or `#uuid.1b54...`). All of them are reduced to the
//! same canonical string here.

/// Marker of a document-local reference (`xlink:href="#..."`).
const REFERENCE_MARKER: char = '#';

/// Namespace prefixes stripped from identifiers, checked in this order.
const PREFIXES: [&str; 4] = ["urn:uuid:", "uuid.", "uuid:", "urn:"];

/// Returns the canonical form of an identifier or reference.
///
/// Strips one leading `#` and then the first matching prefix of
/// `urn:uuid:`, `uuid.`, `uuid:` and `urn:` (compared case-insensitively).
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use aixm_geom::canonical_id;
///
/// assert_eq!(canonical_id("urn:uuid:1b54b2d6"), "1b54b2d6");
/// assert_eq!(canonical_id("#uuid.1b54b2d6"), "1b54b2d6");
/// assert_eq!(canonical_id("1b54b2d6"), "1b54b2d6");
/// ```
pub fn canonical_id(id: &str) -> &str {
    let id = id.trim();
    let id = id.strip_prefix(REFERENCE_MARKER).unwrap_or(id);

    PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(id, prefix))
        .unwrap_or(id)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
