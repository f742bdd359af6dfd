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

use std::fmt;

/// Errors raised while reading an AIXM document.
///
/// Only [`MissingInput`](Self::MissingInput), [`Io`](Self::Io) and
/// [`Xml`](Self::Xml) abort a [`parse`](crate::parse). A feature that fails
/// with [`InvalidFeature`](Self::InvalidFeature) is dropped and the pass
/// continues with the next one.
#[derive(Clone, Debug)]
pub enum Error {
    /// No input document was named (e.g. an empty path).
    MissingInput,
    /// The input document could not be read.
    Io(String),
    /// An XML parsing error from the underlying parser.
    Xml(String),
    /// A single feature fragment could not be deserialized.
    InvalidFeature { kind: &'static str, reason: String },
}

impl Error {
    /// Returns `true` if the error ends the whole parse pass.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingInput | Self::Io(_) | Self::Xml(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "no input document given"),
            Self::Io(e) => write!(f, "failed to read document: {e}"),
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::InvalidFeature { kind, reason } => {
                write!(f, "invalid {kind} feature: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}
