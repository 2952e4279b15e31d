// lm63 - IESNA LM-63 photometric data parser
//
// Copyright (c) 2025 the lm63 contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! LM-63 standard revisions and version-line detection.

use std::fmt;

/// Version token introduced by LM-63-1991.
const TOKEN_1991: &str = "IESNA91";
/// Version token introduced by LM-63-1995.
const TOKEN_1995: &str = "IESNA:LM-63-1995";
/// Version token introduced by LM-63-2002.
const TOKEN_2002: &str = "IESNA:LM-63-2002";

/// A revision of the IESNA LM-63 standard.
///
/// The revision is decided once, from the first line of the file, and
/// drives which keywords are legal and which are mandatory. The 1986
/// revision has no version header: a file whose first line matches no
/// known token is treated as LM-63-1986 and that line is reprocessed
/// as the first body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Format {
    /// IESNA LM-63-1986 (no version header, no keyword allow-list).
    Lm631986,
    /// IESNA LM-63-1991 (`IESNA91` header).
    Lm631991,
    /// IESNA LM-63-1995 (`IESNA:LM-63-1995` header).
    Lm631995,
    /// IESNA LM-63-2002 (`IESNA:LM-63-2002` header).
    Lm632002,
}

impl Format {
    /// Detect the standard revision from a trimmed version line.
    ///
    /// Returns `None` when the line matches no known version token;
    /// the caller falls back to [`Format::Lm631986`] and reprocesses
    /// the line as the first body line.
    pub fn from_version_line(line: &str) -> Option<Format> {
        match line {
            TOKEN_1991 => Some(Format::Lm631991),
            TOKEN_1995 => Some(Format::Lm631995),
            TOKEN_2002 => Some(Format::Lm632002),
            _ => None,
        }
    }

    /// The standard's name as it appears in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Lm631986 => "LM-63-1986",
            Format::Lm631991 => "LM-63-1991",
            Format::Lm631995 => "LM-63-1995",
            Format::Lm632002 => "LM-63-2002",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
