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

//! Line classification and capture extraction.
//!
//! Two line shapes matter in the keyword section of an LM-63 file:
//!
//! - a keyword line, `KEY[value]`: the keyword, optional whitespace,
//!   then the value wrapped in a single bracket pair reaching the end
//!   of the line;
//! - a TILT line, `TILT=...`: the literal `TILT`, optional whitespace
//!   around `=`, then the tilt specification.
//!
//! TILT takes priority: a line matching the TILT shape is never
//! treated as a keyword line. Each shape is a small dedicated parser
//! returning an optional capture; classification and extraction are
//! the same call, so a classified line can always be extracted.

/// Classification of a body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `KEY[value]` metadata line.
    Keyword,
    /// `TILT=...` terminating directive.
    Tilt,
    /// Neither shape.
    Other,
}

/// Classify a trimmed body line.
pub fn classify(line: &str) -> LineKind {
    if parse_tilt_line(line).is_some() {
        LineKind::Tilt
    } else if parse_keyword_line(line).is_some() {
        LineKind::Keyword
    } else {
        LineKind::Other
    }
}

/// Extract the value of a `TILT=...` line.
///
/// Returns the text after the `=`, with whitespace around the `=`
/// tolerated. Returns `None` when the line does not match the TILT
/// shape.
pub fn parse_tilt_line(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("TILT")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    Some(rest.trim_start())
}

/// Extract `(key, value)` from a `KEY[value]` line.
///
/// The key is the text before the opening bracket (trailing whitespace
/// trimmed, possibly empty); the value is the bracket content. Returns
/// `None` when the line does not match the keyword shape.
pub fn parse_keyword_line(line: &str) -> Option<(&str, &str)> {
    let open = line.find('[')?;
    if !line.ends_with(']') || line.len() - 1 <= open {
        return None;
    }
    let key = line[..open].trim_end();
    let value = &line[open + 1..line.len() - 1];
    Some((key, value))
}
