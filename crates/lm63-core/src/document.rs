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

//! Parsed document structure for the LM-63 keyword section.

use crate::format::Format;

/// How lamp-tilt correction data is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tilt {
    /// Tilt data follows inline after the TILT line.
    Include,
    /// Tilt data lives in a separate file. Modeled but currently
    /// rejected as unsupported during parsing.
    File(String),
    /// The luminaire output does not vary with tilt.
    None,
}

/// An insertion-ordered keyword dictionary.
///
/// Keys are unique; re-inserting an existing key updates its value in
/// place without changing its position. `MORE` continuation lines are
/// folded into the most recently inserted entry with a `\n` separator
/// rather than stored as entries of their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordMap {
    entries: Vec<(String, String)>,
}

impl KeywordMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keywords have been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a keyword's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when the keyword is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or overwrite a keyword, returning the index of its
    /// entry. An overwrite keeps the entry's original position.
    pub(crate) fn insert(&mut self, key: String, value: String) -> usize {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.entries[index].1 = value;
                index
            }
            None => {
                self.entries.push((key, value));
                self.entries.len() - 1
            }
        }
    }

    /// Append a continuation line to the entry at `index`.
    pub(crate) fn append_line(&mut self, index: usize, extra: &str) {
        let value = &mut self.entries[index].1;
        value.push('\n');
        value.push_str(extra);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KeywordMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The parsed keyword section of an LM-63 file.
///
/// Produced once the terminating TILT line has been consumed; the
/// photometric numeric block that follows stays in the input stream
/// for the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// The standard revision the file declares (or 1986 by fallback).
    pub format: Format,
    /// The tilt specification recorded by the TILT line.
    pub tilt: Tilt,
    /// Keyword metadata in declaration order.
    pub keywords: KeywordMap,
}

impl Document {
    /// Look up a keyword's value.
    pub fn keyword(&self, key: &str) -> Option<&str> {
        self.keywords.get(key)
    }
}
