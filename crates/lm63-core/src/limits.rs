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

//! Resource limits for LM-63 parsing.

/// Configurable limits for parser resource consumption.
///
/// These limits bound the resources consumed while parsing untrusted
/// input: a single overlong line cannot exhaust memory, and a file
/// cannot accumulate an unbounded keyword dictionary.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum number of keyword entries (default: 10k).
    pub max_keywords: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: 1024 * 1024, // 1MB
            max_keywords: 10_000,
        }
    }
}
