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

//! Centralized error message constants for LM-63 parsing.
//!
//! This module provides a single source of truth for all error messages,
//! improving consistency and making internationalization easier in the future.

use crate::error::IesError;
use crate::format::Format;

// ==================== Reader Errors ====================

/// I/O failure while reading the input stream.
pub fn read_failed(err: &std::io::Error, line: usize) -> IesError {
    IesError::io(format!("failed to read input: {}", err), line)
}

/// Line exceeds maximum length limit.
pub fn line_too_long(length: usize, limit: usize, line: usize) -> IesError {
    IesError::violation(
        format!(
            "line too long: {} bytes exceeds limit of {} bytes",
            length, limit
        ),
        line,
    )
}

/// End of input reached where content was expected.
pub fn unexpected_eof(line: usize) -> IesError {
    IesError::violation("unexpected end of input", line)
}

/// Blank line encountered where content was expected.
pub fn unexpected_blank_line(line: usize) -> IesError {
    IesError::violation("unexpected blank line", line)
}

// ==================== Body Errors ====================

/// Line is neither a keyword line nor a TILT line.
pub fn expected_keyword_or_tilt(line: usize) -> IesError {
    IesError::violation("expected keyword line or TILT line", line)
}

/// Keyword is empty.
pub fn empty_keyword(line: usize) -> IesError {
    IesError::violation("keyword is empty", line)
}

/// Keyword exceeds the maximum length allowed by the standard.
pub fn keyword_too_long(keyword: &str, limit: usize, line: usize) -> IesError {
    IesError::violation(
        format!(
            "keyword '{}' exceeds maximum length of {} characters",
            keyword, limit
        ),
        line,
    )
}

/// Keyword is not in the active standard's allow-list.
pub fn keyword_not_allowed(keyword: &str, format: Format, line: usize) -> IesError {
    IesError::violation(
        format!(
            "keyword '{}' is not allowed by the IESNA {} standard",
            keyword, format
        ),
        line,
    )
}

/// User-defined (underscore-prefixed) keywords are a 1995 addition.
pub fn user_keywords_not_allowed(format: Format, line: usize) -> IesError {
    IesError::violation(
        format!(
            "user-defined keywords are not allowed by the IESNA {} standard",
            format
        ),
        line,
    )
}

/// MORE continuation with no keyword to continue.
pub fn more_before_any_keyword(line: usize) -> IesError {
    IesError::violation("keyword MORE occurred before any other keyword", line)
}

/// Too many keyword entries.
pub fn too_many_keywords(limit: usize, line: usize) -> IesError {
    IesError::violation(
        format!("too many keywords: exceeds limit of {}", limit),
        line,
    )
}

// ==================== Block Errors ====================

/// BLOCK while already inside a block.
pub fn block_not_expected(line: usize) -> IesError {
    IesError::violation("BLOCK keyword is not expected", line)
}

/// ENDBLOCK without a matching BLOCK.
pub fn endblock_not_expected(line: usize) -> IesError {
    IesError::violation("ENDBLOCK keyword is not expected", line)
}

/// BLOCK left open at the TILT line.
pub fn unterminated_block(line: usize) -> IesError {
    IesError::violation("BLOCK is not terminated by ENDBLOCK", line)
}

/// Block contents are not implemented.
pub fn blocks_not_supported(line: usize) -> IesError {
    IesError::unsupported("block support is not implemented", line)
}

// ==================== TILT Errors ====================

/// TILT by file reference is not implemented.
pub fn tilt_file_not_supported(filename: &str, line: usize) -> IesError {
    IesError::unsupported(
        format!("TILT specification from file '{}' is not supported", filename),
        line,
    )
}

// ==================== Required Keyword Errors ====================

/// A keyword mandated by the active standard is missing.
pub fn missing_required_keyword(keyword: &str, format: Format, line: usize) -> IesError {
    IesError::violation(
        format!(
            "keyword '{}' required by the IESNA {} standard is missing",
            keyword, format
        ),
        line,
    )
}
