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

//! Main parser for the LM-63 keyword section.
//!
//! The parser is a line-oriented state machine: it reads the version
//! line, classifies each following line as a keyword line or the
//! terminating TILT directive, and stops as soon as the TILT line has
//! been consumed. Any violation of the active standard aborts the
//! parse immediately with an error carrying the offending 1-based
//! line number; nothing is retried and no partial result is produced.
//!
//! A file whose first line matches no known version token is treated
//! as LM-63-1986 and that first line is reprocessed as the first body
//! line. Under 1986 the parser is additionally lenient about body
//! lines that match neither shape: they are skipped instead of
//! rejected.

use crate::document::{Document, KeywordMap, Tilt};
use crate::error::IesResult;
use crate::errors::messages;
use crate::format::Format;
use crate::keywords;
use crate::lex;
use crate::limits::Limits;
use crate::reader::LineReader;
use std::io::Read;

/// Parsing options for configuring LM-63 parsing behavior.
///
/// ParseOptions provides both direct field access and a fluent builder
/// API. All parsing functions accept ParseOptions to customize
/// strictness and resource limits.
///
/// # Creating ParseOptions
///
/// ```rust
/// use lm63_core::ParseOptions;
///
/// // Accept any well-formed keyword, reject blank lines
/// let opts = ParseOptions::builder()
///     .ignore_allowed_keywords(true)
///     .ignore_empty_lines(false)
///     .build();
///
/// // Defaults: full validation, blank lines skipped
/// let opts = ParseOptions::default();
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Keep the empty-keyword and 18-character checks active even when
    /// `ignore_allowed_keywords` disables the allow-list check.
    pub restrict_keyword_length: bool,
    /// Skip the per-standard allow-list check (accept any well-formed
    /// keyword).
    pub ignore_allowed_keywords: bool,
    /// Skip the post-parse check for keywords the standard mandates.
    pub ignore_required_keywords: bool,
    /// Treat BLOCK/ENDBLOCK as structurally supported nesting markers
    /// rather than an unsupported feature.
    pub ignore_blocks: bool,
    /// Skip blank lines while reading rather than treating them as
    /// errors.
    pub ignore_empty_lines: bool,
    /// Resource limits.
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            restrict_keyword_length: false,
            ignore_allowed_keywords: false,
            ignore_required_keywords: false,
            ignore_blocks: false,
            ignore_empty_lines: true,
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Keep keyword shape checks active even when the allow-list check
    /// is disabled (default: false).
    pub fn restrict_keyword_length(mut self, restrict: bool) -> Self {
        self.options.restrict_keyword_length = restrict;
        self
    }

    /// Skip the per-standard allow-list check (default: false).
    pub fn ignore_allowed_keywords(mut self, ignore: bool) -> Self {
        self.options.ignore_allowed_keywords = ignore;
        self
    }

    /// Skip the post-parse required-keyword check (default: false).
    pub fn ignore_required_keywords(mut self, ignore: bool) -> Self {
        self.options.ignore_required_keywords = ignore;
        self
    }

    /// Track BLOCK/ENDBLOCK nesting instead of rejecting the feature
    /// (default: false).
    pub fn ignore_blocks(mut self, ignore: bool) -> Self {
        self.options.ignore_blocks = ignore;
        self
    }

    /// Skip blank lines while reading (default: true).
    pub fn ignore_empty_lines(mut self, ignore: bool) -> Self {
        self.options.ignore_empty_lines = ignore;
        self
    }

    /// Set the maximum line length in bytes (default: 1MB).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of keyword entries (default: 10k).
    pub fn max_keywords(mut self, count: usize) -> Self {
        self.options.limits.max_keywords = count;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the keyword section of an LM-63 file with default options.
pub fn parse<R: Read>(input: R) -> IesResult<Document> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse the keyword section of an LM-63 file with custom options.
pub fn parse_with_options<R: Read>(input: R, options: &ParseOptions) -> IesResult<Document> {
    let mut reader = LineReader::with_limits(input, &options.limits);
    parse_from(&mut reader, options)
}

/// Parse the keyword section from an existing line reader.
///
/// On success the reader is left positioned at the first line after
/// the TILT directive, i.e. at the photometric numeric block (or the
/// inline tilt data when the specification is `INCLUDE`), so the
/// caller can keep reading from the same reader.
pub fn parse_from<R: Read>(
    reader: &mut LineReader<R>,
    options: &ParseOptions,
) -> IesResult<Document> {
    let first = read_content_line(reader, options)?;

    // A first line that matches no version token belongs to a
    // header-less 1986 file and is reprocessed as the first body line.
    let (format, mut line) = match Format::from_version_line(&first) {
        Some(format) => (format, read_content_line(reader, options)?),
        None => (Format::Lm631986, first),
    };

    let mut state = ParserState {
        format,
        keywords: KeywordMap::new(),
        last_inserted: None,
        inside_block: false,
    };

    let tilt = loop {
        if let Some(value) = lex::parse_tilt_line(&line) {
            break parse_tilt_value(value, reader.line_number())?;
        }

        if let Some((key, value)) = lex::parse_keyword_line(&line) {
            handle_keyword(&mut state, key, value, options, reader.line_number())?;
        } else if state.format != Format::Lm631986 {
            return Err(messages::expected_keyword_or_tilt(reader.line_number()));
        }
        // 1986 tolerates unclassifiable body lines: skip and continue.

        line = read_content_line(reader, options)?;
    };

    if state.inside_block {
        return Err(messages::unterminated_block(reader.line_number()));
    }

    if !options.ignore_required_keywords {
        check_required_keywords(&state, reader.line_number())?;
    }

    Ok(Document {
        format: state.format,
        tilt,
        keywords: state.keywords,
    })
}

/// Mutable state threaded through the keyword-line handlers.
struct ParserState {
    format: Format,
    keywords: KeywordMap,
    /// Index of the most recently inserted entry, the target of MORE
    /// continuations.
    last_inserted: Option<usize>,
    inside_block: bool,
}

/// Read the next content line, failing on end-of-input and on blank
/// lines that survive the skipping policy.
fn read_content_line<R: Read>(
    reader: &mut LineReader<R>,
    options: &ParseOptions,
) -> IesResult<String> {
    match reader.next_trimmed(options.ignore_empty_lines)? {
        None => Err(messages::unexpected_eof(reader.line_number())),
        Some(line) if line.is_empty() => Err(messages::unexpected_blank_line(reader.line_number())),
        Some(line) => Ok(line),
    }
}

/// Handle one keyword line: validate the key, track block nesting,
/// and store (or fold, for MORE) the value.
fn handle_keyword(
    state: &mut ParserState,
    key: &str,
    value: &str,
    options: &ParseOptions,
    line: usize,
) -> IesResult<()> {
    if !options.ignore_allowed_keywords {
        keywords::accept_keyword(state.format, key, line)?;
    } else if options.restrict_keyword_length {
        keywords::check_keyword_shape(key, line)?;
    }

    // Block tracking runs regardless of the allow-list option.
    process_block_keyword(state, key, options, line)?;

    if key == "MORE" {
        match state.last_inserted {
            Some(index) => state.keywords.append_line(index, value),
            None => return Err(messages::more_before_any_keyword(line)),
        }
    } else {
        if !state.keywords.contains_key(key) && state.keywords.len() >= options.limits.max_keywords
        {
            return Err(messages::too_many_keywords(options.limits.max_keywords, line));
        }
        let index = state.keywords.insert(key.to_string(), value.to_string());
        state.last_inserted = Some(index);
    }

    Ok(())
}

/// Track BLOCK/ENDBLOCK nesting.
///
/// With `ignore_blocks` set the pair acts as structural markers and
/// must balance: nested BLOCKs and stray ENDBLOCKs are violations.
/// Without it, any occurrence is an unsupported feature, since block
/// content semantics are not implemented.
fn process_block_keyword(
    state: &mut ParserState,
    key: &str,
    options: &ParseOptions,
    line: usize,
) -> IesResult<()> {
    match key {
        "BLOCK" if options.ignore_blocks => {
            if state.inside_block {
                return Err(messages::block_not_expected(line));
            }
            state.inside_block = true;
            Ok(())
        }
        "ENDBLOCK" if options.ignore_blocks => {
            if !state.inside_block {
                return Err(messages::endblock_not_expected(line));
            }
            state.inside_block = false;
            Ok(())
        }
        "BLOCK" | "ENDBLOCK" => Err(messages::blocks_not_supported(line)),
        _ => Ok(()),
    }
}

/// Interpret the value of the TILT directive.
///
/// Only `INCLUDE` and `NONE` are implemented; a filename is
/// specification-valid but rejected as unsupported.
fn parse_tilt_value(value: &str, line: usize) -> IesResult<Tilt> {
    match value {
        "INCLUDE" => Ok(Tilt::Include),
        "NONE" => Ok(Tilt::None),
        filename => Err(messages::tilt_file_not_supported(filename, line)),
    }
}

/// Verify the per-standard mandatory keywords are all present.
fn check_required_keywords(state: &ParserState, line: usize) -> IesResult<()> {
    for &key in keywords::required_keywords(state.format) {
        if !state.keywords.contains_key(key) {
            return Err(messages::missing_required_keyword(key, state.format, line));
        }
    }
    Ok(())
}
