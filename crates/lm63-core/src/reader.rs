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

//! Buffered line reader with line number tracking.
//!
//! Reads input line-by-line, handling LF and CRLF line endings and
//! tracking the current 1-based line number for error reporting. After
//! a successful parse the reader sits at the first line of the
//! photometric numeric block, so the caller can continue reading from
//! the same reader.

use crate::error::IesResult;
use crate::errors::messages;
use crate::limits::Limits;
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader over an LM-63 input stream.
///
/// # Examples
///
/// ```rust
/// use lm63_core::LineReader;
/// use std::io::Cursor;
///
/// let input = "line1\nline2";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.next_line().unwrap(), Some("line1".to_string()));
/// assert_eq!(reader.line_number(), 1);
/// assert_eq!(reader.next_line().unwrap(), Some("line2".to_string()));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with default limits.
    pub fn new(reader: R) -> Self {
        Self::with_limits(reader, &Limits::default())
    }

    /// Create a line reader with specific limits.
    pub fn with_limits(reader: R, limits: &Limits) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
            max_line_length: limits.max_line_length,
        }
    }

    /// The number of lines consumed so far (1-based after the first read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next raw line, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input. The line counter advances
    /// once per underlying read.
    pub fn next_line(&mut self) -> IesResult<Option<String>> {
        self.buffer.clear();

        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => {
                self.line_number += 1;

                if self.buffer.len() > self.max_line_length {
                    return Err(messages::line_too_long(
                        self.buffer.len(),
                        self.max_line_length,
                        self.line_number,
                    ));
                }

                // Remove trailing newline
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }

                Ok(Some(self.buffer.clone()))
            }
            Err(e) => Err(messages::read_failed(&e, self.line_number + 1)),
        }
    }

    /// Read the next line with surrounding whitespace stripped.
    ///
    /// When `skip_empty` is set, lines consisting only of whitespace
    /// are consumed and the read repeats until a non-empty line is
    /// produced or input ends; otherwise a blank line is returned as
    /// an empty string. Skipped blank lines still advance the line
    /// counter.
    pub fn next_trimmed(&mut self, skip_empty: bool) -> IesResult<Option<String>> {
        loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(raw) => {
                    let trimmed = raw.trim();
                    if trimmed.is_empty() && skip_empty {
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IesErrorKind;
    use std::io::Cursor;

    #[test]
    fn test_next_line_tracks_numbers() {
        let mut reader = LineReader::new(Cursor::new("a\nb\nc"));
        assert_eq!(reader.next_line().unwrap(), Some("a".to_string()));
        assert_eq!(reader.line_number(), 1);
        assert_eq!(reader.next_line().unwrap(), Some("b".to_string()));
        assert_eq!(reader.next_line().unwrap(), Some("c".to_string()));
        assert_eq!(reader.line_number(), 3);
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut reader = LineReader::new(Cursor::new("a\r\nb\r\n"));
        assert_eq!(reader.next_line().unwrap(), Some("a".to_string()));
        assert_eq!(reader.next_line().unwrap(), Some("b".to_string()));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_next_trimmed_strips_whitespace() {
        let mut reader = LineReader::new(Cursor::new("  TEST[abc]  \n"));
        assert_eq!(
            reader.next_trimmed(false).unwrap(),
            Some("TEST[abc]".to_string())
        );
    }

    #[test]
    fn test_next_trimmed_skips_blanks_when_enabled() {
        let mut reader = LineReader::new(Cursor::new("\n   \n\t\nTEST[abc]\n"));
        assert_eq!(
            reader.next_trimmed(true).unwrap(),
            Some("TEST[abc]".to_string())
        );
        // Counter advanced through the skipped blanks.
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_next_trimmed_returns_blank_when_disabled() {
        let mut reader = LineReader::new(Cursor::new("   \nTEST[abc]\n"));
        assert_eq!(reader.next_trimmed(false).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_next_trimmed_eof_after_blanks() {
        let mut reader = LineReader::new(Cursor::new("\n\n\n"));
        assert_eq!(reader.next_trimmed(true).unwrap(), None);
    }

    #[test]
    fn test_line_too_long() {
        let limits = Limits {
            max_line_length: 8,
            ..Limits::default()
        };
        let mut reader = LineReader::with_limits(Cursor::new("0123456789\n"), &limits);
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind, IesErrorKind::Violation);
        assert_eq!(err.line, 1);
    }
}
