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

//! Error types for LM-63 parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IesErrorKind {
    /// The input violates the IESNA LM-63 specification.
    Violation,
    /// The input is specification-valid but uses a feature this parser
    /// does not implement (BLOCK contents, TILT by file reference).
    Unsupported,
    /// I/O error while reading the input stream.
    Io,
}

impl fmt::Display for IesErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Violation => write!(f, "FormatError"),
            Self::Unsupported => write!(f, "UnsupportedError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error that occurred during LM-63 parsing.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct IesError {
    /// The kind of error.
    pub kind: IesErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based) where the violation was detected.
    pub line: usize,
    /// Additional context (e.g., "while parsing fixture.ies").
    pub context: Option<String>,
}

impl IesError {
    /// Create a new error.
    pub fn new(kind: IesErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind

    pub fn violation(message: impl Into<String>, line: usize) -> Self {
        Self::new(IesErrorKind::Violation, message, line)
    }

    pub fn unsupported(message: impl Into<String>, line: usize) -> Self {
        Self::new(IesErrorKind::Unsupported, message, line)
    }

    pub fn io(message: impl Into<String>, line: usize) -> Self {
        Self::new(IesErrorKind::Io, message, line)
    }
}

/// Result type for LM-63 operations.
pub type IesResult<T> = Result<T, IesError>;
