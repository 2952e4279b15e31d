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

//! # lm63 - IESNA LM-63 photometric data parser
//!
//! Parses and validates the keyword section of IESNA LM-63 photometric
//! data files across the four historical revisions of the standard
//! (1986, 1991, 1995, 2002).
//!
//! ## Quick Start
//!
//! ```rust
//! use lm63::{parse, Format, Tilt};
//! use std::io::Cursor;
//!
//! let input = "IESNA:LM-63-2002\n\
//!              TEST[LTL12345]\n\
//!              TESTLAB[Acme Photometrics]\n\
//!              ISSUEDATE[2002-06-07]\n\
//!              MANUFAC[Acme Lighting]\n\
//!              TILT=NONE\n";
//!
//! let doc = parse(Cursor::new(input)).expect("valid LM-63 header");
//! assert_eq!(doc.format, Format::Lm632002);
//! assert_eq!(doc.tilt, Tilt::None);
//! assert_eq!(doc.keyword("TEST"), Some("LTL12345"));
//! ```
//!
//! ## Validation
//!
//! Each revision from 1991 onward defines which keywords are legal and
//! which are mandatory; 1986 files (recognized by the absence of a
//! version header) are accepted leniently. [`ParseOptions`] toggles
//! each check independently:
//!
//! ```rust
//! use lm63::{parse_with_options, ParseOptions};
//! use std::io::Cursor;
//!
//! let opts = ParseOptions::builder()
//!     .ignore_allowed_keywords(true)
//!     .ignore_required_keywords(true)
//!     .build();
//!
//! let doc = parse_with_options(
//!     Cursor::new("IESNA:LM-63-2002\nNONSTANDARD[x]\nTILT=NONE\n"),
//!     &opts,
//! )
//! .unwrap();
//! assert_eq!(doc.keyword("NONSTANDARD"), Some("x"));
//! ```
//!
//! ## Stream position
//!
//! On success, [`parse_from`] leaves the [`LineReader`] positioned at
//! the first line of the photometric numeric block, so the caller can
//! keep reading angle and candela data from the same reader.

// Re-export core types
pub use lm63_core::{
    // Functions
    parse,
    parse_from,
    parse_with_options,
    // Main types
    Document,
    Format,
    // Errors
    IesError,
    IesErrorKind,
    IesResult,
    KeywordMap,
    // Parser
    Limits,
    LineReader,
    ParseOptions,
    ParseOptionsBuilder,
    Tilt,
    // Keyword tables
    is_keyword_allowed,
    required_keywords,
    MAX_KEYWORD_LENGTH,
};

// Error handling extensions
mod error_ext;
pub use error_ext::IesResultExt;
