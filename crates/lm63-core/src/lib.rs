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

//! Core parser for IESNA LM-63 photometric data files.
//!
//! This crate parses and validates the keyword section of LM-63 files
//! across the four historical revisions of the standard (1986, 1991,
//! 1995, 2002): the version header, the `KEY[value]` metadata lines
//! with `MORE` continuations and `BLOCK`/`ENDBLOCK` nesting, and the
//! terminating `TILT` directive. The photometric numeric block that
//! follows TILT is not parsed here; on success the input reader is
//! left positioned at its first line.
//!
//! # Quick Start
//!
//! ```rust
//! use lm63_core::{parse, Format, Tilt};
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
//! assert_eq!(doc.keyword("MANUFAC"), Some("Acme Lighting"));
//! ```
//!
//! # Modules
//!
//! - [`lex`]: line classification (keyword shape, TILT shape)
//! - [`errors`]: centralized error message constructors

mod document;
mod error;
pub mod errors;
mod format;
mod keywords;
pub mod lex;
mod limits;
mod parser;
mod reader;

pub use document::{Document, KeywordMap, Tilt};
pub use error::{IesError, IesErrorKind, IesResult};
pub use format::Format;
pub use keywords::{is_keyword_allowed, required_keywords, MAX_KEYWORD_LENGTH};
pub use limits::Limits;
pub use parser::{parse, parse_from, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use reader::LineReader;
