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

//! Error context helpers for improved ergonomics.
//!
//! This module provides an extension trait for `Result<T, IesError>`
//! that makes it easy to add contextual information to errors as they
//! propagate through the call stack.
//!
//! # Examples
//!
//! ```rust
//! use lm63::{parse, IesResultExt};
//! use std::io::Cursor;
//!
//! fn load_fixture(path: &str, content: &str) -> Result<lm63::Document, lm63::IesError> {
//!     parse(Cursor::new(content))
//!         .context(format!("while parsing {}", path))
//! }
//! ```

use crate::IesError;
use std::fmt;

/// Extension trait for adding context to `Result<T, IesError>`.
///
/// Context is added to the error's `context` field without modifying
/// the original error message or the recorded line number. Repeated
/// calls append, outermost last.
pub trait IesResultExt<T> {
    /// Add context to an error.
    ///
    /// The context message is evaluated immediately; for expensive
    /// messages prefer [`with_context`](IesResultExt::with_context).
    fn context<C>(self, context: C) -> Result<T, IesError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure.
    ///
    /// The closure runs only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, IesError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> IesResultExt<T> for Result<T, IesError> {
    fn context<C>(self, context: C) -> Result<T, IesError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, IesError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }
}

fn add_context(mut error: IesError, context: String) -> IesError {
    error.context = match error.context.take() {
        Some(existing) => Some(format!("{}; {}", existing, context)),
        None => Some(context),
    };
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IesErrorKind;

    fn violation() -> Result<(), IesError> {
        Err(IesError::violation("unexpected blank line", 4))
    }

    #[test]
    fn test_context_on_error() {
        let err = violation().context("while parsing fixture.ies").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("while parsing fixture.ies"));
        // Message and line are untouched.
        assert_eq!(err.message, "unexpected blank line");
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_context_on_ok_is_noop() {
        let ok: Result<i32, IesError> = Ok(7);
        assert_eq!(ok.context("unused").unwrap(), 7);
    }

    #[test]
    fn test_context_chains() {
        let err = violation()
            .context("in section A")
            .context("while loading config")
            .unwrap_err();
        let context = err.context.unwrap();
        assert!(context.contains("in section A"));
        assert!(context.contains("while loading config"));
    }

    #[test]
    fn test_with_context_lazy() {
        let ok: Result<(), IesError> = Ok(());
        let mut called = false;
        let _ = ok.with_context(|| {
            called = true;
            "never evaluated"
        });
        assert!(!called);

        let err = violation()
            .with_context(|| format!("document {}", 42))
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("document 42"));
        assert_eq!(err.kind, IesErrorKind::Violation);
    }
}
