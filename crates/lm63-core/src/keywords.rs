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

//! Per-standard keyword acceptance rules.
//!
//! Each LM-63 revision from 1991 onward defines a fixed list of legal
//! keywords; 1986 predates keywords as a formal concept and accepts
//! anything. 1995 added `NEARFIELD`, `OTHER`, `SEARCH` and the
//! `BLOCK`/`ENDBLOCK` pair, plus user-defined keywords prefixed with
//! `_`. 2002 split `DATE` into `TESTDATE`/`ISSUEDATE`, added
//! `TESTLAB` and `LAMPPOSITION`, and dropped `BLOCK`/`ENDBLOCK`.

use crate::error::IesResult;
use crate::errors::messages;
use crate::format::Format;

/// Maximum raw keyword length permitted by the LM-63 standards.
pub const MAX_KEYWORD_LENGTH: usize = 18;

/// Keywords legal under IESNA LM-63-1991.
const ALLOWED_1991: &[&str] = &[
    "TEST",
    "DATE",
    "MANUFAC",
    "LUMCAT",
    "LUMINAIRE",
    "LAMPCAT",
    "LAMP",
    "BALLAST",
    "BALLASTCAT",
    "MAINTCAT",
    "DISTRIBUTION",
    "FLASHAREA",
    "COLORCONSTANT",
    "MORE",
];

/// Keywords legal under IESNA LM-63-1995.
const ALLOWED_1995: &[&str] = &[
    "TEST",
    "DATE",
    "NEARFIELD",
    "MANUFAC",
    "LUMCAT",
    "LUMINAIRE",
    "LAMPCAT",
    "LAMP",
    "BALLAST",
    "BALLASTCAT",
    "MAINTCAT",
    "DISTRIBUTION",
    "FLASHAREA",
    "COLORCONSTANT",
    "OTHER",
    "SEARCH",
    "MORE",
    "BLOCK",
    "ENDBLOCK",
];

/// Keywords legal under IESNA LM-63-2002.
const ALLOWED_2002: &[&str] = &[
    "TEST",
    "TESTLAB",
    "TESTDATE",
    "NEARFIELD",
    "MANUFAC",
    "LUMCAT",
    "LUMINAIRE",
    "LAMPCAT",
    "LAMP",
    "BALLAST",
    "BALLASTCAT",
    "MAINTCAT",
    "DISTRIBUTION",
    "FLASHAREA",
    "COLORCONSTANT",
    "LAMPPOSITION",
    "ISSUEDATE",
    "OTHER",
    "SEARCH",
    "MORE",
];

/// Keywords mandated by LM-63-1991. The 1991 revision requires the
/// full keyword block to be present.
const REQUIRED_1991: &[&str] = &[
    "TEST",
    "DATE",
    "MANUFAC",
    "LUMCAT",
    "LUMINAIRE",
    "LAMPCAT",
    "LAMP",
    "BALLAST",
    "BALLASTCAT",
    "MAINTCAT",
    "DISTRIBUTION",
    "FLASHAREA",
    "COLORCONSTANT",
];

/// Keywords mandated by LM-63-2002.
const REQUIRED_2002: &[&str] = &["TEST", "TESTLAB", "ISSUEDATE", "MANUFAC"];

/// Check whether a keyword is legal under the given standard revision.
///
/// LM-63-1986 performs no allow-list check at all. Keywords prefixed
/// with `_` are user-defined extensions, legal from 1995 onward and
/// explicitly illegal under 1991.
pub fn is_keyword_allowed(format: Format, keyword: &str) -> bool {
    match format {
        Format::Lm631986 => true,
        Format::Lm631991 => !keyword.starts_with('_') && ALLOWED_1991.contains(&keyword),
        Format::Lm631995 => keyword.starts_with('_') || ALLOWED_1995.contains(&keyword),
        Format::Lm632002 => keyword.starts_with('_') || ALLOWED_2002.contains(&keyword),
    }
}

/// Keywords that must be present for a file of the given revision to
/// be complete. 1986 and 1995 mandate none.
pub fn required_keywords(format: Format) -> &'static [&'static str] {
    match format {
        Format::Lm631991 => REQUIRED_1991,
        Format::Lm632002 => REQUIRED_2002,
        Format::Lm631986 | Format::Lm631995 => &[],
    }
}

/// Validate the raw shape of a keyword: non-empty and within the
/// 18-character cap. Applies regardless of standard.
pub(crate) fn check_keyword_shape(keyword: &str, line: usize) -> IesResult<()> {
    if keyword.is_empty() {
        return Err(messages::empty_keyword(line));
    }
    if keyword.len() > MAX_KEYWORD_LENGTH {
        return Err(messages::keyword_too_long(keyword, MAX_KEYWORD_LENGTH, line));
    }
    Ok(())
}

/// Full keyword acceptance check: shape plus the active standard's
/// allow-list.
pub(crate) fn accept_keyword(format: Format, keyword: &str, line: usize) -> IesResult<()> {
    check_keyword_shape(keyword, line)?;

    match format {
        Format::Lm631986 => Ok(()),
        Format::Lm631991 => {
            if keyword.starts_with('_') {
                return Err(messages::user_keywords_not_allowed(format, line));
            }
            if !ALLOWED_1991.contains(&keyword) {
                return Err(messages::keyword_not_allowed(keyword, format, line));
            }
            Ok(())
        }
        Format::Lm631995 | Format::Lm632002 => {
            if !is_keyword_allowed(format, keyword) {
                return Err(messages::keyword_not_allowed(keyword, format, line));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IesErrorKind;

    // ==================== Allow-list tests ====================

    #[test]
    fn test_1986_allows_anything() {
        assert!(is_keyword_allowed(Format::Lm631986, "TEST"));
        assert!(is_keyword_allowed(Format::Lm631986, "NOT_A_REAL_KEYWORD"));
        assert!(is_keyword_allowed(Format::Lm631986, "_USER"));
    }

    #[test]
    fn test_1991_list() {
        assert!(is_keyword_allowed(Format::Lm631991, "TEST"));
        assert!(is_keyword_allowed(Format::Lm631991, "DATE"));
        assert!(is_keyword_allowed(Format::Lm631991, "MORE"));
        // 1995 additions are not in the 1991 list
        assert!(!is_keyword_allowed(Format::Lm631991, "NEARFIELD"));
        assert!(!is_keyword_allowed(Format::Lm631991, "BLOCK"));
        assert!(!is_keyword_allowed(Format::Lm631991, "OTHER"));
    }

    #[test]
    fn test_1991_rejects_user_keywords() {
        assert!(!is_keyword_allowed(Format::Lm631991, "_CUSTOM"));
    }

    #[test]
    fn test_1995_list() {
        assert!(is_keyword_allowed(Format::Lm631995, "NEARFIELD"));
        assert!(is_keyword_allowed(Format::Lm631995, "BLOCK"));
        assert!(is_keyword_allowed(Format::Lm631995, "ENDBLOCK"));
        assert!(is_keyword_allowed(Format::Lm631995, "DATE"));
        // 2002 renames are not in the 1995 list
        assert!(!is_keyword_allowed(Format::Lm631995, "TESTDATE"));
        assert!(!is_keyword_allowed(Format::Lm631995, "ISSUEDATE"));
        assert!(!is_keyword_allowed(Format::Lm631995, "LAMPPOSITION"));
    }

    #[test]
    fn test_2002_list() {
        assert!(is_keyword_allowed(Format::Lm632002, "TESTDATE"));
        assert!(is_keyword_allowed(Format::Lm632002, "ISSUEDATE"));
        assert!(is_keyword_allowed(Format::Lm632002, "TESTLAB"));
        assert!(is_keyword_allowed(Format::Lm632002, "LAMPPOSITION"));
        // DATE was split into TESTDATE/ISSUEDATE in 2002
        assert!(!is_keyword_allowed(Format::Lm632002, "DATE"));
        // BLOCK/ENDBLOCK were dropped in 2002
        assert!(!is_keyword_allowed(Format::Lm632002, "BLOCK"));
        assert!(!is_keyword_allowed(Format::Lm632002, "ENDBLOCK"));
    }

    #[test]
    fn test_user_keywords_1995_and_2002() {
        assert!(is_keyword_allowed(Format::Lm631995, "_NEMA_DIST"));
        assert!(is_keyword_allowed(Format::Lm632002, "_NEMA_DIST"));
    }

    // ==================== Required keyword tests ====================

    #[test]
    fn test_required_sets() {
        assert!(required_keywords(Format::Lm631986).is_empty());
        assert!(required_keywords(Format::Lm631995).is_empty());
        assert_eq!(required_keywords(Format::Lm631991).len(), 13);
        assert_eq!(
            required_keywords(Format::Lm632002),
            &["TEST", "TESTLAB", "ISSUEDATE", "MANUFAC"]
        );
    }

    #[test]
    fn test_required_are_allowed() {
        for &key in required_keywords(Format::Lm631991) {
            assert!(is_keyword_allowed(Format::Lm631991, key), "{}", key);
        }
        for &key in required_keywords(Format::Lm632002) {
            assert!(is_keyword_allowed(Format::Lm632002, key), "{}", key);
        }
    }

    // ==================== Shape check tests ====================

    #[test]
    fn test_empty_keyword_rejected() {
        let err = check_keyword_shape("", 3).unwrap_err();
        assert_eq!(err.kind, IesErrorKind::Violation);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_length_cap() {
        assert!(check_keyword_shape("A".repeat(18).as_str(), 1).is_ok());
        let err = check_keyword_shape("A".repeat(19).as_str(), 1).unwrap_err();
        assert_eq!(err.kind, IesErrorKind::Violation);
    }

    // ==================== accept_keyword tests ====================

    #[test]
    fn test_accept_under_1986_skips_allow_list() {
        assert!(accept_keyword(Format::Lm631986, "ANYTHING", 1).is_ok());
    }

    #[test]
    fn test_accept_1986_still_caps_length() {
        let long = "A".repeat(19);
        assert!(accept_keyword(Format::Lm631986, &long, 1).is_err());
    }

    #[test]
    fn test_accept_1991_user_keyword_message() {
        let err = accept_keyword(Format::Lm631991, "_CUSTOM", 7).unwrap_err();
        assert!(err.message.contains("user-defined"));
        assert_eq!(err.line, 7);
    }

    #[test]
    fn test_accept_unknown_keyword_names_standard() {
        let err = accept_keyword(Format::Lm632002, "BOGUS", 2).unwrap_err();
        assert!(err.message.contains("BOGUS"));
        assert!(err.message.contains("LM-63-2002"));
    }
}
