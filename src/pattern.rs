//! Regex-based extraction of release metadata from fetched text.
//!
//! A livecheck pattern is applied to the raw body returned by the release
//! endpoint (JSON from a releases API or an HTML release page). Each match
//! yields one capture tuple: the text of every capture group, in group order.
//!
//! # Scan Semantics
//!
//! - Matches are produced lazily, in the order they occur in the text
//!   (left-to-right, non-overlapping)
//! - The iterator is finite and borrows the text; calling
//!   [`PatternExtractor::extract`] again rescans from the start
//! - A group that does not participate in a match yields an empty string,
//!   so every tuple has exactly [`PatternExtractor::group_count`] entries
//!
//! # Examples
//!
//! ```rust
//! use caskwatch::pattern::PatternExtractor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let extractor = PatternExtractor::new(r#""tag_name":\s*"(.*?)""#, true)?;
//! let body = r#"[{"tag_name": "v1.1.0"}, {"tag_name": "v1.0.0"}]"#;
//!
//! let tags: Vec<_> = extractor.extract(body).map(|tuple| tuple[0].clone()).collect();
//! assert_eq!(tags, vec!["v1.1.0", "v1.0.0"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Multiline Bodies
//!
//! Release API responses are pretty-printed JSON spanning many lines, and
//! livecheck patterns commonly bridge fields with `.*?`. Patterns are
//! therefore compiled with `.` matching newlines unless the caller opts out.

use regex::{CaptureMatches, Regex, RegexBuilder};
use tracing::trace;

use crate::core::CaskwatchError;

/// One match: the text of each capture group in group order.
pub type CaptureTuple = Vec<String>;

/// Compiled livecheck pattern.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    regex: Regex,
}

impl PatternExtractor {
    /// Compile `pattern`.
    ///
    /// `dot_matches_newline` makes `.` match `\n`, mirroring the multiline
    /// flag release feeds are usually scanned with.
    ///
    /// # Errors
    ///
    /// Returns [`CaskwatchError::PatternCompileError`] if the pattern is not a
    /// valid regular expression.
    pub fn new(pattern: &str, dot_matches_newline: bool) -> Result<Self, CaskwatchError> {
        let regex = RegexBuilder::new(pattern)
            .dot_matches_new_line(dot_matches_newline)
            .build()
            .map_err(|e| CaskwatchError::PatternCompileError {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            regex,
        })
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Lazily scan `text`, yielding one [`CaptureTuple`] per match.
    pub fn extract<'r, 't>(&'r self, text: &'t str) -> Extractions<'r, 't> {
        Extractions {
            matches: self.regex.captures_iter(text),
        }
    }
}

/// Iterator returned by [`PatternExtractor::extract`].
#[derive(Debug)]
pub struct Extractions<'r, 't> {
    matches: CaptureMatches<'r, 't>,
}

impl Iterator for Extractions<'_, '_> {
    type Item = CaptureTuple;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.matches.next()?;
        let tuple: CaptureTuple = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        trace!("Pattern matched: {:?}", tuple);
        Some(tuple)
    }
}

/// Compile `pattern` and collect every capture tuple found in `text`.
///
/// Convenience wrapper over [`PatternExtractor`] for one-off scans. Patterns
/// are compiled with `.` matching newlines.
///
/// # Errors
///
/// Returns [`CaskwatchError::PatternCompileError`] if the pattern is invalid.
pub fn extract(text: &str, pattern: &str) -> Result<Vec<CaptureTuple>, CaskwatchError> {
    let extractor = PatternExtractor::new(pattern, true)?;
    Ok(extractor.extract(text).collect())
}
