use fixasm_types::{FixError, FixResult, PackageId, SYMBOL_MARKER};
use regex::bytes::{NoExpand, Regex};
use std::borrow::Cow;

/// Literal `<package>·` matcher over raw bytes.
///
/// Package identifiers may contain `.`, `+` and friends, so the identifier is
/// escaped before compiling; the regex only ever matches the literal text.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    literal: String,
    re: Regex,
}

impl MatchPattern {
    pub fn new(package: &PackageId) -> FixResult<Self> {
        let literal = package.qualified_prefix();
        let re = Regex::new(&regex::escape(&literal)).map_err(|e| FixError::Pattern {
            pattern: literal.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { literal, re })
    }

    /// The text being searched for.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn is_match(&self, haystack: &[u8]) -> bool {
        self.re.is_match(haystack)
    }

    /// Replace each non-overlapping match with the bare marker.
    ///
    /// Returns the new content and the number of replacements; with no matches
    /// the input is returned borrowed.
    pub fn strip<'a>(&self, content: &'a [u8]) -> (Cow<'a, [u8]>, usize) {
        let count = self.re.find_iter(content).count();
        if count == 0 {
            return (Cow::Borrowed(content), 0);
        }

        let mut marker = [0u8; 4];
        let marker = SYMBOL_MARKER.encode_utf8(&mut marker).as_bytes();
        (self.re.replace_all(content, NoExpand(marker)), count)
    }
}
