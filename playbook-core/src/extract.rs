//! Metadata extraction from content sources.
//!
//! Finds the `export const meta = { ... }` literal in a post's source text,
//! slices it out with a depth-balanced brace scan and hands it to the
//! restricted parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::MetadataError;
use crate::literal::parse_literal;
use crate::metadata::PostMetadata;

/// Matches the metadata export marker, with an optional type annotation.
static META_EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+const\s+meta\b\s*(?::[^=]*)?=").expect("valid regex")
});

/// Byte offsets of a metadata literal within its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan {
    /// Start of the `export const meta` marker.
    pub marker: usize,
    /// Offset of the opening `{`.
    pub start: usize,
    /// Offset one past the matching `}`.
    pub end: usize,
}

impl LiteralSpan {
    /// The literal text, braces included.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Whether the source contains an `export const meta` marker at all.
#[must_use]
pub fn has_marker(source: &str) -> bool {
    META_EXPORT_RE.is_match(source)
}

/// Locate the metadata literal in a source file.
///
/// Returns `None` when there is no `export const meta` marker, no `{`
/// after it, or the braces never balance. Braces inside string literals,
/// template literals and comments are not counted.
#[must_use]
pub fn find_literal(source: &str) -> Option<LiteralSpan> {
    let marker = META_EXPORT_RE.find(source)?;
    let start = marker.end() + source[marker.end()..].find('{')?;
    let end = balanced_end(source, start)?;
    Some(LiteralSpan {
        marker: marker.start(),
        start,
        end,
    })
}

/// Scan from the `{` at `start` to one past its matching `}`.
fn balanced_end(source: &str, start: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Extract and evaluate the metadata literal of a source file.
///
/// `Ok(None)` is a structural miss: no marker, or no balanced literal.
///
/// # Errors
///
/// Returns [`MetadataError`] when a literal was found but could not be
/// parsed or does not describe a post. Callers are expected to log and skip
/// the file.
pub fn extract_metadata(source: &str) -> Result<Option<PostMetadata>, MetadataError> {
    extract_raw(source)?
        .map(PostMetadata::from_value)
        .transpose()
}

/// Extract the parsed literal without converting it to [`PostMetadata`].
///
/// # Errors
///
/// Returns [`MetadataError`] if the literal cannot be parsed.
pub fn extract_raw(source: &str) -> Result<Option<serde_json::Value>, MetadataError> {
    find_literal(source)
        .map(|span| parse_literal(span.text(source)))
        .transpose()
}
