//! Comment scanning helpers.
//!
//! Comments are trivia for the parser, but documentation comments
//! (`/** ... */`) carry the type annotations the checker relies on, so the
//! scanner records them and the parser attaches their raw text to nodes.

use serde::{Deserialize, Serialize};

/// A range representing a comment in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
    /// Whether this is a `/* */` comment
    pub is_multi_line: bool,
}

impl CommentRange {
    pub fn new(pos: u32, end: u32, is_multi_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            is_multi_line,
        }
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.pos as usize;
        let end = self.end as usize;
        if end <= source.len() && start < end {
            &source[start..end]
        } else {
            ""
        }
    }

    /// Check if this comment is a documentation comment.
    pub fn is_jsdoc(&self, source: &str) -> bool {
        self.is_multi_line && is_jsdoc_comment(self.get_text(source))
    }
}

/// Check if comment text is a documentation comment.
///
/// `/**/` is an empty block comment and `/*** ... */` is a banner, neither
/// carries documentation.
pub fn is_jsdoc_comment(text: &str) -> bool {
    text.len() > 4 && text.starts_with("/**") && !text.starts_with("/***")
}

/// Find the end of a block comment whose body starts at `body_start`
/// (just past the opening `/*`). Returns the offset just past `*/`, or
/// `None` if the comment is not terminated.
pub fn find_block_comment_end(bytes: &[u8], body_start: usize) -> Option<usize> {
    let body = bytes.get(body_start..)?;
    memchr::memmem::find(body, b"*/").map(|i| body_start + i + 2)
}

/// Find the end of a line comment starting at `pos` (exclusive of the line
/// terminator).
pub fn find_line_comment_end(bytes: &[u8], pos: usize) -> usize {
    let rest = bytes.get(pos..).unwrap_or_default();
    match memchr::memchr2(b'\n', b'\r', rest) {
        Some(i) => pos + i,
        None => bytes.len(),
    }
}

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod comments_tests;
