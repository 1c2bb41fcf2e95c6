//! Parser state: token cursor, node construction helpers and errors.
//!
//! The parser is recursive descent over the tokens of [`ScannerState`].
//! Parsing stops at the first syntax error; the checker reports it as a
//! single "Bad syntax" finding for the file.

use super::base::NodeIndex;
use super::node::{NodeArena, NodeData};
use jsl_common::limits::MAX_NESTING_DEPTH;
use jsl_scanner::{ScannerState, SyntaxKind};
use std::fmt;
use tracing::trace;

/// First syntax error of a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset of the offending token.
    pub pos: u32,
    /// 1-based line of the offending token.
    pub line: u32,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// End of the previously consumed token; used as the end of finished nodes.
    pub(crate) last_token_end: u32,
    /// Number of enclosing function bodies.
    pub(crate) function_depth: u32,
    /// Enclosing loops and switches of the current function body.
    pub(crate) iteration_depth: u32,
    pub(crate) switch_depth: u32,
    pub(crate) recursion_depth: u32,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let estimated_nodes = source_text.len() / 8;
        ParserState {
            scanner: ScannerState::new(source_text),
            arena: NodeArena::with_capacity(estimated_nodes),
            file_name,
            current_token: SyntaxKind::Unknown,
            last_token_end: 0,
            function_depth: 0,
            iteration_depth: 0,
            switch_depth: 0,
            recursion_depth: 0,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_text(&self) -> &str {
        self.scanner.source_text()
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_pos()
    }

    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value_ref()
    }

    pub(crate) fn token_jsdoc(&self) -> Option<String> {
        self.scanner.get_token_jsdoc().map(str::to_string)
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.last_token_end = self.scanner.get_token_end();
        self.current_token = self.scanner.scan();
        self.current_token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.parse_optional(kind) {
            Ok(())
        } else {
            Err(self.error_at_current(format!("'{}' expected.", kind.text())))
        }
    }

    /// A statement may end without `;` before `}`, at end of input or at a line break.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.current_token,
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.scanner.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::SemicolonToken) || self.can_parse_semicolon() {
            Ok(())
        } else {
            Err(self.error_at_current("';' expected.".to_string()))
        }
    }

    // =========================================================================
    // Errors and recursion guard
    // =========================================================================

    pub(crate) fn error_at_current(&self, message: String) -> ParseError {
        if let Some(error) = self.unterminated_comment_error() {
            return error;
        }
        let message = if self.is_token(SyntaxKind::Unknown) {
            "Invalid character.".to_string()
        } else if self.scanner.is_unterminated() {
            match self.current_token {
                SyntaxKind::StringLiteral => "Unterminated string literal.".to_string(),
                SyntaxKind::RegularExpressionLiteral => {
                    "Unterminated regular expression literal.".to_string()
                }
                _ => message,
            }
        } else {
            message
        };
        ParseError {
            message,
            pos: self.token_pos(),
            line: self.scanner.get_token_line(),
        }
    }

    pub(crate) fn error_at(&self, pos: u32, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            pos,
            line: self.scanner.line_map().line_of(pos),
        }
    }

    /// A block comment left open swallows the rest of the file.
    pub(crate) fn unterminated_comment_error(&self) -> Option<ParseError> {
        let pos = self.scanner.get_unterminated_comment()?;
        Some(self.error_at(pos, "Unterminated comment."))
    }

    pub(crate) fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current("Maximum nesting depth exceeded.".to_string()));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    // =========================================================================
    // Node construction
    // =========================================================================

    /// Finish a node that started at `pos` and ends at the last consumed token.
    pub(crate) fn finish_node(&mut self, data: NodeData, pos: u32) -> NodeIndex {
        let end = self.last_token_end.max(pos);
        let line = self.scanner.line_map().line_of(pos);
        let index = self.arena.add(data, pos, end, line);
        trace!(kind = self.arena.get_data(index).map_or("?", NodeData::kind_name), pos, end, "node");
        index
    }

    pub(crate) fn attach_jsdoc(&mut self, index: NodeIndex, jsdoc: Option<String>) {
        self.arena.set_jsdoc(index, jsdoc);
    }

    /// Identifier node for the current identifier (or keyword, when `allow_keyword`).
    pub(crate) fn parse_identifier_name(&mut self, allow_keyword: bool) -> ParseResult<NodeIndex> {
        let kind = self.token();
        if kind != SyntaxKind::Identifier && !(allow_keyword && kind.is_keyword()) {
            return Err(self.error_at_current("Identifier expected.".to_string()));
        }
        let pos = self.token_pos();
        let text = self.token_value().to_string();
        self.next_token();
        Ok(self.finish_node(NodeData::Identifier { text }, pos))
    }
}
