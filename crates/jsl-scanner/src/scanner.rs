//! Tokenizer state machine.
//!
//! The scanner produces one token per [`ScannerState::scan`] call. Trivia
//! (whitespace, line breaks, comments) is skipped, but two facts about it are
//! kept for the parser:
//! - whether a line break preceded the token (automatic semicolon insertion)
//! - the last documentation comment (`/** ... */`) in the leading trivia
//!
//! A `/` is always scanned as a division operator; the parser calls
//! [`ScannerState::re_scan_slash_token`] when it expects an operand.

use crate::SyntaxKind;
use crate::char_codes::{
    is_identifier_part, is_identifier_start, is_line_break, is_white_space_single_line,
};
use jsl_common::comments::{
    CommentRange, find_block_comment_end, find_line_comment_end, is_jsdoc_comment,
};
use jsl_common::position::LineMap;

pub struct ScannerState {
    text: String,
    line_map: LineMap,
    /// Current position (end of the current token)
    pos: usize,
    /// Start of the current token including leading trivia
    full_start_pos: usize,
    /// Start of the current token
    token_start: usize,
    token: SyntaxKind,
    /// Cooked value: identifier name, string value, number or regex text
    token_value: String,
    preceding_line_break: bool,
    token_jsdoc: Option<CommentRange>,
    token_unterminated: bool,
    /// Start of a block comment that runs to the end of input.
    unterminated_comment: Option<u32>,
}

impl ScannerState {
    pub fn new(text: String) -> Self {
        let line_map = LineMap::build(&text);
        ScannerState {
            text,
            line_map,
            pos: 0,
            full_start_pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            preceding_line_break: false,
            token_jsdoc: None,
            token_unterminated: false,
            unterminated_comment: None,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    pub fn get_token_pos(&self) -> u32 {
        self.token_start as u32
    }

    pub fn get_token_full_start(&self) -> u32 {
        self.full_start_pos as u32
    }

    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    /// 1-based line of the current token.
    pub fn get_token_line(&self) -> u32 {
        self.line_map.line_of(self.token_start as u32)
    }

    pub fn get_token_value_ref(&self) -> &str {
        &self.token_value
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    /// Raw text of the documentation comment directly preceding the token.
    pub fn get_token_jsdoc(&self) -> Option<&str> {
        self.token_jsdoc.map(|range| range.get_text(&self.text))
    }

    /// True if the current string, comment or regex was not terminated.
    pub fn is_unterminated(&self) -> bool {
        self.token_unterminated
    }

    /// Position of the `/*` whose comment reached end of input before the
    /// current token.
    pub fn get_unterminated_comment(&self) -> Option<u32> {
        self.unterminated_comment
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.preceding_line_break = false;
        self.token_jsdoc = None;
        self.token_unterminated = false;
        self.unterminated_comment = None;
        self.token_value.clear();

        self.skip_trivia();
        self.token_start = self.pos;

        let Some(ch) = self.char_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '"' | '\'' => self.scan_string(ch),
            '0'..='9' => self.scan_number(),
            '.' => {
                if self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit()) {
                    self.scan_number()
                } else {
                    self.pos += 1;
                    SyntaxKind::DotToken
                }
            }
            _ if is_identifier_start(ch) => self.scan_identifier(),
            _ => self.scan_punctuation(ch),
        };
        self.token
    }

    fn skip_trivia(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(ch) = self.char_at(self.pos) {
            if is_line_break(ch) {
                self.preceding_line_break = true;
                self.pos += ch.len_utf8();
                continue;
            }
            if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }
            if ch == '/' {
                match self.byte_at(self.pos + 1) {
                    Some(b'/') => {
                        self.pos = find_line_comment_end(bytes, self.pos + 2);
                        continue;
                    }
                    Some(b'*') => {
                        let start = self.pos;
                        let end = match find_block_comment_end(bytes, self.pos + 2) {
                            Some(end) => end,
                            None => {
                                self.token_unterminated = true;
                                self.unterminated_comment = Some(start as u32);
                                bytes.len()
                            }
                        };
                        let text = &self.text[start..end];
                        if text.contains(['\n', '\r']) {
                            self.preceding_line_break = true;
                        }
                        if is_jsdoc_comment(text) {
                            self.token_jsdoc =
                                Some(CommentRange::new(start as u32, end as u32, true));
                        }
                        self.pos = end;
                        continue;
                    }
                    _ => {}
                }
            }
            break;
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.char_at(self.pos) {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        let text = &self.text[start..self.pos];
        self.token_value.push_str(text);
        SyntaxKind::keyword_from_str(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let bytes = self.text.as_bytes();
        if bytes[self.pos] == b'0' && matches!(self.byte_at(self.pos + 1), Some(b'x' | b'X')) {
            self.pos += 2;
            while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
        } else {
            while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.byte_at(self.pos) == Some(b'.') {
                self.pos += 1;
                while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
            if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
                let mut lookahead = self.pos + 1;
                if matches!(self.byte_at(lookahead), Some(b'+' | b'-')) {
                    lookahead += 1;
                }
                if self.byte_at(lookahead).is_some_and(|b| b.is_ascii_digit()) {
                    self.pos = lookahead;
                    while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
                        self.pos += 1;
                    }
                }
            }
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1;
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.token_unterminated = true;
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if is_line_break(ch) {
                self.token_unterminated = true;
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                self.scan_escape_sequence();
                continue;
            }
            self.token_value.push(ch);
            self.pos += ch.len_utf8();
        }
        SyntaxKind::StringLiteral
    }

    fn scan_escape_sequence(&mut self) {
        let Some(ch) = self.char_at(self.pos) else {
            self.token_unterminated = true;
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => self.token_value.push('\n'),
            't' => self.token_value.push('\t'),
            'r' => self.token_value.push('\r'),
            'b' => self.token_value.push('\u{0008}'),
            'f' => self.token_value.push('\u{000C}'),
            'v' => self.token_value.push('\u{000B}'),
            '0' if !self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) => {
                self.token_value.push('\0')
            }
            'x' => self.scan_hex_escape(2),
            'u' => self.scan_hex_escape(4),
            '\r' => {
                // line continuation
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => self.token_value.push(other),
        }
    }

    fn scan_hex_escape(&mut self, digits: usize) {
        let end = self.pos + digits;
        let decoded = self
            .text
            .get(self.pos..end)
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);
        match decoded {
            Some(ch) => {
                self.token_value.push(ch);
                self.pos = end;
            }
            None => self.token_value.push(if digits == 2 { 'x' } else { 'u' }),
        }
    }

    fn scan_punctuation(&mut self, ch: char) -> SyntaxKind {
        let next = self.byte_at(self.pos + 1);
        let next2 = self.byte_at(self.pos + 2);
        let next3 = self.byte_at(self.pos + 3);
        let (kind, len) = match ch {
            '{' => (SyntaxKind::OpenBraceToken, 1),
            '}' => (SyntaxKind::CloseBraceToken, 1),
            '(' => (SyntaxKind::OpenParenToken, 1),
            ')' => (SyntaxKind::CloseParenToken, 1),
            '[' => (SyntaxKind::OpenBracketToken, 1),
            ']' => (SyntaxKind::CloseBracketToken, 1),
            ';' => (SyntaxKind::SemicolonToken, 1),
            ',' => (SyntaxKind::CommaToken, 1),
            '?' => (SyntaxKind::QuestionToken, 1),
            ':' => (SyntaxKind::ColonToken, 1),
            '~' => (SyntaxKind::TildeToken, 1),
            '<' => match (next, next2) {
                (Some(b'<'), Some(b'=')) => (SyntaxKind::LessThanLessThanEqualsToken, 3),
                (Some(b'<'), _) => (SyntaxKind::LessThanLessThanToken, 2),
                (Some(b'='), _) => (SyntaxKind::LessThanEqualsToken, 2),
                _ => (SyntaxKind::LessThanToken, 1),
            },
            '>' => match (next, next2, next3) {
                (Some(b'>'), Some(b'>'), Some(b'=')) => {
                    (SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken, 4)
                }
                (Some(b'>'), Some(b'>'), _) => {
                    (SyntaxKind::GreaterThanGreaterThanGreaterThanToken, 3)
                }
                (Some(b'>'), Some(b'='), _) => (SyntaxKind::GreaterThanGreaterThanEqualsToken, 3),
                (Some(b'>'), _, _) => (SyntaxKind::GreaterThanGreaterThanToken, 2),
                (Some(b'='), _, _) => (SyntaxKind::GreaterThanEqualsToken, 2),
                _ => (SyntaxKind::GreaterThanToken, 1),
            },
            '=' => match (next, next2) {
                (Some(b'='), Some(b'=')) => (SyntaxKind::EqualsEqualsEqualsToken, 3),
                (Some(b'='), _) => (SyntaxKind::EqualsEqualsToken, 2),
                _ => (SyntaxKind::EqualsToken, 1),
            },
            '!' => match (next, next2) {
                (Some(b'='), Some(b'=')) => (SyntaxKind::ExclamationEqualsEqualsToken, 3),
                (Some(b'='), _) => (SyntaxKind::ExclamationEqualsToken, 2),
                _ => (SyntaxKind::ExclamationToken, 1),
            },
            '+' => match next {
                Some(b'+') => (SyntaxKind::PlusPlusToken, 2),
                Some(b'=') => (SyntaxKind::PlusEqualsToken, 2),
                _ => (SyntaxKind::PlusToken, 1),
            },
            '-' => match next {
                Some(b'-') => (SyntaxKind::MinusMinusToken, 2),
                Some(b'=') => (SyntaxKind::MinusEqualsToken, 2),
                _ => (SyntaxKind::MinusToken, 1),
            },
            '*' => match next {
                Some(b'=') => (SyntaxKind::AsteriskEqualsToken, 2),
                _ => (SyntaxKind::AsteriskToken, 1),
            },
            '/' => match next {
                Some(b'=') => (SyntaxKind::SlashEqualsToken, 2),
                _ => (SyntaxKind::SlashToken, 1),
            },
            '%' => match next {
                Some(b'=') => (SyntaxKind::PercentEqualsToken, 2),
                _ => (SyntaxKind::PercentToken, 1),
            },
            '&' => match next {
                Some(b'&') => (SyntaxKind::AmpersandAmpersandToken, 2),
                Some(b'=') => (SyntaxKind::AmpersandEqualsToken, 2),
                _ => (SyntaxKind::AmpersandToken, 1),
            },
            '|' => match next {
                Some(b'|') => (SyntaxKind::BarBarToken, 2),
                Some(b'=') => (SyntaxKind::BarEqualsToken, 2),
                _ => (SyntaxKind::BarToken, 1),
            },
            '^' => match next {
                Some(b'=') => (SyntaxKind::CaretEqualsToken, 2),
                _ => (SyntaxKind::CaretToken, 1),
            },
            other => (SyntaxKind::Unknown, other.len_utf8()),
        };
        self.pos += len;
        kind
    }

    /// Re-scan a `/` or `/=` token as a regular expression literal.
    ///
    /// Called by the parser when an operand is expected. The token value is
    /// the full literal text including flags.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(
            self.token,
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken
        ) {
            return self.token;
        }
        let mut pos = self.token_start + 1;
        let mut in_class = false;
        loop {
            let Some(ch) = self.char_at(pos) else {
                self.token_unterminated = true;
                break;
            };
            if is_line_break(ch) {
                self.token_unterminated = true;
                break;
            }
            pos += ch.len_utf8();
            match ch {
                '\\' => {
                    if let Some(escaped) = self.char_at(pos) {
                        if !is_line_break(escaped) {
                            pos += escaped.len_utf8();
                        }
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                _ => {}
            }
        }
        while let Some(ch) = self.char_at(pos) {
            if !is_identifier_part(ch) {
                break;
            }
            pos += ch.len_utf8();
        }
        self.pos = pos;
        self.token_value.clear();
        self.token_value
            .push_str(&self.text[self.token_start..self.pos]);
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
