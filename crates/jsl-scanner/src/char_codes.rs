//! Character classification for the scanner.

#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}'
    ) || (ch > '\u{7F}' && ch.is_whitespace() && !is_line_break(ch))
}

#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '$' || ch == '_' || (ch > '\u{7F}' && ch.is_alphabetic())
}

#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit() || (ch > '\u{7F}' && ch.is_alphanumeric())
}
