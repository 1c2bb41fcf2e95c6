use super::*;

#[test]
fn test_is_jsdoc_comment() {
    assert!(is_jsdoc_comment("/** @type Number */"));
    assert!(is_jsdoc_comment("/**\n */"));
    assert!(!is_jsdoc_comment("/* plain */"));
    assert!(!is_jsdoc_comment("/**/"));
    assert!(!is_jsdoc_comment("/*** banner ***/"));
}

#[test]
fn test_find_block_comment_end() {
    let src = b"/* a */ x";
    assert_eq!(find_block_comment_end(src, 2), Some(7));
    assert_eq!(find_block_comment_end(b"/* open", 2), None);
}

#[test]
fn test_find_line_comment_end() {
    let src = b"// one\r\nx";
    assert_eq!(find_line_comment_end(src, 0), 6);
    assert_eq!(find_line_comment_end(b"// eof", 0), 6);
}

#[test]
fn test_comment_range_text() {
    let source = "x /** doc */ y";
    let range = CommentRange::new(2, 12, true);
    assert_eq!(range.get_text(source), "/** doc */");
    assert!(range.is_jsdoc(source));
    assert!(!CommentRange::new(2, 12, false).is_jsdoc(source));
}
