//! Attachment of documentation comments to syntax nodes.

use jsl_parser::{NodeArena, NodeData, NodeIndex, ParserState};

fn parse(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser
        .parse_source_file()
        .unwrap_or_else(|err| panic!("unexpected parse error: {err}"));
    (parser.into_arena(), root)
}

fn find(arena: &NodeArena, root: NodeIndex, pred: impl Fn(&NodeData) -> bool) -> NodeIndex {
    arena
        .preorder(root)
        .into_iter()
        .find(|&idx| arena.get_data(idx).is_some_and(&pred))
        .expect("node not found")
}

#[test]
fn assignment_owns_statement_doc() {
    let (arena, root) = parse("/** @constructor */\ncomp.prj.Class = function() {};");
    let assignment = find(&arena, root, |d| matches!(d, NodeData::Assignment { .. }));
    assert_eq!(arena.jsdoc_of(assignment), Some("/** @constructor */"));
    let statement = arena.parent_of(assignment);
    assert_eq!(arena.jsdoc_of(statement), None);
}

#[test]
fn plain_block_comment_is_not_documentation() {
    let (arena, root) = parse("/* note */\nx = 1;");
    let assignment = find(&arena, root, |d| matches!(d, NodeData::Assignment { .. }));
    assert_eq!(arena.jsdoc_of(assignment), None);
}

#[test]
fn last_doc_comment_wins() {
    let (arena, root) = parse("/** first */\n/** second */\nx = 1;");
    let assignment = find(&arena, root, |d| matches!(d, NodeData::Assignment { .. }));
    assert_eq!(arena.jsdoc_of(assignment), Some("/** second */"));
}

#[test]
fn object_literal_keys_own_their_docs() {
    let source = "p = {\n  /** @type Number */\n  a: 1,\n  b: 2\n};";
    let (arena, root) = parse(source);
    let docs: Vec<Option<String>> = arena
        .preorder(root)
        .into_iter()
        .filter_map(|idx| match arena.get_data(idx) {
            Some(NodeData::PropertyAssignment { name, .. }) => {
                Some(arena.jsdoc_of(*name).map(str::to_string))
            }
            _ => None,
        })
        .collect();
    assert_eq!(docs, vec![Some("/** @type Number */".to_string()), None]);
}

#[test]
fn function_declaration_and_variable_statement_docs() {
    let source = "/** @return Number */\nfunction f() { /** @type String */ var s = 'a'; return 1; }";
    let (arena, root) = parse(source);
    let func = find(&arena, root, |d| matches!(d, NodeData::Function(_)));
    assert_eq!(arena.jsdoc_of(func), Some("/** @return Number */"));
    let var = find(&arena, root, |d| matches!(d, NodeData::VariableStatement { .. }));
    assert_eq!(arena.jsdoc_of(var), Some("/** @type String */"));
}

#[test]
fn function_expression_doc_after_operator() {
    let (arena, root) = parse("x = /** @return String */ function() { return 'a'; };");
    let func = find(&arena, root, |d| matches!(d, NodeData::Function(_)));
    assert_eq!(arena.jsdoc_of(func), Some("/** @return String */"));
}
