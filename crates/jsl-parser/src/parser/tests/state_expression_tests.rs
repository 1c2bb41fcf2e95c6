use super::*;
use jsl_scanner::SyntaxKind;

fn parse_expression(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file().expect("source should parse");
    let arena = parser.into_arena();
    let Some(NodeData::SourceFile { statements }) = arena.get_data(root) else {
        panic!("root is not a source file");
    };
    let expr = match arena.get_data(statements.nodes[0]) {
        Some(NodeData::ExpressionStatement { expression }) => *expression,
        other => panic!("expected expression statement, got {other:?}"),
    };
    (arena, expr)
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let (arena, expr) = parse_expression("a + b * c;");
    let Some(NodeData::Binary { left, operator, right }) = arena.get_data(expr) else {
        panic!("expected binary");
    };
    assert_eq!(*operator, SyntaxKind::PlusToken);
    assert_eq!(arena.identifier_text(*left), Some("a"));
    assert!(matches!(
        arena.get_data(*right),
        Some(NodeData::Binary {
            operator: SyntaxKind::AsteriskToken,
            ..
        })
    ));
}

#[test]
fn test_subtraction_is_left_associative() {
    let (arena, expr) = parse_expression("a - b - c;");
    let Some(NodeData::Binary { left, right, .. }) = arena.get_data(expr) else {
        panic!("expected binary");
    };
    assert!(matches!(arena.get_data(*left), Some(NodeData::Binary { .. })));
    assert_eq!(arena.identifier_text(*right), Some("c"));
}

#[test]
fn test_assignment_is_right_associative() {
    let (arena, expr) = parse_expression("a = b += 1;");
    let Some(NodeData::Assignment { operator, right, .. }) = arena.get_data(expr) else {
        panic!("expected assignment");
    };
    assert_eq!(*operator, SyntaxKind::EqualsToken);
    assert!(matches!(
        arena.get_data(*right),
        Some(NodeData::Assignment {
            operator: SyntaxKind::PlusEqualsToken,
            ..
        })
    ));
}

#[test]
fn test_new_with_member_call_chain() {
    let (arena, expr) = parse_expression("new js.util.Timer(1).start();");
    let Some(NodeData::Call { expression, .. }) = arena.get_data(expr) else {
        panic!("expected call");
    };
    let Some(NodeData::PropertyAccess { expression: target, .. }) = arena.get_data(*expression) else {
        panic!("expected property access");
    };
    let Some(NodeData::New { expression: callee, arguments }) = arena.get_data(*target) else {
        panic!("expected new");
    };
    assert_eq!(arena.get_name(*callee), "js.util.Timer");
    assert_eq!(arguments.len(), 1);
}

#[test]
fn test_new_without_arguments() {
    let (arena, expr) = parse_expression("new Foo;");
    let Some(NodeData::New { arguments, .. }) = arena.get_data(expr) else {
        panic!("expected new");
    };
    assert!(arguments.is_empty());
}

#[test]
fn test_function_expression_with_member_call() {
    let (arena, expr) = parse_expression("x = function() {}.bind(this);");
    let Some(NodeData::Assignment { right, .. }) = arena.get_data(expr) else {
        panic!("expected assignment");
    };
    let Some(NodeData::Call { expression, .. }) = arena.get_data(*right) else {
        panic!("expected call");
    };
    let Some(NodeData::PropertyAccess { expression: func, .. }) = arena.get_data(*expression) else {
        panic!("expected property access");
    };
    assert!(arena.is_function(*func));
}

#[test]
fn test_regex_literal_in_operand_position() {
    let (arena, expr) = parse_expression("x = /a\\/b[/]/gi.test(s);");
    let Some(NodeData::Assignment { right, .. }) = arena.get_data(expr) else {
        panic!("expected assignment");
    };
    let regex = arena
        .preorder(*right)
        .into_iter()
        .find_map(|idx| match arena.get_data(idx) {
            Some(NodeData::RegexLiteral { text }) => Some(text.clone()),
            _ => None,
        });
    assert_eq!(regex.as_deref(), Some("/a\\/b[/]/gi"));
}

#[test]
fn test_division_is_not_a_regex() {
    let (arena, expr) = parse_expression("a / b / c;");
    assert!(matches!(
        arena.get_data(expr),
        Some(NodeData::Binary {
            operator: SyntaxKind::SlashToken,
            ..
        })
    ));
}

#[test]
fn test_unary_operators() {
    let (arena, expr) = parse_expression("typeof x;");
    assert!(matches!(
        arena.get_data(expr),
        Some(NodeData::Unary {
            operator: SyntaxKind::TypeOfKeyword,
            prefix: true,
            ..
        })
    ));

    let (arena, expr) = parse_expression("i++;");
    assert!(matches!(
        arena.get_data(expr),
        Some(NodeData::Unary {
            operator: SyntaxKind::PlusPlusToken,
            prefix: false,
            ..
        })
    ));
}

#[test]
fn test_conditional_and_keyword_member_names() {
    let (arena, expr) = parse_expression("a ? b.delete : c['default'];");
    let Some(NodeData::Conditional { when_true, when_false, .. }) = arena.get_data(expr) else {
        panic!("expected conditional");
    };
    assert_eq!(arena.get_name(*when_true), "b.delete");
    assert!(matches!(arena.get_data(*when_false), Some(NodeData::ElementAccess { .. })));
}

#[test]
fn test_object_literal_keys() {
    let (arena, expr) = parse_expression("x = { a: 1, 'b c': 2, 3: 3, default: 4, };");
    let Some(NodeData::Assignment { right, .. }) = arena.get_data(expr) else {
        panic!("expected assignment");
    };
    let Some(NodeData::ObjectLiteral { properties }) = arena.get_data(*right) else {
        panic!("expected object literal");
    };
    let keys: Vec<String> = properties
        .iter()
        .map(|prop| match arena.get_data(prop) {
            Some(NodeData::PropertyAssignment { name, .. }) => arena.get_name(*name),
            _ => String::new(),
        })
        .collect();
    assert_eq!(keys, vec!["a", "b c", "3", "default"]);
}

#[test]
fn test_array_literal_with_holes() {
    let (arena, expr) = parse_expression("[1, , 2];");
    let Some(NodeData::ArrayLiteral { elements }) = arena.get_data(expr) else {
        panic!("expected array literal");
    };
    assert_eq!(elements.len(), 3);
    assert!(elements.nodes[1].is_none());
}

#[test]
fn test_invalid_assignment_target_is_error() {
    let mut parser = ParserState::new("test.js".to_string(), "a + b = c;".to_string());
    let err = parser.parse_source_file().unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("left-hand side"));
}

#[test]
fn test_unterminated_comment_is_error() {
    let mut parser = ParserState::new("test.js".to_string(), "/* oops\ncomp.prj.A = function(){};".to_string());
    let err = parser.parse_source_file().unwrap_err();
    assert_eq!(err.message, "Unterminated comment.");
    assert_eq!(err.line, 1);

    let source = "x = function() {\n/* open\n".to_string();
    let mut parser = ParserState::new("test.js".to_string(), source);
    let err = parser.parse_source_file().unwrap_err();
    assert_eq!(err.message, "Unterminated comment.");
    assert_eq!(err.line, 2);
}

#[test]
fn test_deep_nesting_is_bounded() {
    let source = format!("x = {}1{};", "(".repeat(2_000), ")".repeat(2_000));
    let mut parser = ParserState::new("test.js".to_string(), source);
    let err = parser.parse_source_file().unwrap_err();
    assert!(err.message.contains("nesting"));
}
