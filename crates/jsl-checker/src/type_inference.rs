//! Structural type inference.
//!
//! Types are read off the shape of an expression only. Values whose type
//! would need real inference (call results, operators, conditionals) come
//! out as `Unknown` or are handled by the callers before reaching here.

use crate::conventions;
use crate::state::CheckerState;
use crate::types::JsType;
use jsl_parser::{NodeData, NodeIndex};
use jsl_scanner::SyntaxKind;

impl<'a> CheckerState<'a> {
    /// Infer the type of an expression from its syntax.
    ///
    /// An absent expression is `Void`.
    pub(crate) fn infer_type(&self, expression: NodeIndex) -> JsType {
        if expression.is_none() {
            return JsType::Void;
        }
        let arena = self.arena;
        let expression = arena.skip_parens(expression);
        let Some(data) = arena.get_data(expression) else {
            return JsType::Unknown;
        };
        match data {
            NodeData::New { expression, .. } => {
                let target = arena.get_name(*expression);
                if target.is_empty() {
                    JsType::Unknown
                } else {
                    JsType::from_name(&target)
                }
            }
            NodeData::Call { expression, .. } => call_result_type(&arena.get_name(*expression)),
            NodeData::Identifier { text } if text.eq_ignore_ascii_case("undefined") => {
                JsType::Undefined
            }
            NodeData::PropertyAccess { .. } => {
                let name = arena.get_name(expression);
                if conventions::is_static_member_name(&name) {
                    JsType::from_name(conventions::static_member_class_name(&name))
                } else {
                    JsType::Unknown
                }
            }
            NodeData::StringLiteral { .. } => JsType::String,
            NodeData::NumericLiteral { .. } => JsType::Number,
            NodeData::BooleanLiteral { .. } => JsType::Boolean,
            NodeData::NullLiteral => JsType::Null,
            NodeData::ObjectLiteral { .. } => JsType::Object,
            NodeData::Function(_) => JsType::Function,
            NodeData::ArrayLiteral { .. } => JsType::Array,
            NodeData::RegexLiteral { .. } => JsType::RegExp,
            NodeData::Unary { operator, .. } => unary_result_type(*operator),
            _ => JsType::Unknown,
        }
    }
}

/// `js.lang.LogFactory.getLogger(...)` is a static factory of its class;
/// `js.util.Timer(...)` calls a constructor as a function.
fn call_result_type(callee: &str) -> JsType {
    let Some((owner, member)) = callee.rsplit_once('.') else {
        return JsType::Unknown;
    };
    if member.starts_with(|c: char| c.is_lowercase()) {
        JsType::from_name(owner)
    } else {
        JsType::from_name(callee)
    }
}

fn unary_result_type(operator: SyntaxKind) -> JsType {
    match operator {
        SyntaxKind::ExclamationToken | SyntaxKind::DeleteKeyword => JsType::Boolean,
        SyntaxKind::TypeOfKeyword => JsType::String,
        SyntaxKind::VoidKeyword => JsType::Undefined,
        SyntaxKind::MinusToken
        | SyntaxKind::PlusToken
        | SyntaxKind::TildeToken
        | SyntaxKind::PlusPlusToken
        | SyntaxKind::MinusMinusToken => JsType::Number,
        _ => JsType::Unknown,
    }
}

#[cfg(test)]
#[path = "tests/type_inference_tests.rs"]
mod type_inference_tests;
