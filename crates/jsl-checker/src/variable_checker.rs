//! Variable Checking Module
//!
//! Variable declarations record the local variables of the enclosing
//! function with their inferred types. It handles:
//! - Function literals assigned to variables (rejected)
//! - Initializers reading an instance field (typed by the field)
//! - Everything else, typed by structural inference

use crate::state::CheckerState;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_variable_declaration(
        &mut self,
        declaration: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) {
        let arena = self.arena;
        // `var fn = function() {}` should be `function fn() {}`.
        if arena.is_function(initializer) {
            self.error_at_node(DiagnosticKind::BadFuncDef, declaration);
            return;
        }

        let ty = match arena.get_data(initializer) {
            Some(NodeData::PropertyAccess {
                expression,
                name: field,
            }) if arena.is_this(*expression) => {
                let class = self.enclosing_class(declaration);
                let field_name = arena.get_name(*field);
                let field_type = class.and_then(|class| {
                    self.session
                        .classes
                        .get(class)
                        .field(&field_name)
                        .map(|field| field.ty.clone())
                });
                match field_type {
                    Some(ty) => ty,
                    None => {
                        self.error_at_node(DiagnosticKind::NoFieldDecl, declaration);
                        return;
                    }
                }
            }
            _ => self.infer_type(initializer),
        };

        // Top-level variables belong to no function.
        if let Some(function) = self.enclosing_function(declaration) {
            let variable_name = arena.get_name(name);
            self.session
                .functions
                .get_mut(function)
                .add_variable(&variable_name, ty);
        }
    }
}
