//! Return Checking Module
//!
//! Compares returned values with the `@return` type of the enclosing
//! function. It handles:
//! - Bare `return;` against non-void declarations
//! - Unverifiable values (calls, conditionals, operators), checked only
//!   against void declarations
//! - Variables and instance fields, typed by their declarations
//! - `this`, typed as the enclosing class
//! - Literals and `new` expressions, typed structurally
//! - Constructors, which must not return values

use crate::error::CheckError;
use crate::state::CheckerState;
use crate::types::JsType;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_return_statement(
        &mut self,
        statement: NodeIndex,
        expression: NodeIndex,
    ) -> Result<(), CheckError> {
        let class = self.enclosing_class(statement);
        let Some(function) = self.enclosing_function(statement) else {
            return Err(CheckError::ReturnOutsideFunction {
                file: self.session.sink.file_name().to_string(),
                line: self.arena.line_of(statement),
            });
        };
        let declared = self.session.functions.get(function).declared_return_type().clone();
        let arena = self.arena;
        let value = arena.skip_parens(expression);

        let returned = match arena.get_data(value) {
            None => {
                if !declared.is_void() {
                    self.error_at_node(DiagnosticKind::BadReturn, statement);
                }
                return Ok(());
            }
            Some(
                NodeData::Conditional { .. }
                | NodeData::Call { .. }
                | NodeData::Binary { .. }
                | NodeData::Assignment { .. },
            ) => {
                if declared.is_void() {
                    self.error_at_node(DiagnosticKind::BadReturn, statement);
                }
                return Ok(());
            }
            Some(NodeData::Identifier { text }) if text != "undefined" => {
                let variable = self.session.functions.get(function).variable(text);
                match variable {
                    Some(variable) => variable.ty.clone(),
                    None => {
                        self.error_at_node(DiagnosticKind::NoVarDecl, statement);
                        return Ok(());
                    }
                }
            }
            Some(NodeData::PropertyAccess { expression, name }) if arena.is_this(*expression) => {
                let field_name = arena.get_name(*name);
                let field = class.and_then(|class| self.session.classes.get(class).field(&field_name));
                match field {
                    Some(field) => field.ty.clone(),
                    None => {
                        self.error_at_node(DiagnosticKind::NoFieldDecl, statement);
                        return Ok(());
                    }
                }
            }
            // Members of other objects are not tracked.
            Some(NodeData::PropertyAccess { .. } | NodeData::ElementAccess { .. }) => return Ok(()),
            Some(NodeData::This) => class.map_or(JsType::Unknown, |class| {
                JsType::from_name(self.session.classes.get(class).name())
            }),
            Some(_) => self.infer_type(value),
        };

        if self.session.functions.get(function).is_constructor() && !returned.is_void() {
            self.error_at_node(DiagnosticKind::CtorReturn, statement);
            return Ok(());
        }
        if returned == JsType::Undefined {
            return Ok(());
        }
        if returned.is_void() != declared.is_void()
            || !returned.is_kind_of(&declared, &self.session.classes)
        {
            self.error_at_node(DiagnosticKind::BadReturn, statement);
        }
        Ok(())
    }
}
