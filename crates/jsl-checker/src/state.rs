//! Checker state and node dispatch.
//!
//! `CheckerState` pairs a parsed file's arena with the session that holds
//! the file's registries and sink. Its methods are spread over several
//! modules, one per construct:
//! - `assignment_checker` - class, prototype, instance and static assignments
//! - `directive_checker` - `$package`, `$suppress`, `$extends`, `$legacy`
//! - `new_expression_checker` - `new` on static members
//! - `object_literal_checker` - documentation and duplicate keys
//! - `return_checker` - return values against declared types
//! - `switch_checker` - missing `break` and `default`
//! - `variable_checker` - variable initializers
//!
//! Scope resolution lives in `scope_finder` and structural type inference
//! in `type_inference`.

use crate::error::CheckError;
use crate::session::AnalysisSession;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeArena, NodeData, NodeIndex};
use tracing::trace;

pub struct CheckerState<'a> {
    pub(crate) arena: &'a NodeArena,
    pub(crate) session: &'a mut AnalysisSession,
}

impl<'a> CheckerState<'a> {
    pub fn new(arena: &'a NodeArena, session: &'a mut AnalysisSession) -> CheckerState<'a> {
        CheckerState { arena, session }
    }

    /// Visit every node of the file in document order.
    pub fn check_source_file(&mut self, root: NodeIndex) -> Result<(), CheckError> {
        for index in self.arena.preorder(root) {
            self.check_node(index)?;
        }
        if self.session.options().require_super {
            self.check_missing_super_classes();
        }
        Ok(())
    }

    fn check_node(&mut self, index: NodeIndex) -> Result<(), CheckError> {
        let arena = self.arena;
        let Some(data) = arena.get_data(index) else {
            return Ok(());
        };
        match data {
            NodeData::Assignment { left, right, .. } => {
                trace!(line = arena.line_of(index), "assignment");
                self.check_assignment(index, *left, *right);
            }
            NodeData::Call {
                expression,
                arguments,
            } => self.check_call(index, *expression, arguments.nodes.as_slice()),
            NodeData::New { expression, .. } => self.check_new_expression(index, *expression),
            NodeData::ObjectLiteral { properties } => {
                self.check_object_literal(index, properties.nodes.as_slice())
            }
            NodeData::Return { expression } => self.check_return_statement(index, *expression)?,
            NodeData::Switch { clauses, .. } => {
                self.check_switch_statement(index, clauses.nodes.as_slice())
            }
            NodeData::VariableDeclaration { name, initializer } => {
                self.check_variable_declaration(index, *name, *initializer)
            }
            _ => {}
        }
        Ok(())
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Report `kind` at the line of `node`.
    pub(crate) fn error_at_node(&mut self, kind: DiagnosticKind, node: NodeIndex) {
        let line = self.arena.line_of(node);
        self.session.sink.emit(kind, line, None);
    }

    /// Report `kind` with a detail sentence at the line of `node`.
    pub(crate) fn error_at_node_with(&mut self, kind: DiagnosticKind, node: NodeIndex, detail: &str) {
        let line = self.arena.line_of(node);
        self.session.sink.emit(kind, line, Some(detail));
    }

    /// Classes that never got a superclass, reported after the walk.
    pub(crate) fn check_missing_super_classes(&mut self) {
        let orphans: Vec<(u32, String)> = self
            .session
            .classes
            .iter()
            .filter(|(_, class)| !class.is_native() && class.super_class().is_none())
            .filter_map(|(_, class)| Some((class.definition_line()?, class.name().to_string())))
            .collect();
        for (line, name) in orphans {
            self.session
                .sink
                .emit(DiagnosticKind::NoSuper, line, Some(&format!("Class [{name}].")));
        }
    }
}
