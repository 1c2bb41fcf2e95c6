//! Switch statements: every case ends in `break` and a default exists.

use crate::state::CheckerState;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_switch_statement(&mut self, statement: NodeIndex, clauses: &[NodeIndex]) {
        let arena = self.arena;
        let mut has_default = false;
        for &clause in clauses {
            let Some(NodeData::CaseClause {
                expression,
                statements,
            }) = arena.get_data(clause)
            else {
                continue;
            };
            if expression.is_none() {
                has_default = true;
                continue;
            }
            // Only a break directly in the clause counts, not one nested in a block.
            let has_break = statements
                .iter()
                .any(|statement| matches!(arena.get_data(statement), Some(NodeData::Break { .. })));
            if !has_break {
                self.error_at_node(DiagnosticKind::NoBreak, clause);
            }
        }
        if !has_default {
            self.error_at_node(DiagnosticKind::NoDefault, statement);
        }
    }
}
