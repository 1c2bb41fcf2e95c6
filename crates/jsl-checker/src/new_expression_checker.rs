//! `new` on static members.

use crate::conventions;
use crate::state::CheckerState;
use jsl_common::DiagnosticKind;
use jsl_parser::NodeIndex;

impl<'a> CheckerState<'a> {
    /// `new comp.prj.Class.member()` instantiates a field, not a class.
    pub(crate) fn check_new_expression(&mut self, new_expression: NodeIndex, target: NodeIndex) {
        let target_name = self.arena.get_name(target);
        if conventions::is_static_member_name(&target_name) {
            self.error_at_node_with(
                DiagnosticKind::NotSupported,
                new_expression,
                &format!("Can't use new operator on member [{target_name}]."),
            );
        }
    }
}
