//! Object Literal Checking Module
//!
//! Object literals double as class bodies and enumerations. This module
//! handles:
//! - Required documentation on the keys of class bodies
//! - Duplicate keys (member overloading)

use crate::conventions;
use crate::state::CheckerState;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};
use rustc_hash::FxHashSet;

impl<'a> CheckerState<'a> {
    pub(crate) fn check_object_literal(&mut self, literal: NodeIndex, properties: &[NodeIndex]) {
        let arena = self.arena;
        let documentation_required = self.is_class_body(literal);

        let mut members: FxHashSet<String> = FxHashSet::default();
        for &property in properties {
            let Some(NodeData::PropertyAssignment { name: key, .. }) = arena.get_data(property) else {
                continue;
            };
            if documentation_required && arena.jsdoc_of(*key).is_none() {
                self.error_at_node(DiagnosticKind::NoApidoc, *key);
            }
            if !members.insert(arena.get_name(*key)) {
                self.error_at_node(DiagnosticKind::Overload, *key);
            }
        }
    }

    /// A literal assigned to a prototype or a class name is a class body.
    fn is_class_body(&self, literal: NodeIndex) -> bool {
        let arena = self.arena;
        match arena.get_data(arena.parent_of(literal)) {
            Some(NodeData::Assignment { left, .. }) => {
                let left_name = arena.get_name(*left);
                conventions::is_prototype_name(&left_name) || conventions::is_class_name(&left_name)
            }
            _ => false,
        }
    }
}
