//! Directive Checking Module
//!
//! Pseudo-calls that configure the analysis of the rest of the file:
//! - `$package('comp.prj')` sets the package classes must live in
//! - `$suppress('KIND')` silences one diagnostic kind
//! - `$extends(comp.prj.Sub, comp.prj.Base)` links a class to its superclass
//! - `$legacy()` relaxes the prototype body rules

use crate::conventions;
use crate::registry::SuperClassLink;
use crate::state::CheckerState;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};
use tracing::debug;

const PACKAGE: &str = "$package";
const SUPPRESS: &str = "$suppress";
const EXTENDS: &str = "$extends";
const LEGACY: &str = "$legacy";

impl<'a> CheckerState<'a> {
    pub(crate) fn check_call(&mut self, call: NodeIndex, callee: NodeIndex, arguments: &[NodeIndex]) {
        match self.arena.get_name(callee).as_str() {
            PACKAGE => self.check_package_directive(call, arguments),
            SUPPRESS => self.check_suppress_directive(call, arguments),
            EXTENDS => self.check_extends_directive(call, arguments),
            LEGACY => {
                debug!(line = self.arena.line_of(call), "legacy mode");
                self.session.legacy = true;
            }
            _ => {}
        }
    }

    /// Value of a string literal argument.
    fn string_argument(&self, argument: NodeIndex) -> Option<&'a str> {
        let arena = self.arena;
        match arena.get_data(argument)? {
            NodeData::StringLiteral { value } => Some(value),
            _ => None,
        }
    }

    fn check_package_directive(&mut self, call: NodeIndex, arguments: &[NodeIndex]) {
        let [argument] = arguments else {
            self.error_at_node_with(
                DiagnosticKind::BadArgsCount,
                call,
                "$package pseudo-operator needs exactly one argument.",
            );
            return;
        };
        let Some(package) = self.string_argument(*argument) else {
            self.error_at_node(DiagnosticKind::BadArgType, call);
            return;
        };
        debug!(package, "package");
        self.session.package = Some(package.to_string());
    }

    fn check_suppress_directive(&mut self, call: NodeIndex, arguments: &[NodeIndex]) {
        let [argument] = arguments else {
            self.error_at_node_with(
                DiagnosticKind::BadArgsCount,
                call,
                "$suppress pseudo-operator needs exactly one argument.",
            );
            return;
        };
        let Some(token) = self.string_argument(*argument) else {
            self.error_at_node(DiagnosticKind::BadArgType, call);
            return;
        };
        match DiagnosticKind::from_token(token) {
            Some(kind) => self.session.sink.suppress(kind),
            None => debug!(token, "unknown suppression token"),
        }
    }

    /// `$extends(Sub, Super)`: `Sub` must be a defined class; the link may
    /// not close a cycle or replace an existing superclass.
    fn check_extends_directive(&mut self, call: NodeIndex, arguments: &[NodeIndex]) {
        let [sub_class, super_class] = arguments else {
            self.error_at_node_with(
                DiagnosticKind::BadArgsCount,
                call,
                "$extends pseudo-operator needs exactly 2 arguments.",
            );
            return;
        };
        let sub_name = self.arena.get_name(*sub_class);
        if !conventions::is_class_name(&sub_name) {
            self.error_at_node_with(
                DiagnosticKind::BadClassName,
                call,
                &format!("Bad subclass name format [{sub_name}]."),
            );
            return;
        }
        if !self.session.classes.is_defined(&sub_name) {
            self.error_at_node(DiagnosticKind::NoClassDef, call);
            return;
        }
        let super_name = self.arena.get_name(*super_class);
        if !conventions::is_class_name(&super_name) {
            self.error_at_node_with(
                DiagnosticKind::BadClassName,
                call,
                &format!("Bad superclass name format [{super_name}]."),
            );
            return;
        }

        let classes = &mut self.session.classes;
        let sub_id = classes.get_or_create(&sub_name);
        let super_id = classes.get_or_create(&super_name);
        match classes.link_super_class(sub_id, super_id) {
            SuperClassLink::Linked | SuperClassLink::Unchanged => {}
            SuperClassLink::Circular => self.error_at_node_with(
                DiagnosticKind::NotSupported,
                call,
                &format!("Circular inheritance [{sub_name}] -> [{super_name}]."),
            ),
            SuperClassLink::AlreadySet(existing) => {
                let existing = self.session.classes.get(existing).name().to_string();
                self.error_at_node_with(
                    DiagnosticKind::NotSupported,
                    call,
                    &format!("Super class of [{sub_name}] already set to [{existing}]."),
                );
            }
        }
    }
}
