//! Assignment Checking Module
//!
//! Assignments are where the dialect declares things. This module handles:
//! - Class definitions (`comp.prj.Class = function() {...}`)
//! - Prototype bodies (`comp.prj.Class.prototype = {...}`)
//! - Instance fields (`this.field = value`), declared in constructors
//! - Static fields (`comp.prj.Class.field = value`), declared at top level
//!
//! The left side is classified in that order; the first matching role
//! decides which rules apply.

use crate::conventions;
use crate::jsdoc::JsDoc;
use crate::registry::ClassId;
use crate::state::CheckerState;
use crate::types::JsType;
use jsl_common::DiagnosticKind;
use jsl_parser::{NodeData, NodeIndex};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_assignment(&mut self, assignment: NodeIndex, left: NodeIndex, right: NodeIndex) {
        let arena = self.arena;
        let left_name = arena.get_name(left);
        let right_is_function = arena.is_function(right);

        if conventions::is_class_name(&left_name) {
            if right_is_function || matches!(arena.get_data(right), Some(NodeData::ObjectLiteral { .. })) {
                self.session.classes.define(&left_name, arena.line_of(assignment));
            }
            if right_is_function {
                self.check_class_definition(assignment, &left_name);
                return;
            }
        }
        if conventions::is_prototype_name(&left_name) {
            self.check_prototype_assignment(assignment, right);
            return;
        }
        if conventions::is_instance_member(arena, left) {
            // Methods assigned to `this` are not checked.
            if !right_is_function {
                self.check_instance_field_assignment(assignment, left);
            }
            return;
        }
        if conventions::is_static_member_name(&left_name) && !right_is_function {
            self.check_static_field_assignment(assignment, &left_name, right);
        }
    }

    // =========================================================================
    // Classes and Prototypes
    // =========================================================================

    fn check_class_definition(&mut self, assignment: NodeIndex, class_name: &str) {
        let in_package = match self.session.package() {
            Some(package) => class_name
                .strip_prefix(package)
                .is_some_and(|rest| rest.starts_with('.')),
            None => {
                self.error_at_node(DiagnosticKind::NoPackageDef, assignment);
                return;
            }
        };
        if !in_package {
            self.error_at_node(DiagnosticKind::BadClassPackage, assignment);
        }
        let Some(doc) = self.arena.jsdoc_of(assignment) else {
            self.error_at_node(DiagnosticKind::NoApidoc, assignment);
            return;
        };
        if !JsDoc::parse(doc).has_constructor() {
            self.error_at_node(DiagnosticKind::CtorAnnotation, assignment);
        }
    }

    fn check_prototype_assignment(&mut self, assignment: NodeIndex, right: NodeIndex) {
        if !matches!(self.arena.get_data(right), Some(NodeData::ObjectLiteral { .. })) {
            self.error_at_node(DiagnosticKind::BadRvalue, assignment);
        }
        if !self.session.legacy && self.enclosing_function(assignment).is_some() {
            self.error_at_node(DiagnosticKind::BadBodyDef, assignment);
        }
    }

    // =========================================================================
    // Instance Fields
    // =========================================================================

    /// `this.field = value`.
    ///
    /// Constructors declare instance fields; the first assignment must be
    /// documented with `@type` and later ones must not be documented. Other
    /// instance methods may only update declared fields.
    fn check_instance_field_assignment(&mut self, assignment: NodeIndex, left: NodeIndex) {
        let arena = self.arena;
        let Some(function) = self.enclosing_function(assignment) else {
            self.error_at_node_with(
                DiagnosticKind::BadThis,
                assignment,
                "Attempt to use this pointer as lvalue in global space.",
            );
            return;
        };
        let field_name = match arena.get_data(left) {
            Some(NodeData::PropertyAccess { name, .. }) => arena.get_name(*name),
            _ => return,
        };
        let class = self.enclosing_class(assignment);
        let doc = arena.jsdoc_of(assignment);
        let function = self.session.functions.get(function);
        let (is_constructor, is_static, is_anonymous) =
            (function.is_constructor(), function.is_static(), function.is_anonymous());

        if is_constructor {
            if !self.class_has_field(class, &field_name) {
                let Some(doc) = doc else {
                    self.error_at_node_with(
                        DiagnosticKind::NoApidoc,
                        assignment,
                        "Missing type annotation for field declaration.",
                    );
                    return;
                };
                if let Some(class) = class {
                    let ty = JsType::from_optional(JsDoc::parse(doc).type_type());
                    self.session.classes.get_mut(class).add_field(&field_name, ty);
                }
                return;
            }
            if doc.is_some() {
                self.error_at_node(DiagnosticKind::BadApidoc, assignment);
            }
        }

        if is_static {
            self.error_at_node_with(
                DiagnosticKind::BadThis,
                assignment,
                "Assignment to static field using this pointer.",
            );
            return;
        }
        if is_anonymous {
            self.error_at_node_with(
                DiagnosticKind::BadThis,
                assignment,
                "Attempt to use this pointer as lvalue in anonymous function.",
            );
            return;
        }
        if !self.class_has_field(class, &field_name) {
            self.error_at_node_with(
                DiagnosticKind::NoFieldDecl,
                assignment,
                "Instance field must be declared in constructor.",
            );
            return;
        }
        if conventions::is_constant_name(&field_name) {
            self.error_at_node(DiagnosticKind::ConstAssign, assignment);
        }
    }

    // =========================================================================
    // Static Fields
    // =========================================================================

    /// `comp.prj.Class.field = value`.
    ///
    /// Top-level assignments declare static fields and must be initialized
    /// with a plain value. Inside functions the field must already exist
    /// when it belongs to the enclosing class.
    fn check_static_field_assignment(&mut self, assignment: NodeIndex, left_name: &str, right: NodeIndex) {
        let arena = self.arena;
        let field_name = conventions::static_member_name(left_name);
        let class = self.enclosing_class(assignment);

        let Some(function) = self.enclosing_function(assignment) else {
            match arena.get_data(right) {
                Some(NodeData::New { .. }) => {
                    self.error_at_node_with(
                        DiagnosticKind::BadRvalue,
                        assignment,
                        "Can't initialize static field using new operator.",
                    );
                    return;
                }
                Some(NodeData::Call { .. }) => {
                    self.error_at_node_with(
                        DiagnosticKind::BadRvalue,
                        assignment,
                        "Can't initialize static field from function call.",
                    );
                    return;
                }
                _ => {}
            }
            let Some(class) = class else {
                return;
            };
            if self.session.classes.get(class).has_static_field(field_name) {
                return;
            }
            match arena.jsdoc_of(assignment) {
                Some(doc) => {
                    let ty = JsType::from_optional(JsDoc::parse(doc).type_type());
                    self.session
                        .classes
                        .get_mut(class)
                        .add_static_field(field_name, ty);
                }
                None => self.error_at_node_with(
                    DiagnosticKind::NoApidoc,
                    assignment,
                    "Missing type annotation for field declaration.",
                ),
            }
            return;
        };

        if self.session.functions.get(function).is_constructor() {
            self.error_at_node(DiagnosticKind::CtorStatic, assignment);
        }
        if let Some(class) = class {
            let class = self.session.classes.get(class);
            if class.name() == conventions::static_member_class_name(left_name)
                && !class.has_static_field(field_name)
            {
                self.error_at_node(DiagnosticKind::NoFieldDecl, assignment);
            }
        }
        if conventions::is_constant_name(left_name) {
            self.error_at_node(DiagnosticKind::ConstAssign, assignment);
        }
    }

    /// An unknown class has no fields.
    pub(crate) fn class_has_field(&self, class: Option<ClassId>, field_name: &str) -> bool {
        class.is_some_and(|class| self.session.classes.get(class).has_field(field_name))
    }
}
