//! Scope Finding Module
//!
//! Maps any node to the declared function and class that enclose it.
//! It handles:
//! - Finding the nearest enclosing function node
//! - Naming anonymous functions after the assignment or prototype
//!   property they initialize
//! - Registering functions (declared return type, documented parameters)
//! - Deriving the enclosing class from a function name

use crate::conventions;
use crate::jsdoc::JsDoc;
use crate::registry::{ClassId, FunctionId};
use crate::state::CheckerState;
use crate::types::JsType;
use jsl_parser::{NodeData, NodeIndex};

/// Identity of a function node as seen by the registries.
#[derive(Debug)]
pub(crate) struct FunctionIdentity<'a> {
    /// Qualified function name, empty for anonymous functions.
    pub name: String,
    /// Documentation that declares the function's types.
    pub doc: Option<&'a str>,
    /// Name the enclosing class is derived from.
    pub class_basis: String,
}

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Function Enclosure
    // =========================================================================

    /// Nearest function node strictly above `index`.
    pub(crate) fn find_enclosing_function(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.arena
            .ancestors(index)
            .find(|&ancestor| self.arena.is_function(ancestor))
    }

    /// Name and documentation of a function node.
    ///
    /// Named functions speak for themselves. An anonymous function takes
    /// the name of what it is assigned to: the left side of an assignment
    /// (documented by the assignment), or `<left>.<key>` for a property of
    /// an object literal assigned to something (documented by the key).
    pub(crate) fn function_identity(&self, function: NodeIndex) -> Option<FunctionIdentity<'a>> {
        let arena = self.arena;
        let data = arena.get_function(function)?;
        if data.name.is_some() {
            let name = arena.get_name(data.name);
            return Some(FunctionIdentity {
                class_basis: name.clone(),
                name,
                doc: arena.jsdoc_of(function),
            });
        }

        let parent = arena.parent_of(function);
        match arena.get_data(parent) {
            Some(NodeData::Assignment { left, .. }) => {
                let name = arena.get_name(*left);
                Some(FunctionIdentity {
                    class_basis: name.clone(),
                    name,
                    doc: arena.jsdoc_of(parent),
                })
            }
            Some(NodeData::PropertyAssignment { name: key, .. }) => {
                let literal = arena.parent_of(parent);
                let assignment = arena.parent_of(literal);
                match arena.get_data(assignment) {
                    Some(NodeData::Assignment { left, .. }) => {
                        let owner = arena.get_name(*left);
                        Some(FunctionIdentity {
                            name: format!("{owner}.{}", arena.get_name(*key)),
                            doc: arena.jsdoc_of(*key),
                            class_basis: owner,
                        })
                    }
                    _ => Some(anonymous_identity(arena.jsdoc_of(function))),
                }
            }
            _ => Some(anonymous_identity(arena.jsdoc_of(function))),
        }
    }

    /// Resolve and register the function enclosing `index`.
    ///
    /// Documentation, when present, (re)declares the return type. On first
    /// registration the function's parameters become variables typed by
    /// the positional `@param` tags.
    pub(crate) fn enclosing_function(&mut self, index: NodeIndex) -> Option<FunctionId> {
        let function = self.find_enclosing_function(index)?;
        let identity = self.function_identity(function)?;
        let doc = identity.doc.map(JsDoc::parse);

        let functions = &mut self.session.functions;
        let (id, created) = functions.get_or_create(&identity.name);
        if let Some(doc) = &doc {
            functions
                .get_mut(id)
                .set_declared_return_type(JsType::from_optional(doc.return_type()));
        }
        if created {
            let parameters = self
                .arena
                .get_function(function)
                .map(|data| data.parameters.nodes.as_slice())
                .unwrap_or_default();
            for (position, &parameter) in parameters.iter().enumerate() {
                let Some(name) = self.arena.identifier_text(parameter) else {
                    continue;
                };
                let ty = doc
                    .as_ref()
                    .and_then(|doc| doc.param_type(position))
                    .map_or(JsType::Unknown, JsType::from_name);
                functions.get_mut(id).add_variable(name, ty);
            }
        }
        Some(id)
    }

    // =========================================================================
    // Class Enclosure
    // =========================================================================

    /// Resolve and register the class enclosing `index`.
    ///
    /// Outside any function only a static member assignment names a class.
    pub(crate) fn enclosing_class(&mut self, index: NodeIndex) -> Option<ClassId> {
        let class_name = match self.find_enclosing_function(index) {
            Some(function) => {
                let basis = self.function_identity(function)?.class_basis;
                class_name_of(&basis).to_string()
            }
            None => match self.arena.get_data(index) {
                Some(NodeData::Assignment { left, .. }) => {
                    let left_name = self.arena.get_name(*left);
                    if !conventions::is_static_member_name(&left_name) {
                        return None;
                    }
                    conventions::static_member_class_name(&left_name).to_string()
                }
                _ => return None,
            },
        };
        if class_name.is_empty() {
            return None;
        }
        Some(self.session.classes.get_or_create(&class_name))
    }
}

fn anonymous_identity(doc: Option<&str>) -> FunctionIdentity<'_> {
    FunctionIdentity {
        name: String::new(),
        doc,
        class_basis: String::new(),
    }
}

/// Class part of a function name: static methods, prototypes and prototype
/// members drop their trailing segments, constructors are the class.
fn class_name_of(function_name: &str) -> &str {
    if conventions::is_static_member_name(function_name) {
        conventions::static_member_class_name(function_name)
    } else if conventions::is_prototype_name(function_name) {
        conventions::prototype_class_name(function_name)
    } else if conventions::is_prototype_member_name(function_name) {
        conventions::prototype_member_class_name(function_name)
    } else {
        function_name
    }
}
