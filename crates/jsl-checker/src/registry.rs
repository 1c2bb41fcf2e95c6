//! Class and function registries.
//!
//! Both registries intern entries by qualified name in an arena and hand
//! out stable ids, so every resolution of the same name during one file's
//! analysis reaches the same entry. Validators add fields, static fields,
//! variables and superclass links incrementally as the walk proceeds.

use crate::conventions::{self, ROOT_OBJECT_CLASS};
use crate::types::JsType;
use jsl_common::limits::MAX_INHERITANCE_DEPTH;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionId(pub u32);

/// Named, typed slot: instance field or static field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsField {
    pub name: String,
    pub ty: JsType,
}

/// Local variable (or parameter) of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsVariable {
    pub name: String,
    pub ty: JsType,
}

// =============================================================================
// Classes
// =============================================================================

#[derive(Clone, Debug)]
pub struct JsClass {
    name: String,
    super_class: Option<ClassId>,
    fields: Vec<JsField>,
    static_fields: Vec<JsField>,
    /// Line of the class-name assignment that defined the class; entries
    /// created only by lookups stay undefined.
    definition_line: Option<u32>,
}

impl JsClass {
    fn new(name: &str) -> JsClass {
        JsClass {
            name: name.to_string(),
            super_class: None,
            fields: Vec::new(),
            static_fields: Vec::new(),
            definition_line: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn super_class(&self) -> Option<ClassId> {
        self.super_class
    }

    pub fn is_defined(&self) -> bool {
        self.definition_line.is_some()
    }

    pub fn definition_line(&self) -> Option<u32> {
        self.definition_line
    }

    /// Built-in classes and the root object type end inheritance chains.
    pub fn is_native(&self) -> bool {
        conventions::is_native_class_name(&self.name) || self.name == ROOT_OBJECT_CLASS
    }

    pub fn field(&self, name: &str) -> Option<&JsField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn add_field(&mut self, name: &str, ty: JsType) {
        debug!(class = %self.name, field = name, %ty, "declare field");
        self.fields.push(JsField {
            name: name.to_string(),
            ty,
        });
    }

    pub fn static_field(&self, name: &str) -> Option<&JsField> {
        self.static_fields.iter().find(|field| field.name == name)
    }

    pub fn has_static_field(&self, name: &str) -> bool {
        self.static_field(name).is_some()
    }

    pub fn add_static_field(&mut self, name: &str, ty: JsType) {
        debug!(class = %self.name, field = name, %ty, "declare static field");
        self.static_fields.push(JsField {
            name: name.to_string(),
            ty,
        });
    }

    pub fn fields(&self) -> &[JsField] {
        &self.fields
    }

    pub fn static_fields(&self) -> &[JsField] {
        &self.static_fields
    }
}

/// Result of linking a class to a superclass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuperClassLink {
    Linked,
    /// The same link already exists.
    Unchanged,
    /// The link would make the class its own ancestor.
    Circular,
    /// The class already has a different superclass.
    AlreadySet(ClassId),
}

#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<JsClass>,
    by_name: FxHashMap<String, ClassId>,
}

impl ClassRegistry {
    pub fn new() -> ClassRegistry {
        ClassRegistry::default()
    }

    pub fn find(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Look up a class, creating an undefined entry on first reference.
    pub fn get_or_create(&mut self, name: &str) -> ClassId {
        if let Some(id) = self.find(name) {
            return id;
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(JsClass::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Register a class definition. The first definition line is kept.
    pub fn define(&mut self, name: &str, line: u32) -> ClassId {
        let id = self.get_or_create(name);
        let class = self.get_mut(id);
        if class.definition_line.is_none() {
            debug!(class = name, line, "define class");
            class.definition_line = Some(line);
        }
        id
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.find(name).is_some_and(|id| self.get(id).is_defined())
    }

    /// Ids come from this registry, so indexing cannot fail.
    pub fn get(&self, id: ClassId) -> &JsClass {
        &self.classes[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: ClassId) -> &mut JsClass {
        &mut self.classes[id.0 as usize]
    }

    /// True if `ancestor` is `class` or appears in its superclass chain.
    pub fn inherits_from(&self, class: ClassId, ancestor: ClassId) -> bool {
        let mut current = Some(class);
        for _ in 0..MAX_INHERITANCE_DEPTH {
            match current {
                Some(id) if id == ancestor => return true,
                Some(id) => current = self.get(id).super_class,
                None => return false,
            }
        }
        false
    }

    /// Make `super_class` the superclass of `class`.
    ///
    /// The superclass is set at most once and the graph stays acyclic.
    pub fn link_super_class(&mut self, class: ClassId, super_class: ClassId) -> SuperClassLink {
        match self.get(class).super_class {
            Some(existing) if existing == super_class => return SuperClassLink::Unchanged,
            Some(existing) => return SuperClassLink::AlreadySet(existing),
            None => {}
        }
        if self.inherits_from(super_class, class) {
            return SuperClassLink::Circular;
        }
        debug!(
            class = %self.get(class).name,
            super_class = %self.get(super_class).name,
            "link super class"
        );
        self.get_mut(class).super_class = Some(super_class);
        SuperClassLink::Linked
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &JsClass)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index as u32), class))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn clear(&mut self) {
        self.classes.clear();
        self.by_name.clear();
    }
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Clone, Debug)]
pub struct JsFunction {
    /// Qualified name; empty for anonymous functions.
    name: String,
    declared_return_type: JsType,
    variables: Vec<JsVariable>,
}

impl JsFunction {
    fn new(name: &str) -> JsFunction {
        JsFunction {
            name: name.to_string(),
            declared_return_type: JsType::Void,
            variables: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_return_type(&self) -> &JsType {
        &self.declared_return_type
    }

    pub fn set_declared_return_type(&mut self, ty: JsType) {
        self.declared_return_type = ty;
    }

    pub fn variable(&self, name: &str) -> Option<&JsVariable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    pub fn add_variable(&mut self, name: &str, ty: JsType) {
        debug!(function = %self.name, variable = name, %ty, "declare variable");
        self.variables.push(JsVariable {
            name: name.to_string(),
            ty,
        });
    }

    pub fn variables(&self) -> &[JsVariable] {
        &self.variables
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// A function named like a class is that class's constructor.
    pub fn is_constructor(&self) -> bool {
        conventions::is_class_name(&self.name)
    }

    pub fn is_static(&self) -> bool {
        conventions::is_static_member_name(&self.name)
    }

    pub fn is_instance(&self) -> bool {
        conventions::is_prototype_member_name(&self.name)
    }
}

#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: Vec<JsFunction>,
    by_name: FxHashMap<String, FunctionId>,
}

impl FunctionRegistry {
    pub fn new() -> FunctionRegistry {
        FunctionRegistry::default()
    }

    pub fn find(&self, name: &str) -> Option<FunctionId> {
        self.by_name.get(name).copied()
    }

    /// Look up a function, creating it on first reference.
    ///
    /// The flag is true when the entry was created by this call.
    pub fn get_or_create(&mut self, name: &str) -> (FunctionId, bool) {
        if let Some(id) = self.find(name) {
            return (id, false);
        }
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(JsFunction::new(name));
        self.by_name.insert(name.to_string(), id);
        (id, true)
    }

    pub fn get(&self, id: FunctionId) -> &JsFunction {
        &self.functions[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: FunctionId) -> &mut JsFunction {
        &mut self.functions[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn clear(&mut self) {
        self.functions.clear();
        self.by_name.clear();
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;
