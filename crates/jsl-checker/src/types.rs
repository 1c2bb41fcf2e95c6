//! Symbolic Types Module
//!
//! A [`JsType`] is a name: one of the built-in kinds or a class name.
//! This module handles:
//! - Conversion between names and types
//! - The object/non-object split
//! - Cast compatibility, including superclass chain walks

use crate::registry::ClassRegistry;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JsType {
    #[default]
    Void,
    Undefined,
    Null,
    String,
    Number,
    Boolean,
    Object,
    Array,
    RegExp,
    Function,
    Unknown,
    /// A class, native (`Date`) or dialect (`comp.prj.Class`).
    Class(String),
}

impl JsType {
    /// Map a type name to a type. Built-in names are case sensitive, so
    /// `void` is an ordinary class name distinct from `Void`.
    pub fn from_name(name: &str) -> JsType {
        match name {
            "Void" => JsType::Void,
            "Undefined" => JsType::Undefined,
            "Null" => JsType::Null,
            "String" => JsType::String,
            "Number" => JsType::Number,
            "Boolean" => JsType::Boolean,
            "Object" => JsType::Object,
            "Array" => JsType::Array,
            "RegExp" => JsType::RegExp,
            "Function" => JsType::Function,
            "Unknown" => JsType::Unknown,
            _ => JsType::Class(name.to_string()),
        }
    }

    /// Type named by an optional documentation value; absent means `Void`.
    pub fn from_optional(name: Option<&str>) -> JsType {
        name.map_or(JsType::Void, JsType::from_name)
    }

    pub fn name(&self) -> &str {
        match self {
            JsType::Void => "Void",
            JsType::Undefined => "Undefined",
            JsType::Null => "Null",
            JsType::String => "String",
            JsType::Number => "Number",
            JsType::Boolean => "Boolean",
            JsType::Object => "Object",
            JsType::Array => "Array",
            JsType::RegExp => "RegExp",
            JsType::Function => "Function",
            JsType::Unknown => "Unknown",
            JsType::Class(name) => name,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, JsType::Void)
    }

    /// Everything except the primitive and built-in value kinds is an object.
    pub fn is_object(&self) -> bool {
        !matches!(
            self,
            JsType::Void
                | JsType::Undefined
                | JsType::Null
                | JsType::String
                | JsType::Number
                | JsType::Boolean
                | JsType::Function
                | JsType::Array
                | JsType::RegExp
        )
    }

    /// `self` equals `target` or casts to it.
    pub fn is_kind_of(&self, target: &JsType, classes: &ClassRegistry) -> bool {
        self == target || self.can_cast_to(target, classes)
    }

    pub fn can_cast_to(&self, target: &JsType, classes: &ClassRegistry) -> bool {
        if *self == JsType::Null {
            return !target.is_void();
        }
        if self == target {
            return true;
        }
        if self.is_object() && target.is_object() {
            if *target == JsType::Object {
                return true;
            }
            return match (classes.find(self.name()), classes.find(target.name())) {
                (Some(class), Some(ancestor)) => classes.inherits_from(class, ancestor),
                _ => false,
            };
        }
        // Primitive coercions: only toward Boolean.
        *target == JsType::Boolean
            && matches!(self, JsType::Undefined | JsType::String | JsType::Number)
    }
}

impl From<&str> for JsType {
    fn from(name: &str) -> JsType {
        JsType::from_name(name)
    }
}

impl fmt::Display for JsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod types_tests;
