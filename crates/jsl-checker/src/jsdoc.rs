//! Documentation comment tags.
//!
//! Only five tags carry meaning for the checker: `@constructor`,
//! `@return <Type>`, `@type <Type>`, `@param <Type> name` and
//! `@throws <Type>`. Each tag takes the next whitespace-delimited token
//! as its type name; `@param` and `@throws` accumulate in order.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^@]+@(constructor|return|type|param|throws)\b(?:[ \t]+(\S+))?.*$")
        .expect("valid regex")
});

const CONSTRUCTOR: &str = "constructor";
const RETURN: &str = "return";
const TYPE: &str = "type";
const PARAM: &str = "param";
const THROWS: &str = "throws";

/// Tag table extracted from one documentation comment.
#[derive(Clone, Debug, Default)]
pub struct JsDoc {
    tags: FxHashMap<&'static str, Vec<Option<String>>>,
}

impl JsDoc {
    pub fn parse(text: &str) -> JsDoc {
        let mut tags: FxHashMap<&'static str, Vec<Option<String>>> = FxHashMap::default();
        for captures in TAG_RE.captures_iter(text) {
            let tag = match captures.get(1).map(|m| m.as_str()) {
                Some(CONSTRUCTOR) => CONSTRUCTOR,
                Some(RETURN) => RETURN,
                Some(TYPE) => TYPE,
                Some(PARAM) => PARAM,
                Some(THROWS) => THROWS,
                _ => continue,
            };
            let value = captures.get(2).map(|m| m.as_str().to_string());
            tags.entry(tag).or_default().push(value);
        }
        JsDoc { tags }
    }

    /// Parse an optional comment; an absent comment has no tags.
    pub fn from_optional(text: Option<&str>) -> JsDoc {
        text.map(JsDoc::parse).unwrap_or_default()
    }

    pub fn has_constructor(&self) -> bool {
        self.tags.contains_key(CONSTRUCTOR)
    }

    pub fn return_type(&self) -> Option<&str> {
        self.value(RETURN, 0)
    }

    pub fn type_type(&self) -> Option<&str> {
        self.value(TYPE, 0)
    }

    /// Type of the `index`-th `@param` tag.
    pub fn param_type(&self, index: usize) -> Option<&str> {
        self.value(PARAM, index)
    }

    /// Type of the `index`-th `@throws` tag.
    pub fn throws_type(&self, index: usize) -> Option<&str> {
        self.value(THROWS, index)
    }

    fn value(&self, tag: &str, index: usize) -> Option<&str> {
        self.tags.get(tag)?.get(index)?.as_deref()
    }
}

#[cfg(test)]
#[path = "tests/jsdoc_tests.rs"]
mod jsdoc_tests;
