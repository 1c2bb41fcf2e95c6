use super::*;

const BUILT_INS: [&str; 11] = [
    "Unknown", "Void", "Undefined", "Null", "String", "Number", "Boolean", "Object", "Array",
    "RegExp", "Function",
];

fn family() -> ClassRegistry {
    let mut classes = ClassRegistry::new();
    classes.get_or_create("comp.prj.GrandFather");
    classes.get_or_create("comp.prj.Father");
    classes.get_or_create("comp.prj.Son");
    classes
}

fn link(classes: &mut ClassRegistry, class: &str, super_class: &str) {
    let class = classes.get_or_create(class);
    let super_class = classes.get_or_create(super_class);
    classes.link_super_class(class, super_class);
}

#[test]
fn test_default_is_void() {
    assert_eq!(JsType::default(), JsType::Void);
    assert!(JsType::default().is_void());
    assert!(!JsType::Boolean.is_void());
    assert!(!JsType::from("comp.prj.Class").is_void());
}

#[test]
fn test_names_round_trip() {
    for name in BUILT_INS {
        assert_eq!(JsType::from_name(name).name(), name);
    }
    assert_eq!(JsType::from_name("comp.prj.Class"), JsType::Class("comp.prj.Class".to_string()));
    assert_eq!(JsType::from_name("void"), JsType::Class("void".to_string()));
    assert!(!JsType::from_name("void").is_void());
    assert_eq!(JsType::from_name("null"), JsType::Class("null".to_string()));
    assert_eq!(JsType::from_optional(None), JsType::Void);
    assert_eq!(JsType::from_optional(Some("Number")), JsType::Number);
}

#[test]
fn test_equality_is_by_name() {
    assert_eq!(JsType::from("comp.net.Class"), JsType::from("comp.net.Class"));
    assert_ne!(JsType::Boolean, JsType::Number);
    assert_ne!(JsType::from("comp.net.Class1"), JsType::from("comp.net.Class2"));
}

#[test]
fn test_object_kinds() {
    for ty in [
        JsType::Void,
        JsType::Undefined,
        JsType::Null,
        JsType::String,
        JsType::Number,
        JsType::Boolean,
        JsType::Function,
        JsType::Array,
        JsType::RegExp,
    ] {
        assert!(!ty.is_object(), "{ty} is not an object type");
    }
    assert!(JsType::Object.is_object());
    assert!(JsType::Unknown.is_object());
    assert!(JsType::from("Date").is_object());
    assert!(JsType::from("comp.prj.Class").is_object());
}

#[test]
fn test_cast_is_reflexive() {
    let classes = ClassRegistry::new();
    for name in BUILT_INS.into_iter().chain(["comp.prj.Class", "Date"]) {
        let ty = JsType::from(name);
        assert!(ty.can_cast_to(&ty, &classes), "{name} casts to itself");
        assert!(ty.is_kind_of(&ty, &classes));
    }
}

#[test]
fn test_null_casts_to_everything_but_void() {
    let classes = ClassRegistry::new();
    for name in BUILT_INS.into_iter().chain(["comp.prj.Class"]) {
        let target = JsType::from(name);
        assert_eq!(JsType::Null.can_cast_to(&target, &classes), !target.is_void(), "Null -> {name}");
    }
    for name in BUILT_INS.into_iter().filter(|name| *name != "Null") {
        assert!(!JsType::from(name).can_cast_to(&JsType::Null, &classes), "{name} -> Null");
    }
}

#[test]
fn test_primitive_casts_to_boolean() {
    let classes = ClassRegistry::new();
    for name in ["Null", "Undefined", "String", "Number"] {
        assert!(JsType::from(name).is_kind_of(&JsType::Boolean, &classes));
    }
    assert!(!JsType::Boolean.can_cast_to(&JsType::Number, &classes));
    assert!(!JsType::String.can_cast_to(&JsType::Number, &classes));
    assert!(!JsType::Number.can_cast_to(&JsType::String, &classes));
    assert!(!JsType::Array.can_cast_to(&JsType::Boolean, &classes));
    assert!(!JsType::from("js.net.XHR").can_cast_to(&JsType::Boolean, &classes));
}

#[test]
fn test_every_object_casts_to_object() {
    let classes = ClassRegistry::new();
    assert!(JsType::from("comp.prj.Class").can_cast_to(&JsType::Object, &classes));
    assert!(JsType::from("XMLHttpRequest").can_cast_to(&JsType::Object, &classes));
    assert!(!JsType::Object.can_cast_to(&JsType::from("comp.prj.Class"), &classes));
    assert!(!JsType::Array.can_cast_to(&JsType::Object, &classes));
}

#[test]
fn test_unrelated_classes_do_not_cast() {
    let classes = family();
    let grand_father = JsType::from("comp.prj.GrandFather");
    let father = JsType::from("comp.prj.Father");
    let son = JsType::from("comp.prj.Son");
    assert!(!son.can_cast_to(&grand_father, &classes));
    assert!(!father.can_cast_to(&grand_father, &classes));
    assert!(!grand_father.can_cast_to(&son, &classes));
}

#[test]
fn test_casts_follow_superclass_chain() {
    let mut classes = family();
    link(&mut classes, "comp.prj.Father", "comp.prj.GrandFather");
    link(&mut classes, "comp.prj.Son", "comp.prj.Father");

    let grand_father = JsType::from("comp.prj.GrandFather");
    let father = JsType::from("comp.prj.Father");
    let son = JsType::from("comp.prj.Son");
    assert!(son.can_cast_to(&grand_father, &classes));
    assert!(son.can_cast_to(&father, &classes));
    assert!(father.can_cast_to(&grand_father, &classes));
    assert!(son.is_kind_of(&grand_father, &classes));

    assert!(!grand_father.can_cast_to(&father, &classes));
    assert!(!grand_father.can_cast_to(&son, &classes));
    assert!(!father.can_cast_to(&son, &classes));
}

#[test]
fn test_unknown_class_casts_only_to_object() {
    let classes = family();
    let stranger = JsType::from("comp.prj.Stranger");
    assert!(stranger.can_cast_to(&JsType::Object, &classes));
    assert!(!stranger.can_cast_to(&JsType::from("comp.prj.Father"), &classes));
    assert!(!JsType::Unknown.can_cast_to(&JsType::from("comp.prj.Father"), &classes));
}
