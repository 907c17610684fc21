use super::*;
use pretty_assertions::assert_eq;

#[test]
fn one_record_per_aggregate() {
    let model = index("class A {};\nstruct B { int x; };\nunion C { int i; float f; };\n");
    let kinds: Vec<_> = model.types.iter().map(|t| (t.name.as_str(), t.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("A", TypeKind::Class),
            ("B", TypeKind::Struct),
            ("C", TypeKind::Union)
        ]
    );
    assert!(model.namespaces.is_empty());
}

#[test]
fn forward_declarations_are_not_recorded() {
    let model = index("class Forward;\nstruct Later;\nclass Real {};\n");
    let names: Vec<_> = model.all_types().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Real"]);
}

#[test]
fn base_and_interfaces_from_clause() {
    let model = index("class Base {};\nclass IBar {};\nclass Hero : public Base, private IBar {};\n");
    let hero = find_type(&model, "Hero");
    assert_eq!(hero.base_type.as_deref(), Some("Base"));
    assert_eq!(hero.interfaces, vec!["IBar".to_string()]);
    assert_eq!(find_type(&model, "Base").base_type, None);
}

#[test]
fn lines_are_one_based() {
    let model = index("\nclass A {};\n\nstruct B {};\n");
    assert_eq!(find_type(&model, "A").line, Some(2));
    assert_eq!(find_type(&model, "B").line, Some(4));
}

#[test]
fn anonymous_aggregates_are_dropped() {
    let model = index("struct { int x; } origin;\n");
    assert!(model.types.is_empty());
    assert_eq!(function_names(&model), vec!["origin"]);
    let origin = find_function(&model, "origin");
    assert_eq!(origin.kind, MemberKind::Field);
    assert_eq!(origin.value_type, None);
}

#[test]
fn nested_types_get_their_own_records() {
    let model = index("class Outer {\n  struct Inner { int v; };\n  int count;\n};\n");
    let outer = find_type(&model, "Outer");
    let inner = find_type(&model, "Inner");
    assert_eq!(member_names(outer), vec!["count"]);
    assert_eq!(member_names(inner), vec!["v"]);
    assert_eq!(inner.access, Access::Private);
    assert_eq!(outer.access, Access::Public);
}

#[test]
fn each_type_lives_in_exactly_one_bucket() {
    let model = index(
        "class Top {};\nnamespace a { class InA {}; }\nnamespace a { struct AlsoA {}; }\nnamespace b { union InB { int x; }; }\n",
    );
    let mut names: Vec<_> = model.all_types().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["AlsoA", "InA", "InB", "Top"]);
    assert_eq!(model.namespaces.len(), 2);
}
