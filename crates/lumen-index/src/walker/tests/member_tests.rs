use super::*;
use pretty_assertions::assert_eq;

const WIDGET: &str = r"
class Widget {
public:
    Widget();
    ~Widget();
    void Draw(int layer) const;
    static int Count;
protected:
    virtual void Tick(float dt) = 0;
private:
    int* data;
};
";

#[test]
fn members_in_declaration_order() {
    let model = index(WIDGET);
    let widget = find_type(&model, "Widget");
    assert_eq!(
        member_names(widget),
        vec!["Widget", "~Widget", "Draw", "Count", "Tick", "data"]
    );
}

#[test]
fn constructor_and_destructor_kinds() {
    let model = index(WIDGET);
    let widget = find_type(&model, "Widget");
    let ctor = widget.members.first().expect("constructor");
    assert_eq!(ctor.kind, MemberKind::Constructor);
    assert_eq!(ctor.return_type, None);
    let dtor = find_member(widget, "~Widget");
    assert_eq!(dtor.kind, MemberKind::Destructor);
    assert_eq!(dtor.return_type, None);
}

#[test]
fn method_details() {
    let model = index(WIDGET);
    let draw = find_member(find_type(&model, "Widget"), "Draw");
    assert_eq!(draw.kind, MemberKind::Method);
    assert_eq!(draw.access, Access::Public);
    assert_eq!(draw.return_type.as_deref(), Some("void"));
    assert_eq!(draw.value_type, None);
    assert_eq!(draw.parameters.len(), 1);
    assert_eq!(draw.parameters[0].name, "layer");
    assert_eq!(draw.line, Some(6));
}

#[test]
fn static_field() {
    let model = index(WIDGET);
    let count = find_member(find_type(&model, "Widget"), "Count");
    assert_eq!(count.kind, MemberKind::Field);
    assert!(count.is_static);
    assert_eq!(count.value_type.as_deref(), Some("int"));
    assert!(count.parameters.is_empty());
}

#[test]
fn pure_virtual_method() {
    let model = index(WIDGET);
    let tick = find_member(find_type(&model, "Widget"), "Tick");
    assert_eq!(tick.access, Access::Protected);
    assert!(tick.is_virtual);
    assert!(tick.is_abstract);
    assert!(!tick.is_override);
}

#[test]
fn private_pointer_field() {
    let model = index(WIDGET);
    let data = find_member(find_type(&model, "Widget"), "data");
    assert_eq!(data.access, Access::Private);
    assert_eq!(data.value_type.as_deref(), Some("int*"));
}

#[test]
fn struct_members_default_to_public() {
    let model = index("struct Point { int x; int y; };\nclass Secret { int key; };\n");
    assert_eq!(find_member(find_type(&model, "Point"), "y").access, Access::Public);
    assert_eq!(find_member(find_type(&model, "Secret"), "key").access, Access::Private);
}

#[test]
fn override_flag() {
    let model = index("class Base { virtual void Tick(); };\nclass Derived : public Base { void Tick() override; };\n");
    let tick = find_member(find_type(&model, "Derived"), "Tick");
    assert!(tick.is_override);
    assert!(!tick.is_virtual);
    assert!(find_member(find_type(&model, "Base"), "Tick").is_virtual);
}

#[test]
fn inline_method_definitions_are_members() {
    let model = index("class Counter {\npublic:\n    int Get() const { int tmp = value; return tmp; }\nprivate:\n    int value = 0;\n};\n");
    let counter = find_type(&model, "Counter");
    assert_eq!(member_names(counter), vec!["Get", "value"]);
    assert_eq!(find_member(counter, "Get").return_type.as_deref(), Some("int"));
    let value = find_member(counter, "value");
    assert_eq!(value.kind, MemberKind::Field);
    assert!(!value.is_abstract);
}

#[test]
fn anonymous_union_members_belong_to_enclosing_class() {
    let model = index("class Variant {\n    union { int i; float f; };\n    int tag;\n};\n");
    let variant = find_type(&model, "Variant");
    assert_eq!(member_names(variant), vec!["i", "f", "tag"]);
    assert_eq!(find_member(variant, "i").access, Access::Private);
    assert_eq!(model.all_types().count(), 1);
}

#[test]
fn friends_are_not_members() {
    let model = index("class Owner {\n    friend class Helper;\n    friend void inspect(Owner& o);\n    int state;\n};\n");
    assert_eq!(member_names(find_type(&model, "Owner")), vec!["state"]);
    assert!(model.all_functions().next().is_none());
}

#[test]
fn static_factory_returns_pointer() {
    let model = index("class Shape {\npublic:\n    static Shape* Create();\n};\n");
    let create = find_member(find_type(&model, "Shape"), "Create");
    assert_eq!(create.containing_type, None);
    assert_eq!(create.return_type.as_deref(), Some("Shape*"));
    assert!(create.is_static);
}

#[test]
fn function_pointer_member_is_a_field() {
    let model = index("struct Hooks {\n    void (*cb)(int x);\n    int (*compare)(const void*, const void*);\n};\n");
    let hooks = find_type(&model, "Hooks");
    assert_eq!(member_names(hooks), vec!["cb", "compare"]);
    let cb = find_member(hooks, "cb");
    assert_eq!(cb.kind, MemberKind::Field);
    assert_eq!(cb.value_type.as_deref(), Some("void (*)(int)"));
    assert_eq!(cb.return_type, None);
    assert!(cb.parameters.is_empty());
    assert_eq!(
        find_member(hooks, "compare").value_type.as_deref(),
        Some("int (*)(const void*, const void*)")
    );
}
