use super::*;
use pretty_assertions::assert_eq;

#[test]
fn definition_attaches_to_class_in_same_file() {
    let model = index(
        "class AController {\npublic:\n    void Possess(APawn* InPawn);\n};\n\nvoid AController::Possess(APawn* InPawn) {}\n",
    );
    let controller = find_type(&model, "AController");
    assert_eq!(
        member_names(controller),
        vec!["Possess", "AController::Possess"]
    );
    let definition = find_member(controller, "AController::Possess");
    assert_eq!(definition.kind, MemberKind::Method);
    assert_eq!(definition.containing_type.as_deref(), Some("AController"));
    assert_eq!(definition.access, Access::Public);
    assert_eq!(definition.line, Some(6));
    assert_eq!(definition.parameters[0].value_type.as_deref(), Some("APawn*"));
    assert!(model.all_functions().next().is_none());
}

#[test]
fn definition_copies_declared_access() {
    let model = index("class Vault {\n    void Open();\n};\nvoid Vault::Open() {}\n");
    let vault = find_type(&model, "Vault");
    assert_eq!(find_member(vault, "Vault::Open").access, Access::Private);
}

#[test]
fn unattached_definition_stays_free_with_owner() {
    let model = index("void AController::Possess(APawn* InPawn) {}\n");
    let possess = find_function(&model, "AController::Possess");
    assert_eq!(possess.kind, MemberKind::Function);
    assert_eq!(possess.containing_type.as_deref(), Some("AController"));
    assert_eq!(possess.return_type.as_deref(), Some("void"));
}

#[test]
fn out_of_line_constructor_and_destructor() {
    let model = index("Widget::Widget() : size(0) {}\nWidget::~Widget() {}\n");
    assert_eq!(
        find_function(&model, "Widget::Widget").kind,
        MemberKind::Constructor
    );
    assert_eq!(
        find_function(&model, "Widget::~Widget").kind,
        MemberKind::Destructor
    );
}

#[test]
fn definition_prefers_record_in_same_namespace() {
    let model = index(
        "class Shape {};\nnamespace geo {\nclass Shape {};\nvoid Shape::Draw() {}\n}\n",
    );
    let geo = model.namespace("geo").expect("geo namespace");
    assert_eq!(member_names(&geo.types[0]), vec!["Shape::Draw"]);
    assert!(model.types[0].members.is_empty());
}

#[test]
fn locals_of_definitions_are_dropped() {
    let model = index("void Game::Run() {\n    int frame = 0;\n    for (int i = 0; i < 3; ++i) {}\n}\n");
    assert_eq!(function_names(&model), vec!["Game::Run"]);
}
