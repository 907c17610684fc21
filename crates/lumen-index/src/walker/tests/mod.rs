pub(super) use ast_grep_language::SupportLang;
pub(super) use lumen_core::{
    Access, FreeFunction, MemberKind, MemberRecord, StructuralModel, TypeKind, TypeRecord,
};

mod member_tests;
mod out_of_line_tests;
mod type_tests;

fn index(source: &str) -> StructuralModel {
    crate::index_source(source, SupportLang::Cpp).expect("walk should succeed")
}

fn find_type<'a>(model: &'a StructuralModel, name: &str) -> &'a TypeRecord {
    model.find_type(name).unwrap_or_else(|| {
        let available: Vec<_> = model.all_types().map(|t| t.name.as_str()).collect();
        panic!("type {name:?} not found. Available types: {available:?}");
    })
}

fn find_member<'a>(record: &'a TypeRecord, name: &str) -> &'a MemberRecord {
    record.member(name).unwrap_or_else(|| {
        let available: Vec<_> = record.members.iter().map(|m| m.name.as_str()).collect();
        panic!(
            "member {name:?} not found on {}. Available members: {available:?}",
            record.name
        );
    })
}

fn find_function<'a>(model: &'a StructuralModel, name: &str) -> &'a FreeFunction {
    model
        .all_functions()
        .find(|f| f.name == name)
        .unwrap_or_else(|| {
            let available: Vec<_> = model.all_functions().map(|f| f.name.as_str()).collect();
            panic!("function {name:?} not found. Available functions: {available:?}");
        })
}

fn member_names(record: &TypeRecord) -> Vec<&str> {
    record.members.iter().map(|m| m.name.as_str()).collect()
}

fn function_names(model: &StructuralModel) -> Vec<&str> {
    model.all_functions().map(|f| f.name.as_str()).collect()
}

fn fixture_model() -> StructuralModel {
    index(include_str!("../../../tests/fixtures/sample.cpp"))
}

fn engine_model() -> StructuralModel {
    index(include_str!("../../../tests/fixtures/engine_hero.h"))
}
