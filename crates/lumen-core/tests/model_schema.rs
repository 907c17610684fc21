//! Serde roundtrip and JsonSchema validation for the structural model.

use lumen_core::{
    Access, MemberKind, MemberRecord, Namespace, ParameterRecord, StructuralModel, TypeKind,
    TypeRecord,
};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_model() -> StructuralModel {
    let possess = MemberRecord {
        name: "Possess".to_string(),
        kind: MemberKind::Method,
        line: Some(12),
        access: Access::Public,
        return_type: Some("void".to_string()),
        value_type: None,
        parameters: vec![ParameterRecord {
            name: "InPawn".to_string(),
            value_type: Some("APawn*".to_string()),
            has_default: false,
        }],
        is_static: false,
        is_virtual: true,
        is_abstract: false,
        is_override: true,
        annotations: vec!["UFUNCTION(BlueprintCallable)".to_string()],
        containing_type: None,
    };
    let controller = TypeRecord {
        name: "AController".to_string(),
        kind: TypeKind::Class,
        line: Some(8),
        access: Access::Public,
        base_type: Some("AActor".to_string()),
        interfaces: vec!["INavAgentInterface".to_string()],
        annotations: vec!["UCLASS()".to_string()],
        members: vec![possess],
    };
    let mut game = Namespace::new("Game::AI");
    game.types.push(controller);

    StructuralModel {
        language: "cpp".to_string(),
        namespaces: vec![game],
        types: Vec::new(),
        functions: Vec::new(),
        includes: vec!["CoreMinimal.h".to_string()],
    }
}

#[test]
fn model_roundtrips_through_json() {
    let model = sample_model();
    let json = serde_json::to_string_pretty(&model).expect("serialize");
    let recovered: StructuralModel = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(recovered, model);
}

#[test]
fn serialized_model_matches_generated_schema() {
    let schema = serde_json::to_value(schema_for!(StructuralModel)).expect("schema to json");
    let instance = serde_json::to_value(sample_model()).expect("model to json");
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema violations: {errors:?}");
}

#[test]
fn absent_collections_deserialize_as_empty() {
    let model: StructuralModel =
        serde_json::from_str(r#"{ "language": "c" }"#).expect("minimal model");
    assert!(model.is_empty());
    assert_eq!(model.language, "c");
}
