use lifestamp_core::{
    parse_timestamp_field_key, ColumnDef, FieldDefinition, FieldKey, TimestampField,
    TimestampFieldKey,
};
use std::collections::HashSet;

#[test]
fn resolves_fixed_physical_keys() {
    assert_eq!(TimestampFieldKey::CreatedAt.field_key().as_str(), "created_at");
    assert_eq!(TimestampFieldKey::UpdatedAt.field_key().as_str(), "updated_at");
    assert_eq!(TimestampFieldKey::DeletedAt.field_key().as_str(), "deleted_at");
}

#[test]
fn physical_keys_are_pairwise_distinct() {
    let keys: HashSet<FieldKey> = TimestampFieldKey::ALL
        .iter()
        .map(|key| key.field_key())
        .collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn resolution_is_deterministic() {
    for key in TimestampFieldKey::ALL {
        assert_eq!(key.field_key(), key.field_key());
        assert_eq!(key.to_string(), key.field_key().to_string());
    }
}

#[test]
fn serializes_with_physical_key_spelling() {
    let json = serde_json::to_value(TimestampFieldKey::DeletedAt).unwrap();
    assert_eq!(json, "deleted_at");

    let decoded: TimestampFieldKey = serde_json::from_value(serde_json::json!("updated_at")).unwrap();
    assert_eq!(decoded, TimestampFieldKey::UpdatedAt);

    assert!(serde_json::from_value::<TimestampFieldKey>(serde_json::json!("createdAt")).is_err());
}

#[test]
fn parse_accepts_surrounding_whitespace() {
    assert_eq!(
        parse_timestamp_field_key(" created_at ").unwrap(),
        TimestampFieldKey::CreatedAt
    );
}

#[test]
fn field_definition_from_semantic_key_delegates_key() {
    let by_semantic = ColumnDef::timestamp(TimestampFieldKey::UpdatedAt);
    let by_physical = ColumnDef::from_key(FieldKey::from("updated_at"));
    assert_eq!(by_semantic, by_physical);
    assert_eq!(by_semantic.key().as_str(), "updated_at");
}
