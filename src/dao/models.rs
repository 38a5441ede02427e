use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr,
        schema::{AdditionalProperties, ObjectBuilder, Schema, Type},
    },
};

/// Key holding the unique identifier of a player record.
pub const ID_FIELD: &str = "id";

/// Persisted player entity.
///
/// Apart from the string `id` every field is opaque client data kept in the
/// order it was first written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord(IndexMap<String, Value>);

impl PlayerRecord {
    /// Build a record from the provided fields, forcing `id` to the given value.
    pub fn with_id(fields: IndexMap<String, Value>, id: &str) -> Self {
        let mut record = Self(fields);
        record.force_id(id);
        record
    }

    /// Identifier of the record, when it carries a string `id`.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Whether this record is the one stored under `id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Shallow-merge `patch` into the record: incoming fields win, untouched
    /// fields are kept in place, and `id` is pinned to `id`.
    pub fn merge(&mut self, patch: IndexMap<String, Value>, id: &str) {
        self.0.extend(patch);
        self.force_id(id);
    }

    /// Borrow the raw fields.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.0
    }

    fn force_id(&mut self, id: &str) {
        self.0
            .insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }
}

impl From<IndexMap<String, Value>> for PlayerRecord {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }
}

impl PartialSchema for PlayerRecord {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::Object)
            .description(Some(
                "Player record: a unique string `id` plus arbitrary passthrough fields.",
            ))
            .property(ID_FIELD, ObjectBuilder::new().schema_type(Type::String))
            .required(ID_FIELD)
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .into()
    }
}

impl ToSchema for PlayerRecord {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("PlayerRecord")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> IndexMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn merge_keeps_untouched_fields_and_their_order() {
        let mut record = PlayerRecord::from(fields(json!({
            "id": "p1",
            "name": "Ana",
            "club": "Benfica",
        })));

        record.merge(fields(json!({ "club": "Porto", "goals": 3 })), "p1");

        let keys: Vec<_> = record.fields().keys().cloned().collect();
        assert_eq!(keys, ["id", "name", "club", "goals"]);
        assert_eq!(record.fields()["name"], json!("Ana"));
        assert_eq!(record.fields()["club"], json!("Porto"));
    }

    #[test]
    fn merge_pins_id_to_the_requested_value() {
        let mut record = PlayerRecord::from(fields(json!({ "id": "p1" })));
        record.merge(fields(json!({ "id": "other" })), "p1");
        assert_eq!(record.id(), Some("p1"));
    }

    #[test]
    fn with_id_appends_missing_id_and_overrides_existing_one() {
        let created = PlayerRecord::with_id(fields(json!({ "club": "FC" })), "x");
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({ "club": "FC", "id": "x" })
        );

        let overridden = PlayerRecord::with_id(fields(json!({ "id": 7, "club": "FC" })), "x");
        assert_eq!(overridden.fields().keys().next().map(String::as_str), Some("id"));
        assert_eq!(overridden.id(), Some("x"));
    }

    #[test]
    fn non_string_id_is_not_an_identifier() {
        let record = PlayerRecord::from(fields(json!({ "id": 42 })));
        assert_eq!(record.id(), None);
        assert!(!record.has_id("42"));
    }
}
