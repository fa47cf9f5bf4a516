//! Filters and field assignments understood by every collection.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::canonical_id;

use crate::collection::ID_FIELD;

/// Conjunction of field equalities. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    /// Filter matching every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching the document with the given id
    pub fn by_id(id: Uuid) -> Self {
        Self::all().eq_id(ID_FIELD, id)
    }

    /// Require `field` to equal `value`
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.to_string(), value.into());
        self
    }

    /// Require an identifier field to equal `id` (compared in canonical form)
    pub fn eq_id(self, field: &str, id: Uuid) -> Self {
        self.eq(field, canonical_id(&id))
    }

    /// Document id this filter pins, if any
    pub fn id(&self) -> Option<Uuid> {
        self.conditions
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check a stored document against every condition
    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Field assignments used to create a document or patch an existing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    values: Map<String, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`
    pub fn set(mut self, field: &str, value: impl Serialize) -> AppResult<Self> {
        self.values
            .insert(field.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Every field of a serializable record
    pub fn from_record(record: &impl Serialize) -> AppResult<Self> {
        match serde_json::to_value(record)? {
            Value::Object(values) => Ok(Self { values }),
            other => Err(AppError::validation(format!(
                "documents must be objects, got {}",
                other
            ))),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write the assignments into `document`, reporting whether anything changed
    pub fn apply_to(&self, document: &mut Map<String, Value>) -> bool {
        let mut changed = false;
        for (field, value) in &self.values {
            if document.get(field) != Some(value) {
                document.insert(field.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let doc = document(json!({ "name": "Daily" }));
        assert!(Filter::all().matches(&doc));
        assert!(Filter::all().is_empty());
    }

    #[test]
    fn test_filter_requires_every_condition() {
        let user = Uuid::new_v4();
        let item = Uuid::new_v4();
        let doc = document(json!({ "user": user.to_string(), "item": item.to_string() }));

        assert!(Filter::all().eq_id("user", user).eq_id("item", item).matches(&doc));
        assert!(!Filter::all().eq_id("user", user).eq_id("item", Uuid::new_v4()).matches(&doc));
        assert!(!Filter::all().eq("missing", "x").matches(&doc));
    }

    #[test]
    fn test_filter_pins_id() {
        let id = Uuid::new_v4();
        assert_eq!(Filter::by_id(id).id(), Some(id));
        assert_eq!(Filter::all().eq("name", "Daily").id(), None);
    }

    #[test]
    fn test_fields_apply_reports_changes() {
        let mut doc = document(json!({ "reaction": "Hug" }));

        let same = Fields::new().set("reaction", "Hug").unwrap();
        assert!(!same.apply_to(&mut doc));

        let other = Fields::new().set("reaction", "Smile").unwrap();
        assert!(other.apply_to(&mut doc));
        assert_eq!(doc["reaction"], json!("Smile"));
    }

    #[test]
    fn test_fields_from_record_requires_object() {
        #[derive(Serialize)]
        struct Draft {
            name: String,
        }

        let fields = Fields::from_record(&Draft { name: "Daily".into() }).unwrap();
        assert!(fields.contains("name"));

        let err = Fields::from_record(&"plain string").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
