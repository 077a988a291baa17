use serde::{Deserialize, Deserializer, Serialize};

/// Compile-time animal kind. `GROUP` is the label stored with each record
/// and reported back to clients.
pub trait AnimalKind: Send + Sync + 'static {
    const GROUP: &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl AnimalKind for Cat {
    const GROUP: &'static str = "cat";
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Horse;

impl AnimalKind for Horse {
    const GROUP: &'static str = "horse";
}

/// Persisted animal (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub group: String,
}

/// Incoming payload for create and update.
///
/// All fields are optional so that missing values reach the validator
/// instead of failing deserialization. A client-supplied `group` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalInput {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AnimalInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()), description: Some(description.into()) }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Row handed to the repository: `id` is `None` for inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub group: String,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_fixed_per_kind() {
        assert_eq!(Cat::GROUP, "cat");
        assert_eq!(Horse::GROUP, "horse");
    }

    #[test]
    fn input_accepts_missing_and_null_fields() {
        let input: AnimalInput = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(input.id.is_none());
        assert!(input.name.is_none());
        assert!(input.description.is_none());
    }

    #[test]
    fn input_ignores_client_group() {
        let input: AnimalInput =
            serde_json::from_str(r#"{"name":"Tom","description":"Bob cat","group":"horse"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Tom"));
        assert_eq!(input.description.as_deref(), Some("Bob cat"));
    }

    #[test]
    fn input_id_may_be_numeric() {
        let input: AnimalInput = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(input.id.as_deref(), Some("7"));
        let input: AnimalInput = serde_json::from_str(r#"{"id": "12"}"#).unwrap();
        assert_eq!(input.id.as_deref(), Some("12"));
    }

    #[test]
    fn animal_serializes_id_as_string() {
        let a = Animal { id: "3".into(), name: "Tom".into(), description: "Bob cat".into(), group: "cat".into() };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v, serde_json::json!({"id":"3","name":"Tom","description":"Bob cat","group":"cat"}));
    }
}
