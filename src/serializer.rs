//! Task Serializer
//!
//! Encodes the task list as a JSON array for the durable store.

use crate::models::Task;

/// Encode tasks in display order
pub fn serialize(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Strict decode. Any entry missing a field fails the whole payload.
pub fn try_deserialize(raw: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Lenient decode: absent or unparseable input yields an empty list
pub fn deserialize(raw: Option<&str>) -> Vec<Task> {
    raw.and_then(|raw| try_deserialize(raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(text: &str, is_completed: bool) -> Task {
        Task {
            text: text.to_string(),
            is_completed,
        }
    }

    #[test]
    fn test_serialize_format() {
        let tasks = vec![task("Buy milk", false), task("Walk dog", true)];
        assert_eq!(
            serialize(&tasks).unwrap(),
            r#"[{"text":"Buy milk","isCompleted":false},{"text":"Walk dog","isCompleted":true}]"#
        );
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]).unwrap(), "[]");
        assert!(deserialize(Some("[]")).is_empty());
    }

    #[test]
    fn test_absent_is_empty() {
        assert!(deserialize(None).is_empty());
    }

    #[test]
    fn test_garbage_is_empty() {
        assert!(deserialize(Some("not json")).is_empty());
        assert!(deserialize(Some("")).is_empty());
        assert!(deserialize(Some(r#"{"text":"x"}"#)).is_empty());
        assert!(deserialize(Some(r#"[{"text":"a","isCompleted":"yes"}]"#)).is_empty());
    }

    #[test]
    fn test_missing_field_fails_whole_payload() {
        let raw = r#"[{"text":"ok","isCompleted":false},{"text":"broken"}]"#;
        assert!(try_deserialize(raw).is_err());
        assert!(deserialize(Some(raw)).is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = r#"[{"text":"a","isCompleted":true,"color":"red"}]"#;
        assert_eq!(deserialize(Some(raw)), vec![task("a", true)]);
    }

    #[test]
    fn test_special_characters_survive() {
        let tasks = vec![task(r#"quote " backslash \ newline"#, false), task("牛乳を買う", true)];
        assert_eq!(deserialize(Some(&serialize(&tasks).unwrap())), tasks);
    }

    proptest! {
        #[test]
        fn prop_round_trip(entries in prop::collection::vec((".*\\S.*", any::<bool>()), 0..20)) {
            let tasks: Vec<Task> = entries
                .into_iter()
                .map(|(text, is_completed)| Task { text, is_completed })
                .collect();
            prop_assert_eq!(deserialize(Some(&serialize(&tasks).unwrap())), tasks);
        }
    }
}
