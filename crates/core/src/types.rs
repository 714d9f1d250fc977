use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A task tracked by the backend.
///
/// Category identifiers are stored as given; the referenced categories are
/// not required to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    pub status: TodoStatus,
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtasks: Vec<Subtask>,
}

#[cfg(test)]
impl Todo {
    /// Creates a pending todo with no description, categories, or subtasks.
    pub fn new(id: impl Into<String>, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TodoStatus::Pending,
            priority,
            category_ids: Vec::new(),
            due_date: None,
            created_at: Utc::now(),
            subtasks: Vec::new(),
        }
    }
}

/// Checklist item owned by a [`Todo`]. Identifiers are unique within the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// Label that todos reference by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Freeform presentation hint, e.g. a hex code or CSS class list.
    #[serde(default)]
    pub color: String,
}

/// Lifecycle state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the wire representation of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a JSON array, treating `null` like an empty one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    #[test]
    fn decodes_minimal_payload_with_defaults() {
        let todo: Todo = serde_json::from_value(json!({
            "id": "1",
            "title": "Buy milk",
            "status": "PENDING",
            "priority": "LOW",
            "categoryIds": [],
            "subtasks": []
        }))
        .expect("payload decodes");

        assert_eq!(todo.id, "1");
        assert_eq!(todo.status, TodoStatus::Pending);
        assert_eq!(todo.priority, Priority::Low);
        assert!(todo.description.is_none());
        assert!(todo.due_date.is_none());
    }

    #[test]
    fn id_may_be_omitted() {
        let todo: Todo = serde_json::from_value(json!({
            "title": "Buy milk and eggs",
            "status": "COMPLETED",
            "priority": "HIGH"
        }))
        .expect("payload decodes");

        assert!(todo.id.is_empty());
        assert!(todo.category_ids.is_empty());
        assert!(todo.subtasks.is_empty());
    }

    #[test]
    fn null_sequences_decode_as_empty() {
        let todo: Todo = serde_json::from_value(json!({
            "id": "1",
            "title": "t",
            "status": "PENDING",
            "priority": "LOW",
            "categoryIds": null,
            "subtasks": null
        }))
        .expect("null sequences decode");

        assert!(todo.category_ids.is_empty());
        assert!(todo.subtasks.is_empty());

        let value = serde_json::to_value(&todo).expect("serializes");
        assert_eq!(value["categoryIds"], json!([]));
        assert_eq!(value["subtasks"], json!([]));
    }

    #[test]
    fn subtask_fields_default_when_missing() {
        let todo: Todo = serde_json::from_value(json!({
            "title": "t",
            "status": "PENDING",
            "priority": "LOW",
            "subtasks": [{ "title": "s" }, {}]
        }))
        .expect("partial subtasks decode");

        assert_eq!(
            todo.subtasks,
            vec![
                Subtask {
                    id: String::new(),
                    title: "s".to_string(),
                    is_completed: false,
                },
                Subtask {
                    id: String::new(),
                    title: String::new(),
                    is_completed: false,
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let result: Result<Todo, _> = serde_json::from_value(json!({
            "title": "x",
            "status": "ARCHIVED",
            "priority": "LOW"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn accepts_in_progress_status() {
        let todo: Todo = serde_json::from_value(json!({
            "title": "x",
            "status": "IN_PROGRESS",
            "priority": "MEDIUM"
        }))
        .expect("payload decodes");
        assert_eq!(todo.status, TodoStatus::InProgress);
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let mut todo = Todo::new("1", "Buy milk", Priority::Low);
        todo.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        todo.description = Some(String::new());
        todo.category_ids = vec!["c-1".to_string()];
        todo.subtasks = vec![Subtask {
            id: "s-1".to_string(),
            title: "Find wallet".to_string(),
            is_completed: true,
        }];

        let value = serde_json::to_value(&todo).expect("serializes");
        let object = value.as_object().expect("object");

        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("dueDate"));
        assert_eq!(value["categoryIds"], json!(["c-1"]));
        assert_eq!(value["createdAt"], Value::from("2024-05-01T12:00:00Z"));
        assert_eq!(value["subtasks"][0]["isCompleted"], Value::Bool(true));
        assert_eq!(value["status"], Value::from("PENDING"));
    }

    #[test]
    fn keeps_non_empty_description_and_due_date() {
        let mut todo = Todo::new("1", "Buy milk", Priority::High);
        todo.description = Some("two litres".to_string());
        todo.due_date = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let value = serde_json::to_value(&todo).expect("serializes");
        assert_eq!(value["description"], Value::from("two litres"));
        assert_eq!(value["dueDate"], Value::from("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn category_color_is_opaque() {
        let category: Category = serde_json::from_value(json!({
            "id": "c-1",
            "name": "Work",
            "color": "bg-gray-100 text-gray-800"
        }))
        .expect("decodes");
        assert_eq!(category.color, "bg-gray-100 text-gray-800");
    }
}
