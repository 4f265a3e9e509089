use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Canvas course user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CanvasUser {
    /// User ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Short name.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Sortable name (`Last, First`).
    #[serde(default)]
    pub sortable_name: Option<String>,
    /// Email, only visible with enough rights.
    #[serde(default)]
    pub email: Option<String>,
    /// Creation date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl CanvasUser {
    /// Every non-blank name this user may be known by.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.short_name.as_deref())
            .chain(self.sortable_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_course_user() {
        let user: CanvasUser = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Carol C",
                "created_at": "2024-08-26T10:15:00-04:00",
                "sortable_name": "C, Carol",
                "short_name": "Carol",
                "email": "carol@example.com"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(
            user.names().collect::<Vec<_>>(),
            vec!["Carol C", "Carol", "C, Carol"]
        );
        assert_eq!(user.email.as_deref(), Some("carol@example.com"));
        assert_eq!(user.created_at.unwrap().year(), 2024);
    }

    #[test]
    fn deserialize_minimal_user() {
        let user: CanvasUser = serde_json::from_str(r#"{"id": 1, "name": "Dan D"}"#).unwrap();

        assert_eq!(
            user,
            CanvasUser {
                id: 1,
                name: "Dan D".into(),
                ..Default::default()
            }
        );
        assert_eq!(user.names().collect::<Vec<_>>(), vec!["Dan D"]);
    }

    #[test]
    fn names_skip_missing_and_blank_fields() {
        let user: CanvasUser = serde_json::from_str(
            r#"{"id": 7, "name": "Dan D", "short_name": "", "sortable_name": "D, Dan"}"#,
        )
        .unwrap();

        assert_eq!(user.short_name.as_deref(), Some(""));
        assert_eq!(user.names().collect::<Vec<_>>(), vec!["Dan D", "D, Dan"]);
    }
}
