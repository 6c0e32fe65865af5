//! # Domain models mirrored from the TaskHive REST API
//!
//! Every type here is a plain DTO: it is deserialised from a backend response or
//! serialised into a request body, and carries no invariants of its own. Unknown
//! fields are ignored, and fields the backend sometimes omits fall back to a
//! default so a schema drift on the server degrades instead of failing a page.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`SessionUser`] | The logged-in account, as returned by login or `/api/accounts/me/`. |
//! | [`Profile`] | Public profile with follower/following counts. |
//! | [`FollowUser`] | A row in a followers/following list. |
//! | [`Task`] / [`TaskForm`] | A task and its create/update payload. |
//! | [`Note`] / [`NoteForm`] | A note (tags by name) and its create/update payload. |
//! | [`Tag`], [`Comment`], [`Like`] | Small records attached to notes. |
//! | [`LoginRequest`] / [`LoginResponse`] / [`SignupRequest`] | Account endpoint payloads. |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account information kept in the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl SessionUser {
    /// A user known only by the name typed into the login form.
    pub fn from_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}

/// Public profile of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    /// Whether the viewer follows this profile. Not every backend build sends it.
    #[serde(default)]
    pub is_following: bool,
}

/// Entry in a followers or following list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub followed_back: bool,
}

/// Task priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Task workflow status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A task owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_public: bool,
    /// Server-computed flag. The task list computes its own badge from `due_date`.
    #[serde(default)]
    pub is_overdue: bool,
}

/// Create/update payload for a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub is_public: bool,
}

impl From<&Task> for TaskForm {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            due_date: task.due_date,
            is_public: task.is_public,
        }
    }
}

/// A study note. Tags are referenced by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub owner: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
}

/// Create/update payload for a note.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub tags: Vec<String>,
}

impl From<&Note> for NoteForm {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            is_public: note.is_public,
            tags: note.tags.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A comment on a note; `commenter` is a username.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub note: Option<i64>,
    pub commenter: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A like on a note; `user` is a username.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub user: String,
    #[serde(default)]
    pub note: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response. Token-auth backends answer with `key`, the custom view with `token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "key")]
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Revise algebra",
            "description": null,
            "status": "in_progress",
            "priority": "high",
            "created_at": "2025-05-01T09:30:00.123456Z",
            "updated_at": "2025-05-02T10:00:00Z",
            "due_date": "2025-05-10",
            "is_public": false,
            "is_overdue": false
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 5, 10));
    }

    #[test]
    fn test_task_without_due_date() {
        let json = r#"{
            "id": 1, "title": "t", "description": "d", "status": "todo",
            "priority": "low", "created_at": "2025-05-01T09:30:00Z",
            "updated_at": "2025-05-01T09:30:00Z", "due_date": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.due_date.is_none());
        assert!(!task.is_public);
    }

    #[test]
    fn test_task_form_serializes_wire_values() {
        let form = TaskForm {
            title: "Read chapter 3".into(),
            status: TaskStatus::InProgress,
            ..TaskForm::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["status"], "in_progress");
        assert!(value["due_date"].is_null());
    }

    #[test]
    fn test_note_defaults_like_count() {
        let json = r#"{
            "id": 3, "owner": "amina", "title": "Cells", "content": "Mitochondria",
            "tags": ["biology"], "is_public": true,
            "created_at": "2025-05-01T09:30:00Z", "updated_at": "2025-05-01T09:30:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.like_count, 0);
        assert_eq!(note.tags, vec!["biology".to_string()]);
    }

    #[test]
    fn test_login_response_accepts_key_alias() {
        let response: LoginResponse = serde_json::from_str(r#"{"key": "abc123"}"#).unwrap();
        assert_eq!(response.token, "abc123");
        assert!(response.user.is_none());

        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "t", "user": {"username": "sam"}}"#).unwrap();
        assert_eq!(response.user.unwrap().username, "sam");
    }

    #[test]
    fn test_profile_null_bio_and_missing_follow_flag() {
        let json = r#"{
            "id": 2, "username": "leo", "bio": null, "image": "image/upload/v1/leo.png",
            "created_at": "2025-05-01T09:30:00Z", "updated_at": "2025-05-01T09:30:00Z",
            "followers_count": 4, "following_count": 1
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.bio, "");
        assert!(!profile.is_following);
        assert_eq!(profile.followers_count, 4);
    }

    #[test]
    fn test_priority_and_status_parse() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse(""), None);
        assert_eq!(TaskStatus::parse("in_progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("blocked"), None);
    }
}
