//! Client-side filtering of lists the pages have already fetched.
//!
//! Task filters go to the server as query parameters ([`TaskQuery`]); note, feed
//! and tag filters run locally over the fetched list.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Note, Priority, Tag, TaskStatus};

/// Filters for the task list, sent as query parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskQuery {
    pub search: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl TaskQuery {
    /// Query pairs with empty filters omitted.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Notes whose title contains `search` (case-insensitive) and, when given,
/// carry `tag`.
pub fn filter_notes<'a>(notes: &'a [Note], search: &str, tag: Option<&str>) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| contains_ci(&note.title, search))
        .filter(|note| tag.map_or(true, |t| note.tags.iter().any(|n| n == t)))
        .collect()
}

/// Feed notes whose title or content contains `term` (case-insensitive).
pub fn search_feed<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| contains_ci(&note.title, term) || contains_ci(&note.content, term))
        .collect()
}

pub fn filter_tags<'a>(tags: &'a [Tag], term: &str) -> Vec<&'a Tag> {
    tags.iter().filter(|tag| contains_ci(&tag.name, term)).collect()
}

/// Whether any note references the tag. Deleting such a tag is refused
/// client-side before the request is sent.
pub fn tag_in_use(notes: &[Note], name: &str) -> bool {
    notes.iter().any(|note| note.tags.iter().any(|t| t == name))
}

/// Rewrite a renamed tag on every note that carries it, so the in-use check
/// and the tag filter keep matching without a re-fetch.
pub fn rename_tag_in_notes(notes: &mut [Note], old: &str, new: &str) {
    for name in notes.iter_mut().flat_map(|note| note.tags.iter_mut()) {
        if name == old {
            *name = new.to_string();
        }
    }
}

/// Selected tag names that do not exist yet, in selection order.
pub fn tags_to_create(selected: &[String], existing: &[Tag]) -> Vec<String> {
    selected
        .iter()
        .filter(|name| !existing.iter().any(|tag| &tag.name == *name))
        .cloned()
        .collect()
}

/// First `max` characters of `text`, with `...` appended when it was cut.
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// A task is overdue once the start (UTC midnight) of its due date has passed.
pub fn is_overdue(due: Option<NaiveDate>, now: DateTime<Utc>) -> bool {
    due.and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or(false, |start| start.and_utc() < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(id: i64, title: &str, content: &str, tags: &[&str]) -> Note {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();
        Note {
            id,
            owner: "amina".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_public: true,
            created_at: at,
            updated_at: at,
            like_count: 0,
        }
    }

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_task_query_omits_empty_filters() {
        assert!(TaskQuery::default().params().is_empty());

        let query = TaskQuery {
            search: " essay ".to_string(),
            priority: Some(Priority::High),
            status: Some(TaskStatus::InProgress),
        };
        assert_eq!(
            query.params(),
            vec![
                ("search", "essay".to_string()),
                ("priority", "high".to_string()),
                ("status", "in_progress".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_notes_by_title_and_tag() {
        let notes = vec![
            note(1, "Photosynthesis", "", &["biology"]),
            note(2, "Photons", "", &["physics"]),
            note(3, "Essay plan", "", &[]),
        ];

        let ids: Vec<i64> = filter_notes(&notes, "PHOTO", None).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let ids: Vec<i64> = filter_notes(&notes, "photo", Some("physics"))
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![2]);

        assert_eq!(filter_notes(&notes, "", None).len(), 3);
    }

    #[test]
    fn test_search_feed_matches_content() {
        let notes = vec![
            note(1, "Week 1", "Cell membranes", &[]),
            note(2, "Membrane transport", "", &[]),
            note(3, "Week 2", "Enzymes", &[]),
        ];
        let ids: Vec<i64> = search_feed(&notes, "membrane").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_tag_in_use() {
        let notes = vec![note(1, "a", "", &["maths"])];
        assert!(tag_in_use(&notes, "maths"));
        assert!(!tag_in_use(&notes, "math"));
        assert!(!tag_in_use(&[], "maths"));
    }

    #[test]
    fn test_renamed_tag_stays_in_use() {
        let mut notes = vec![
            note(1, "Limits", "", &["maths", "exam"]),
            note(2, "Essay plan", "", &["english"]),
        ];
        rename_tag_in_notes(&mut notes, "maths", "math");

        assert!(tag_in_use(&notes, "math"));
        assert!(!tag_in_use(&notes, "maths"));
        assert_eq!(notes[0].tags, vec!["math", "exam"]);
        assert_eq!(notes[1].tags, vec!["english"]);
    }

    #[test]
    fn test_tags_to_create_keeps_only_new_names() {
        let existing = vec![tag(1, "maths"), tag(2, "exam")];
        let selected = vec!["exam".to_string(), "revision".to_string(), "week-3".to_string()];
        assert_eq!(
            tags_to_create(&selected, &existing),
            vec!["revision".to_string(), "week-3".to_string()]
        );
    }

    #[test]
    fn test_filter_tags() {
        let tags = vec![tag(1, "Maths"), tag(2, "History")];
        assert_eq!(filter_tags(&tags, "math").len(), 1);
        assert_eq!(filter_tags(&tags, "").len(), 2);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("exactly-10", 10), "exactly-10");
        assert_eq!(preview("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(preview("ééééé", 2), "éé...");
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 5, 10, 8, 0, 0).unwrap();
        assert!(is_overdue(NaiveDate::from_ymd_opt(2025, 5, 9), now));
        // Due today counts once the day has started.
        assert!(is_overdue(NaiveDate::from_ymd_opt(2025, 5, 10), now));
        assert!(!is_overdue(NaiveDate::from_ymd_opt(2025, 5, 11), now));
        assert!(!is_overdue(None, now));
    }
}
