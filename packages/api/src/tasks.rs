use reqwest::RequestBuilder;
use store::filters::TaskQuery;
use store::{Task, TaskForm};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub(crate) fn list_tasks_request(&self, query: &TaskQuery) -> RequestBuilder {
        let params = query.params();
        let builder = self.get("/api/tasks/");
        if params.is_empty() {
            builder
        } else {
            builder.query(&params)
        }
    }

    /// The current user's tasks, filtered server-side.
    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
        self.send_json(self.list_tasks_request(query)).await
    }

    pub(crate) fn create_task_request(&self, form: &TaskForm) -> RequestBuilder {
        self.post("/api/tasks/").json(form)
    }

    pub async fn create_task(&self, form: &TaskForm) -> Result<Task, ApiError> {
        self.send_json(self.create_task_request(form)).await
    }

    pub(crate) fn update_task_request(&self, id: i64, form: &TaskForm) -> RequestBuilder {
        self.put(&format!("/api/tasks/{id}/")).json(form)
    }

    pub async fn update_task(&self, id: i64, form: &TaskForm) -> Result<Task, ApiError> {
        self.send_json(self.update_task_request(id, form)).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.delete(&format!("/api/tasks/{id}/"))).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use reqwest::Method;
    use store::{Priority, TaskStatus};

    use crate::test_support::{authed_client, body_json};

    use super::*;

    #[test]
    fn test_list_without_filters_has_no_query() {
        let request = authed_client()
            .list_tasks_request(&TaskQuery::default())
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/api/tasks/");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_list_with_filters() {
        let query = TaskQuery {
            search: "essay".into(),
            priority: Some(Priority::High),
            status: Some(TaskStatus::InProgress),
        };
        let request = authed_client().list_tasks_request(&query).build().unwrap();
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("search".into(), "essay".into())));
        assert!(pairs.contains(&("priority".into(), "high".into())));
        assert!(pairs.contains(&("status".into(), "in_progress".into())));
    }

    #[test]
    fn test_update_task_request() {
        let form = TaskForm {
            title: "Lab report".into(),
            priority: Priority::Low,
            status: TaskStatus::Done,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..TaskForm::default()
        };
        let request = authed_client().update_task_request(12, &form).build().unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/tasks/12/");
        let body = body_json(&request);
        assert_eq!(body["title"], "Lab report");
        assert_eq!(body["status"], "done");
        assert_eq!(body["due_date"], "2025-06-01");
    }

    #[test]
    fn test_create_task_posts_to_collection() {
        let request = authed_client()
            .create_task_request(&TaskForm::default())
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/tasks/");
    }
}
