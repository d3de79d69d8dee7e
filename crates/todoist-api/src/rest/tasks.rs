use tracing::debug;

use crate::client::TodoistClient;
use crate::error::Result;
use crate::models::{CreateTask, Task, TaskQuery, UpdateTask};

impl TodoistClient {
    /// Lists active tasks matching `query`.
    ///
    /// A [`Filter`](crate::filter::Filter) in the query is compiled into
    /// the `filter` parameter.
    pub async fn list_active_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        if let Some(filter) = &query.filter {
            debug!(%filter, "listing tasks with filter");
        }
        self.get_with_query("/tasks", query).await
    }

    /// Creates a task.
    pub async fn create_task(&self, request: &CreateTask) -> Result<Task> {
        self.post("/tasks", request).await
    }

    /// Gets an active task by id.
    pub async fn get_task(&self, id: u64) -> Result<Option<Task>> {
        self.get_optional(&format!("/tasks/{id}")).await
    }

    /// Updates a task.
    pub async fn update_task(&self, id: u64, request: &UpdateTask) -> Result<()> {
        self.post_no_content(&format!("/tasks/{id}"), request).await
    }

    /// Marks a task as completed.
    pub async fn close_task(&self, id: u64) -> Result<()> {
        self.post_empty(&format!("/tasks/{id}/close")).await
    }

    /// Reopens a completed task.
    pub async fn reopen_task(&self, id: u64) -> Result<()> {
        self.post_empty(&format!("/tasks/{id}/reopen")).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, id: u64) -> Result<()> {
        self.delete(&format!("/tasks/{id}")).await
    }
}
