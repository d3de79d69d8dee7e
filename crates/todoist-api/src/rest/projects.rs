use crate::client::TodoistClient;
use crate::error::Result;
use crate::models::{Collaborator, CreateProject, Project, UpdateProject};

impl TodoistClient {
    /// Lists all projects.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects").await
    }

    /// Creates a project.
    pub async fn create_project(&self, request: &CreateProject) -> Result<Project> {
        self.post("/projects", request).await
    }

    /// Gets a project by id.
    pub async fn get_project(&self, id: u64) -> Result<Option<Project>> {
        self.get_optional(&format!("/projects/{id}")).await
    }

    /// Updates a project.
    pub async fn update_project(&self, id: u64, request: &UpdateProject) -> Result<()> {
        self.post_no_content(&format!("/projects/{id}"), request).await
    }

    /// Deletes a project.
    pub async fn delete_project(&self, id: u64) -> Result<()> {
        self.delete(&format!("/projects/{id}")).await
    }

    /// Lists the collaborators of a shared project.
    pub async fn project_collaborators(&self, id: u64) -> Result<Vec<Collaborator>> {
        self.get(&format!("/projects/{id}/collaborators")).await
    }
}
