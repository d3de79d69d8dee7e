use serde::Serialize;

use crate::client::TodoistClient;
use crate::error::Result;
use crate::models::{CreateSection, Section, UpdateSection};

#[derive(Serialize)]
struct SectionQuery {
    project_id: u64,
}

impl TodoistClient {
    /// Lists the sections of a project.
    pub async fn list_sections(&self, project_id: u64) -> Result<Vec<Section>> {
        self.get_with_query("/sections", &SectionQuery { project_id })
            .await
    }

    /// Creates a section.
    pub async fn create_section(&self, request: &CreateSection) -> Result<Section> {
        self.post("/sections", request).await
    }

    /// Gets a section by id.
    pub async fn get_section(&self, id: u64) -> Result<Option<Section>> {
        self.get_optional(&format!("/sections/{id}")).await
    }

    /// Renames a section.
    pub async fn update_section(&self, id: u64, request: &UpdateSection) -> Result<()> {
        self.post_no_content(&format!("/sections/{id}"), request).await
    }

    /// Deletes a section.
    pub async fn delete_section(&self, id: u64) -> Result<()> {
        self.delete(&format!("/sections/{id}")).await
    }
}
