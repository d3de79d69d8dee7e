use crate::client::TodoistClient;
use crate::error::Result;
use crate::models::{CreateLabel, Label, UpdateLabel};

impl TodoistClient {
    /// Lists all personal labels.
    pub async fn list_labels(&self) -> Result<Vec<Label>> {
        self.get("/labels").await
    }

    /// Creates a label.
    pub async fn create_label(&self, request: &CreateLabel) -> Result<Label> {
        self.post("/labels", request).await
    }

    /// Gets a label by id.
    pub async fn get_label(&self, id: u64) -> Result<Option<Label>> {
        self.get_optional(&format!("/labels/{id}")).await
    }

    /// Updates a label.
    pub async fn update_label(&self, id: u64, request: &UpdateLabel) -> Result<()> {
        self.post_no_content(&format!("/labels/{id}"), request).await
    }

    /// Deletes a label.
    pub async fn delete_label(&self, id: u64) -> Result<()> {
        self.delete(&format!("/labels/{id}")).await
    }
}
