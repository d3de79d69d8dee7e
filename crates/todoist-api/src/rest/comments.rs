use crate::client::TodoistClient;
use crate::error::Result;
use crate::models::{Comment, CommentQuery, CreateComment, UpdateComment};

impl TodoistClient {
    /// Lists the comments of a project or a task.
    pub async fn list_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        self.get_with_query("/comments", query).await
    }

    /// Posts a comment.
    pub async fn create_comment(&self, request: &CreateComment) -> Result<Comment> {
        self.post("/comments", request).await
    }

    /// Gets a comment by id.
    ///
    /// # Errors
    ///
    /// A missing comment is an `ApiError::NotFound` error.
    pub async fn get_comment(&self, id: u64) -> Result<Comment> {
        self.get(&format!("/comments/{id}")).await
    }

    /// Edits a comment.
    pub async fn update_comment(&self, id: u64, request: &UpdateComment) -> Result<()> {
        self.post_no_content(&format!("/comments/{id}"), request).await
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, id: u64) -> Result<()> {
        self.delete(&format!("/comments/{id}")).await
    }
}
