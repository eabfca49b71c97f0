//! Notebook API methods for [`NotebooksClient`].
//!
//! # What this module does NOT handle:
//! - Low-level notebook endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::NotebooksClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{NotebookCreateRequest, NotebookResponse, NotebookUpdateRequest};

impl NotebooksClient {
    /// Create a notebook.
    pub async fn create_notebook(&self, body: &NotebookCreateRequest) -> Result<NotebookResponse> {
        endpoints::create_notebook(&self.http, &self.base_url, &self.keys, body, self.max_retries)
            .await
    }

    /// Get a notebook by id.
    pub async fn get_notebook(&self, notebook_id: i64) -> Result<NotebookResponse> {
        endpoints::get_notebook(
            &self.http,
            &self.base_url,
            &self.keys,
            notebook_id,
            self.max_retries,
        )
        .await
    }

    /// Replace a notebook.
    pub async fn update_notebook(
        &self,
        notebook_id: i64,
        body: &NotebookUpdateRequest,
    ) -> Result<NotebookResponse> {
        endpoints::update_notebook(
            &self.http,
            &self.base_url,
            &self.keys,
            notebook_id,
            body,
            self.max_retries,
        )
        .await
    }

    /// Delete a notebook.
    pub async fn delete_notebook(&self, notebook_id: i64) -> Result<()> {
        endpoints::delete_notebook(
            &self.http,
            &self.base_url,
            &self.keys,
            notebook_id,
            self.max_retries,
        )
        .await
    }
}
