//! Notebook endpoints.

use reqwest::Client;

use crate::auth::ApiKeys;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{NotebookCreateRequest, NotebookResponse, NotebookUpdateRequest};

const NOTEBOOKS_PATH: &str = "/api/v1/notebooks";

/// Create a notebook.
pub async fn create_notebook(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    body: &NotebookCreateRequest,
    max_retries: usize,
) -> Result<NotebookResponse> {
    let url = format!("{}{}", base_url, NOTEBOOKS_PATH);

    let builder = keys.apply(client.post(&url)).json(body);
    let response = send_request_with_retry(builder, max_retries, NOTEBOOKS_PATH, "POST").await?;

    parse_notebook(response).await
}

/// Get a notebook by id.
pub async fn get_notebook(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    notebook_id: i64,
    max_retries: usize,
) -> Result<NotebookResponse> {
    let path = format!("{}/{}", NOTEBOOKS_PATH, notebook_id);
    let url = format!("{}{}", base_url, path);

    let builder = keys.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries, &path, "GET")
        .await
        .map_err(|e| not_found(e, notebook_id))?;

    parse_notebook(response).await
}

/// Replace a notebook with the given full definition.
pub async fn update_notebook(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    notebook_id: i64,
    body: &NotebookUpdateRequest,
    max_retries: usize,
) -> Result<NotebookResponse> {
    let path = format!("{}/{}", NOTEBOOKS_PATH, notebook_id);
    let url = format!("{}{}", base_url, path);

    let builder = keys.apply(client.put(&url)).json(body);
    let response = send_request_with_retry(builder, max_retries, &path, "PUT")
        .await
        .map_err(|e| not_found(e, notebook_id))?;

    parse_notebook(response).await
}

/// Delete a notebook.
pub async fn delete_notebook(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    notebook_id: i64,
    max_retries: usize,
) -> Result<()> {
    let path = format!("{}/{}", NOTEBOOKS_PATH, notebook_id);
    let url = format!("{}{}", base_url, path);

    let builder = keys.apply(client.delete(&url));
    send_request_with_retry(builder, max_retries, &path, "DELETE")
        .await
        .map_err(|e| not_found(e, notebook_id))?;

    Ok(())
}

fn not_found(err: ClientError, notebook_id: i64) -> ClientError {
    match err {
        ClientError::ApiError { status: 404, .. } => {
            ClientError::NotFound(format!("notebook {}", notebook_id))
        }
        other => other,
    }
}

async fn parse_notebook(response: reqwest::Response) -> Result<NotebookResponse> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse notebook: {}", e)))
}
