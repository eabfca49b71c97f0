//! Lifecycle glue: create, read, update, delete and import.
//!
//! Responsibilities:
//! - Build the payload, send the single HTTP call, decompose the response
//!   and commit it to the resource data.
//! - Race every call against a [`CancellationToken`].
//! - Plan a reconcile without touching the network.
//!
//! Does NOT handle:
//! - Retries (the client retries rate-limited calls).
//! - Persisting state between runs.
//!
//! Invariants:
//! - Builder errors are returned before any request is sent.
//! - State is only replaced once the response decomposed completely.

use std::future::Future;

use notebook_client::NotebooksClient;
use notebook_client::models::{
    NotebookCreateRequest, NotebookResponse, NotebookResponseData, NotebookUpdateRequest,
};
use tracing::{debug, info, warn};

use crate::build::{build_create, build_update};
use crate::cancellation::CancellationToken;
use crate::cursor::PathCursor;
use crate::decompose::decompose_notebook;
use crate::error::{Operation, ResourceError, Result};
use crate::state::ResourceData;

/// What a reconcile would send.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// No id yet: the notebook would be created.
    Create(NotebookCreateRequest),
    /// The notebook exists; `drift` is false when the recorded state already
    /// matches the desired configuration.
    Update {
        id: i64,
        body: NotebookUpdateRequest,
        drift: bool,
    },
}

async fn send<T>(
    operation: Operation,
    cancel: &CancellationToken,
    call: impl Future<Output = notebook_client::Result<T>>,
) -> Result<T> {
    if cancel.is_cancelled() {
        return Err(ResourceError::Cancelled { operation });
    }
    tokio::select! {
        res = call => res.map_err(ResourceError::api(operation)),
        _ = cancel.cancelled() => Err(ResourceError::Cancelled { operation }),
    }
}

fn response_data(operation: Operation, response: NotebookResponse) -> Result<NotebookResponseData> {
    response
        .data
        .ok_or(ResourceError::EmptyResponse { operation })
}

fn commit(data: &mut ResourceData, notebook: &NotebookResponseData) -> Result<()> {
    let state = decompose_notebook(notebook)?;
    let mut writer = data.writer();
    writer.set_all(state)?;
    writer.commit();
    Ok(())
}

/// Create the notebook and record its id and state.
pub async fn create(
    client: &NotebooksClient,
    data: &mut ResourceData,
    cancel: &CancellationToken,
) -> Result<()> {
    let body = build_create(&mut data.cursor())?;
    info!(
        cells = body.data.attributes.cells.len(),
        "Creating notebook: {}", body.data.attributes.name
    );

    let response = send(Operation::Create, cancel, client.create_notebook(&body)).await?;
    let notebook = response_data(Operation::Create, response)?;
    data.set_id(notebook.id.to_string());
    commit(data, &notebook)
}

/// Refresh the state from the API. A notebook that no longer exists clears
/// the id and is not an error.
pub async fn read(
    client: &NotebooksClient,
    data: &mut ResourceData,
    cancel: &CancellationToken,
) -> Result<()> {
    let notebook_id = data.notebook_id(Operation::Read)?;
    debug!(notebook_id, "Reading notebook");

    let response = match send(Operation::Read, cancel, client.get_notebook(notebook_id)).await {
        Ok(response) => response,
        Err(ResourceError::Api { source, .. }) if source.is_not_found() => {
            warn!(notebook_id, "Notebook not found, removing it from state");
            data.clear_id();
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    let notebook = response_data(Operation::Read, response)?;
    commit(data, &notebook)
}

/// Send the desired configuration as an update and record the result.
pub async fn update(
    client: &NotebooksClient,
    data: &mut ResourceData,
    cancel: &CancellationToken,
) -> Result<()> {
    let notebook_id = data.notebook_id(Operation::Update)?;
    let body = build_update(&mut data.cursor())?;
    info!(
        notebook_id,
        cells = body.data.attributes.cells.len(),
        "Updating notebook: {}", body.data.attributes.name
    );

    let response = send(
        Operation::Update,
        cancel,
        client.update_notebook(notebook_id, &body),
    )
    .await?;
    let notebook = response_data(Operation::Update, response)?;
    commit(data, &notebook)
}

/// Delete the notebook. The id is kept; the caller decides when to drop it.
pub async fn delete(
    client: &NotebooksClient,
    data: &ResourceData,
    cancel: &CancellationToken,
) -> Result<()> {
    let notebook_id = data.notebook_id(Operation::Delete)?;
    info!(notebook_id, "Deleting notebook");
    send(Operation::Delete, cancel, client.delete_notebook(notebook_id)).await
}

/// Read an existing notebook by id into fresh resource data whose desired
/// configuration is the imported state.
pub async fn import(
    client: &NotebooksClient,
    id: &str,
    cancel: &CancellationToken,
) -> Result<ResourceData> {
    let fetched = ResourceData::empty().with_id(id);
    let notebook_id = fetched.notebook_id(Operation::Read)?;
    info!(notebook_id, "Importing notebook");

    let response = send(Operation::Read, cancel, client.get_notebook(notebook_id)).await?;
    let notebook = response_data(Operation::Read, response)?;
    let state = decompose_notebook(&notebook)?;

    let mut data = ResourceData::new(serde_json::Value::Object(state.clone()))?.with_id(id);
    let mut writer = data.writer();
    writer.set_all(state)?;
    writer.commit();
    Ok(data)
}

/// Plan a reconcile: a create payload when there is no id, otherwise the
/// update payload and whether it differs from the recorded state.
pub fn plan(data: &ResourceData) -> Result<Plan> {
    if data.id().is_none() {
        return build_create(&mut data.cursor()).map(Plan::Create);
    }
    let id = data.notebook_id(Operation::Update)?;
    let body = build_update(&mut data.cursor())?;
    let drift = has_drift(data, &body)?;
    Ok(Plan::Update { id, body, drift })
}

fn has_drift(data: &ResourceData, desired: &NotebookUpdateRequest) -> Result<bool> {
    if data.state().is_empty() {
        return Ok(true);
    }
    let recorded = data.state_as_config();
    let current = build_update(&mut PathCursor::new(&recorded))?;
    Ok(current != *desired)
}
