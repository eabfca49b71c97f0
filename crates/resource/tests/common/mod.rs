//! Common helpers for resource integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#![allow(dead_code)]

#[allow(unused_imports)]
pub use notebook_client::testing::load_fixture;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use notebook_client::NotebooksClient;
use notebook_client::models::{NotebookCreateRequest, NotebookResponse};
use secrecy::SecretString;
use serde_json::{Value, json};

/// Client pointed at a mock server.
pub fn test_client(server: &MockServer, max_retries: usize) -> NotebooksClient {
    NotebooksClient::builder()
        .api_url(server.uri())
        .api_key(SecretString::new("test-api-key".to_string().into()))
        .app_key(SecretString::new("test-app-key".to_string().into()))
        .max_retries(max_retries)
        .build()
        .unwrap()
}

/// What the API answers to a create: the payload with an id on the
/// notebook and on every cell.
pub fn echo_response(body: &NotebookCreateRequest, id: i64) -> NotebookResponse {
    let mut data = serde_json::to_value(&body.data).unwrap();
    data["id"] = json!(id);
    if let Some(cells) = data["attributes"]["cells"].as_array_mut() {
        for (index, cell) in cells.iter_mut().enumerate() {
            cell["id"] = json!(format!("cell{index:04}"));
        }
    }
    serde_json::from_value(json!({ "data": data })).unwrap()
}

pub fn relative_time(live_span: &str) -> Value {
    json!([{"notebook_relative_time": [{"live_span": live_span}]}])
}

pub fn absolute_time(start: &str, end: &str) -> Value {
    json!([{"notebook_absolute_time": [{"start": start, "end": end}]}])
}

pub fn markdown_cell(text: &str) -> Value {
    json!({
        "type": "notebook_cells",
        "attributes": [{"notebook_markdown_cell_attributes": [{
            "definition": [{"text": text, "type": "markdown"}]
        }]}]
    })
}

/// A graph cell of `kind` (e.g. `timeseries`) around `definition`.
pub fn graph_cell(kind: &str, definition: Value) -> Value {
    json!({
        "attributes": [{format!("notebook_{kind}_cell_attributes"): [{
            "definition": [definition],
            "graph_size": "m"
        }]}]
    })
}

pub fn notebook(time: Value, cells: Vec<Value>) -> Value {
    json!({
        "name": "Service latency review",
        "time": time,
        "cell": cells
    })
}

/// Timeseries cell with one APM request grouped by service.
pub fn apm_timeseries_cell() -> Value {
    graph_cell(
        "timeseries",
        json!({
            "request": [{
                "apm_query": [{
                    "index": "trace-search",
                    "compute": [{"aggregation": "count"}],
                    "group_by": [{
                        "facet": "service",
                        "sort": [{"aggregation": "avg", "order": "desc"}]
                    }]
                }]
            }]
        }),
    )
}

/// Timeseries cell with one metric query and one formula.
pub fn formula_timeseries_cell() -> Value {
    graph_cell(
        "timeseries",
        json!({
            "request": [{
                "query": [{"formula_and_function_metric_query_definition": [{
                    "data_source": "metrics",
                    "name": "q1",
                    "query": "avg:system.cpu.user{*}"
                }]}],
                "formula": [{"formula": "q1*100", "alias": "cpu_pct"}],
                "response_format": "timeseries"
            }]
        }),
    )
}

/// Toplist cell with one conditional format.
pub fn conditional_toplist_cell() -> Value {
    graph_cell(
        "toplist",
        json!({
            "request": [{
                "q": "top(avg:system.load.1{*} by {host}, 10, 'mean', 'desc')",
                "conditional_format": [{"comparator": ">", "value": 0.9, "palette": "red_on_white"}]
            }]
        }),
    )
}
