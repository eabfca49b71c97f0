//! Build, echo, decompose and re-plan: a written notebook must plan no changes.

mod common;

use common::*;
use notebook_client::models::{
    FormulaAndFunctionQueryDefinition, NotebookCellAttributes, NotebookGlobalTime,
};
use notebook_resource::{
    Plan, PathCursor, ResourceData, ResourceError, build_create, decompose_notebook, plan,
};
use serde_json::{Value, json};

/// Create `config`, read the echoed response back and plan again.
fn round_trip(config: Value) -> (Plan, serde_json::Map<String, Value>) {
    let body = build_create(&mut PathCursor::new(&config)).unwrap();
    let response = echo_response(&body, 4242);
    let state = decompose_notebook(response.data.as_ref().unwrap()).unwrap();

    let data = ResourceData::new(config)
        .unwrap()
        .with_id("4242")
        .with_prior_state(state.clone());
    (plan(&data).unwrap(), state)
}

fn assert_no_drift(config: Value) -> serde_json::Map<String, Value> {
    let (plan, state) = round_trip(config);
    let Plan::Update { id, drift, .. } = plan else {
        panic!("expected an update plan");
    };
    assert_eq!(id, 4242);
    assert!(!drift, "unexpected drift, recorded state: {state:#?}");
    state
}

#[test]
fn test_markdown_only_with_absolute_time() {
    let config = notebook(
        absolute_time("2024-01-01T00:00:00.000000+0000", "2024-01-02T00:00:00.000000+0000"),
        vec![markdown_cell("# hi")],
    );

    let body = build_create(&mut PathCursor::new(&config)).unwrap();
    let attributes = &body.data.attributes;
    assert_eq!(attributes.cells.len(), 1);
    let NotebookCellAttributes::Markdown(markdown) = &attributes.cells[0].attributes else {
        panic!("expected a markdown cell");
    };
    assert_eq!(markdown.definition.text, "# hi");
    let NotebookGlobalTime::Absolute(time) = &attributes.time else {
        panic!("expected absolute time");
    };
    assert_eq!(time.start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert_eq!(time.end.to_rfc3339(), "2024-01-02T00:00:00+00:00");

    let state = assert_no_drift(config);
    assert_eq!(
        state["time"],
        json!([{"notebook_absolute_time": [{
            "start": "2024-01-01T00:00:00.000000+0000",
            "end": "2024-01-02T00:00:00.000000+0000"
        }]}])
    );
}

#[test]
fn test_nanosecond_absolute_time_settles_at_microseconds() {
    let config = notebook(
        absolute_time("2024-01-01T00:00:00.123456789+00:00", "2024-01-02T00:00:00+00:00"),
        vec![markdown_cell("# hi")],
    );

    let body = build_create(&mut PathCursor::new(&config)).unwrap();
    let NotebookGlobalTime::Absolute(time) = &body.data.attributes.time else {
        panic!("expected absolute time");
    };
    assert_eq!(time.start.timestamp_subsec_nanos(), 123_456_000);

    let state = assert_no_drift(config);
    assert_eq!(
        state["time"][0]["notebook_absolute_time"][0]["start"],
        "2024-01-01T00:00:00.123456+0000"
    );
}

#[test]
fn test_timeseries_apm_query() {
    let config = notebook(relative_time("1h"), vec![apm_timeseries_cell()]);
    let state = assert_no_drift(config);

    let apm = &state["cell"][0]["attributes"][0]["notebook_timeseries_cell_attributes"][0]
        ["definition"][0]["request"][0]["apm_query"][0];
    assert_eq!(apm["compute"], json!([{"aggregation": "count"}]));
    assert_eq!(
        apm["group_by"],
        json!([{"facet": "service", "sort": [{"aggregation": "avg", "order": "desc"}]}])
    );
}

#[test]
fn test_formula_and_function_request() {
    let config = notebook(relative_time("1h"), vec![formula_timeseries_cell()]);

    let body = build_create(&mut PathCursor::new(&config)).unwrap();
    let NotebookCellAttributes::Timeseries(cell) = &body.data.attributes.cells[0].attributes else {
        panic!("expected a timeseries cell");
    };
    let request = &cell.definition.requests[0];
    let queries = request.formula_and_function.queries.as_ref().unwrap();
    assert!(matches!(
        &queries[0],
        FormulaAndFunctionQueryDefinition::Metric(query) if query.name == "q1"
    ));

    assert_no_drift(config);
}

#[test]
fn test_toplist_conditional_format() {
    let config = notebook(relative_time("1d"), vec![conditional_toplist_cell()]);
    let state = assert_no_drift(config);

    let format = &state["cell"][0]["attributes"][0]["notebook_toplist_cell_attributes"][0]
        ["definition"][0]["request"][0]["conditional_format"][0];
    assert_eq!(
        *format,
        json!({"comparator": ">", "value": 0.9, "palette": "red_on_white"})
    );
}

#[test]
fn test_mixed_notebook_keeps_cell_order() {
    let config = notebook(
        relative_time("1w"),
        vec![
            markdown_cell("# Overview"),
            apm_timeseries_cell(),
            conditional_toplist_cell(),
            formula_timeseries_cell(),
            markdown_cell("## Notes"),
        ],
    );
    let state = assert_no_drift(config);

    let ids: Vec<&str> = state["cell"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cell| cell["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["cell0000", "cell0001", "cell0002", "cell0003", "cell0004"]);
    assert_eq!(
        state["cell"][4]["attributes"][0]["notebook_markdown_cell_attributes"][0]["definition"][0]
            ["text"],
        json!("## Notes")
    );
}

#[test]
fn test_changed_config_drifts() {
    let config = notebook(relative_time("1h"), vec![markdown_cell("# hi")]);
    let (_, state) = round_trip(config);

    let changed = notebook(relative_time("4h"), vec![markdown_cell("# hi")]);
    let data = ResourceData::new(changed)
        .unwrap()
        .with_id("4242")
        .with_prior_state(state);
    let Plan::Update { drift, .. } = plan(&data).unwrap() else {
        panic!("expected an update plan");
    };
    assert!(drift);
}

#[test]
fn test_imported_fixture_plans_without_drift() {
    let response: notebook_client::models::NotebookResponse =
        serde_json::from_value(load_fixture("notebooks/get_notebook.json")).unwrap();
    let state = decompose_notebook(response.data.as_ref().unwrap()).unwrap();

    assert_eq!(
        state["metadata"],
        json!([{"is_template": false, "take_snapshots": true, "type": "investigation"}])
    );
    assert_eq!(state["author"][0]["handle"], json!("jane.doe@example.com"));
    assert_eq!(state["created"], json!("2021-02-24T23:14:15.173964+0000"));

    let data = ResourceData::new(Value::Object(state.clone()))
        .unwrap()
        .with_id("126879")
        .with_prior_state(state);
    let Plan::Update { drift, body, .. } = plan(&data).unwrap() else {
        panic!("expected an update plan");
    };
    assert!(!drift);
    assert_eq!(body.data.attributes.cells.len(), 3);
}

#[test]
fn test_two_cell_time_variants_fail_to_build() {
    let mut cell = apm_timeseries_cell();
    cell["attributes"][0]["notebook_timeseries_cell_attributes"][0]["time"] = json!([{
        "notebook_relative_time": [{"live_span": "1h"}],
        "notebook_absolute_time": [{
            "start": "2024-01-01T00:00:00.000000+0000",
            "end": "2024-01-02T00:00:00.000000+0000"
        }]
    }]);
    let config = notebook(relative_time("1h"), vec![cell]);

    let mut cursor = PathCursor::new(&config);
    let err = build_create(&mut cursor).unwrap_err();
    assert!(matches!(
        err,
        ResourceError::MultipleDefinitions { ref one_of, .. } if one_of == "notebook_cell_time"
    ));
    assert!(err.is_validation());
    assert_eq!(cursor.depth(), 0);
}

#[test]
fn test_cell_time_without_variant_fails_to_build() {
    let mut cell = apm_timeseries_cell();
    cell["attributes"][0]["notebook_timeseries_cell_attributes"][0]["time"] = json!([{}]);
    let config = notebook(relative_time("1h"), vec![cell]);

    let err = build_create(&mut PathCursor::new(&config)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to find valid definition in `notebook_cell_time` configuration"
    );
}
