//! Property-based tests for the builder walk and round trips.
//!
//! This module uses proptest to verify:
//! - Every build leaves the cursor balanced, whether it succeeds or fails
//! - Cells, requests, markers, conditional formats and split-by entries keep
//!   their order through build, response and decompose
//! - A written notebook plans without drift

mod common;

use common::*;
use notebook_resource::{Plan, PathCursor, ResourceData, build_create, decompose_notebook, plan};
use proptest::prelude::*;
use serde_json::{Value, json};

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #*_-]{1,24}"
}

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}:[a-z0-9]{1,8}"
}

/// One legacy or formula request of a timeseries widget.
fn timeseries_request_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        text_strategy().prop_map(|q| json!({"q": format!("avg:{q}")})),
        (text_strategy(), prop::option::of(1i64..100)).prop_map(|(facet, limit)| {
            let mut group_by = json!({"facet": facet});
            if let Some(limit) = limit {
                group_by["limit"] = json!(limit);
            }
            json!({"log_query": [{
                "index": "main",
                "compute": [{"aggregation": "count"}],
                "group_by": [group_by]
            }]})
        }),
        prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|names| {
            let mut unique: Vec<String> = Vec::new();
            for name in names {
                if !unique.contains(&name) {
                    unique.push(name);
                }
            }
            let queries: Vec<Value> = unique
                .iter()
                .map(|name| {
                    json!({"formula_and_function_metric_query_definition": [{
                        "data_source": "metrics",
                        "name": name,
                        "query": "avg:system.cpu.user{*}"
                    }]})
                })
                .collect();
            let formulas: Vec<Value> = unique.iter().map(|name| json!({"formula": name})).collect();
            json!({"query": queries, "formula": formulas})
        }),
    ]
}

fn timeseries_cell_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(timeseries_request_strategy(), 1..4),
        prop::collection::vec(text_strategy(), 0..4),
        prop::collection::vec(tag_strategy(), 0..4),
    )
        .prop_map(|(requests, markers, tags)| {
            let mut definition = json!({"request": requests});
            if !markers.is_empty() {
                let markers: Vec<Value> =
                    markers.into_iter().map(|value| json!({"value": value})).collect();
                definition["marker"] = json!(markers);
            }
            let mut cell = graph_cell("timeseries", definition);
            if !tags.is_empty() {
                cell["attributes"][0]["notebook_timeseries_cell_attributes"][0]["split_by"] =
                    json!([{"keys": ["host"], "tags": tags}]);
            }
            cell
        })
}

fn toplist_cell_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((-1000i32..1000, 0usize..3), 1..5).prop_map(|formats| {
        let comparators = [">", "<=", "="];
        let formats: Vec<Value> = formats
            .into_iter()
            .map(|(value, comparator)| {
                json!({
                    "comparator": comparators[comparator],
                    "value": f64::from(value),
                    "palette": "white_on_red"
                })
            })
            .collect();
        graph_cell(
            "toplist",
            json!({"request": [{"q": "top(avg:system.load.1{*} by {host}, 10, 'mean', 'desc')", "conditional_format": formats}]}),
        )
    })
}

fn valid_cell_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        text_strategy().prop_map(|text| markdown_cell(&text)),
        timeseries_cell_strategy(),
        toplist_cell_strategy(),
    ]
}

/// Cells the builder must reject.
fn broken_cell_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"attributes": [{}]})),
        Just(graph_cell("timeseries", json!({"request": []}))),
        Just(graph_cell("timeseries", json!({"request": [{"q": "a", "rum_query": [{"index": "*"}]}]}))),
        Just(graph_cell("toplist", json!({"request": [{"conditional_format": [{"comparator": ">"}]}]}))),
        Just({
            let mut cell = markdown_cell("x");
            cell["attributes"][0]["notebook_toplist_cell_attributes"] = json!([{}]);
            cell
        }),
    ]
}

fn valid_notebook_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(valid_cell_strategy(), 0..6),
        prop::sample::select(vec!["1h", "4h", "1d", "1w"]),
    )
        .prop_map(|(cells, span)| notebook(relative_time(span), cells))
}

fn any_notebook_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(prop_oneof![3 => valid_cell_strategy(), 1 => broken_cell_strategy()], 0..6),
        prop::bool::ANY,
    )
        .prop_map(|(cells, absolute)| {
            let time = if absolute {
                absolute_time("2024-01-01T00:00:00.000000+0000", "2024-01-02T00:00:00.000000+0000")
            } else {
                relative_time("1h")
            };
            notebook(time, cells)
        })
}

fn markdown_texts(cells: &Value) -> Vec<String> {
    cells
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|cell| {
            cell["attributes"][0]["notebook_markdown_cell_attributes"][0]["definition"][0]["text"]
                .as_str()
                .map(str::to_string)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    /// Every push is matched by a pop, on success and on error.
    #[test]
    fn cursor_stays_balanced(config in any_notebook_strategy()) {
        let mut cursor = PathCursor::new(&config);
        let _ = build_create(&mut cursor);
        let stats = cursor.stats();
        prop_assert_eq!(cursor.depth(), 0);
        prop_assert_eq!(stats.pushes, stats.pops);
    }

    /// A written notebook reads back into state that plans no change.
    #[test]
    fn round_trip_has_no_drift(config in valid_notebook_strategy()) {
        let body = build_create(&mut PathCursor::new(&config)).unwrap();
        let response = echo_response(&body, 7);
        let state = decompose_notebook(response.data.as_ref().unwrap()).unwrap();

        let data = ResourceData::new(config).unwrap().with_id("7").with_prior_state(state);
        match plan(&data).unwrap() {
            Plan::Update { drift, .. } => prop_assert!(!drift),
            Plan::Create(_) => prop_assert!(false, "expected an update plan"),
        }
    }

    /// Cell and nested list order survives build and decompose.
    #[test]
    fn list_order_is_preserved(config in valid_notebook_strategy()) {
        let body = build_create(&mut PathCursor::new(&config)).unwrap();
        prop_assert_eq!(body.data.attributes.cells.len(), config["cell"].as_array().unwrap().len());

        let response = echo_response(&body, 7);
        let state = decompose_notebook(response.data.as_ref().unwrap()).unwrap();
        prop_assert_eq!(markdown_texts(&state["cell"]), markdown_texts(&config["cell"]));

        let desired_cells = config["cell"].as_array().unwrap();
        let recorded_cells = state["cell"].as_array().unwrap();
        for (desired, recorded) in desired_cells.iter().zip(recorded_cells) {
            let timeseries = "notebook_timeseries_cell_attributes";
            let desired_ts = &desired["attributes"][0][timeseries][0];
            let recorded_ts = &recorded["attributes"][0][timeseries][0];
            prop_assert_eq!(
                &desired_ts["definition"][0]["marker"],
                &recorded_ts["definition"][0]["marker"]
            );
            prop_assert_eq!(
                desired_ts["definition"][0]["request"].as_array().map(Vec::len),
                recorded_ts["definition"][0]["request"].as_array().map(Vec::len)
            );
            prop_assert_eq!(&desired_ts["split_by"][0]["tags"], &recorded_ts["split_by"][0]["tags"]);

            let toplist = "notebook_toplist_cell_attributes";
            prop_assert_eq!(
                &desired["attributes"][0][toplist][0]["definition"][0]["request"][0]["conditional_format"],
                &recorded["attributes"][0][toplist][0]["definition"][0]["request"][0]["conditional_format"]
            );
        }
    }
}
