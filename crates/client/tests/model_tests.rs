//! Fixture-driven model tests.

mod common;

use common::*;
use notebook_client::models::{
    FormulaAndFunctionQueryDefinition, NotebookCellAttributes, NotebookCellTime,
    NotebookMetadataType, NotebookResponse, WidgetSort,
};

#[test]
fn test_fixture_reserializes_without_loss() {
    let fixture = load_fixture("notebooks/get_notebook.json");
    let parsed: NotebookResponse = serde_json::from_value(fixture).unwrap();

    let reparsed: NotebookResponse =
        serde_json::from_value(serde_json::to_value(&parsed).unwrap()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_fixture_nested_shapes() {
    let fixture = load_fixture("notebooks/get_notebook.json");
    let parsed: NotebookResponse = serde_json::from_value(fixture).unwrap();
    let attributes = parsed.data.unwrap().attributes;

    assert_eq!(
        attributes.metadata.unwrap().metadata_type,
        Some(NotebookMetadataType::Investigation)
    );

    let NotebookCellAttributes::Timeseries(timeseries) = &attributes.cells[1].attributes else {
        panic!("expected timeseries cell");
    };
    let apm = timeseries.definition.requests[0]
        .sources
        .apm_query
        .as_ref()
        .unwrap();
    let sort = apm.group_by.as_ref().unwrap()[0].sort.as_ref().unwrap();
    assert_eq!(sort.order, WidgetSort::Descending);
    assert_eq!(
        timeseries.split_by.as_ref().unwrap().tags,
        vec!["service:web".to_string()]
    );

    let queries = timeseries.definition.requests[1]
        .formula_and_function
        .queries
        .as_ref()
        .unwrap();
    assert!(matches!(queries[0], FormulaAndFunctionQueryDefinition::Metric(_)));

    let NotebookCellAttributes::Toplist(toplist) = &attributes.cells[2].attributes else {
        panic!("expected toplist cell");
    };
    assert!(matches!(toplist.time, Some(NotebookCellTime::Absolute(_))));
}
