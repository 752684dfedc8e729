use qualitab_core::{CellValue, Column, Table};

#[test]
fn table_round_trips_through_json() {
    let table = Table::from_columns(vec![
        Column::new(
            "id",
            vec![CellValue::Int(1), CellValue::Int(2), CellValue::Missing],
        ),
        Column::new(
            "score",
            vec![
                CellValue::Float(0.5),
                CellValue::Missing,
                CellValue::Float(-3.25),
            ],
        ),
        Column::new(
            "label",
            vec![
                CellValue::Text("a".to_string()),
                CellValue::Bool(true),
                CellValue::Text("b".to_string()),
            ],
        ),
    ])
    .expect("build table");

    let json = serde_json::to_string(&table).expect("serialize table");
    let parsed: Table = serde_json::from_str(&json).expect("parse table");

    assert_eq!(parsed, table);
}

#[test]
fn cell_values_use_snake_case_tags() {
    let json = serde_json::to_string(&CellValue::Missing).expect("serialize missing");
    assert_eq!(json, "\"missing\"");

    let json = serde_json::to_string(&CellValue::Int(7)).expect("serialize int");
    assert_eq!(json, "{\"int\":7}");
}
