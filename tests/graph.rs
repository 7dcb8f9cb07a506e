use mockframe::mock_core::{ColumnKind, Library};
use mockframe::mock_generator::{generate_features, FeatureFlags, FeaturesConfig};
use mockframe::mock_graph::{Graph, GraphError, Line, Scatter, SpecBackend};
use mockframe::mock_output::{write_data, OutputFormat};

fn dataset() -> mockframe::mock_core::MockTable {
    let config = FeaturesConfig::default()
        .with_num_rows(6)
        .with_flags(FeatureFlags::only(&[
            ColumnKind::Ints,
            ColumnKind::RandFloats,
            ColumnKind::Categoricals,
        ]))
        .with_seed(42);
    generate_features(&config).unwrap().into_table().unwrap()
}

#[test]
fn test_line_over_generated_dataset() {
    let spec = Line::new("ints", "rand_floats")
        .with_dataset(dataset())
        .with_hue("categoricals")
        .plot(&SpecBackend)
        .unwrap();

    assert_eq!(spec["name"], "Line");
    assert_eq!(
        spec["series"]["x"],
        serde_json::json!([-3, -2, -1, 0, 1, 2])
    );
    assert_eq!(spec["series"]["y"].as_array().unwrap().len(), 6);
    for label in spec["series"]["hue"].as_array().unwrap() {
        assert!(["First", "Second", "Third", "Fourth"].contains(&label.as_str().unwrap()));
    }
}

#[test]
fn test_scatter_rejects_unselected_column() {
    let result = Scatter::new()
        .with_dataset(dataset())
        .with_x("dates")
        .with_y("ints")
        .plot(&SpecBackend);
    assert!(matches!(result, Err(GraphError::UnknownColumn(c)) if c == "dates"));
}

#[test]
fn test_write_all_dtypes_csv() {
    let config = FeaturesConfig::default()
        .with_num_rows(4)
        .with_all_dtypes(true)
        .with_seed(3);
    let data = generate_features(&config).unwrap();

    let mut out = Vec::new();
    write_data(&data, OutputFormat::Csv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("ints,rand_ints,floats,rand_floats,booleans,categoricals,dates,texts,ints_nullable,floats_nullable,booleans_nullable")
    );
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_write_raw_json() {
    let config = FeaturesConfig::default()
        .with_num_rows(2)
        .with_flags(FeatureFlags::only(&[ColumnKind::Ints, ColumnKind::Dates]))
        .with_library(Library::Numpy);
    let data = generate_features(&config).unwrap();

    let mut out = Vec::new();
    write_data(&data, OutputFormat::Json, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(
        parsed,
        serde_json::json!([[-1, "2001-01-01"], [0, "2001-01-02"]])
    );
}

#[test]
fn test_write_structured_json_includes_schema() {
    let config = FeaturesConfig::default()
        .with_num_rows(3)
        .with_flags(FeatureFlags::only(&[ColumnKind::Ints, ColumnKind::BooleansNullable]))
        .with_seed(1);
    let data = generate_features(&config).unwrap();

    let mut out = Vec::new();
    write_data(&data, OutputFormat::Json, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(
        parsed["schema"],
        serde_json::json!({"ints": "Integer", "booleans_nullable": "BooleanNullable"})
    );
    assert_eq!(parsed["data"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["data"][0]["ints"], -1);
}
