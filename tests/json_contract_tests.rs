use chartbook::ChartError;
use chartbook::core::{ChartConfig, SeriesStyle, ThemeMode};

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("mobile", SeriesStyle::themed("Mobile", "#202020", "#e0e0e0"))
        .with_series("tablet", SeriesStyle::label_only("Tablet"))
}

#[test]
fn contract_v1_round_trips() {
    let original = config();
    let json = original.to_json_contract_v1_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_compat_str(&json).expect("parse");

    assert_eq!(parsed, original);
}

#[test]
fn round_trip_preserves_insertion_order() {
    let json = config().to_json_contract_v1_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_compat_str(&json).expect("parse");

    let keys: Vec<&str> = parsed.keys().collect();
    assert_eq!(keys, vec!["desktop", "mobile", "tablet"]);
}

#[test]
fn bare_map_shape_is_accepted() {
    let json = r##"{
        "desktop": { "label": "Desktop", "color": "#ff0000" },
        "mobile": { "label": "Mobile", "theme": { "light": "#101010", "dark": "#f0f0f0" } }
    }"##;
    let parsed = ChartConfig::from_json_compat_str(json).expect("parse");

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.label_for("mobile"), "Mobile");
    assert_eq!(parsed.color_for("mobile", ThemeMode::Dark), "#f0f0f0");
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r##"{ "schema_version": 99, "config": {} }"##;
    let err = ChartConfig::from_json_compat_str(json).expect_err("must reject");

    assert!(matches!(err, ChartError::InvalidConfig(message)
        if message.contains("unsupported config schema version: 99")));
}

#[test]
fn malformed_payload_is_rejected() {
    let err = ChartConfig::from_json_compat_str("not json").expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn serialized_contract_carries_schema_version() {
    let json = config().to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
}
