use chartbook::ChartContainer;
use chartbook::api::ActivePayloadEntry;
use chartbook::body::{ChartBody, ChartKind};
use chartbook::core::{ChartConfig, SeriesStyle, ThemeMode, fallback_color};

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("mobile", SeriesStyle::new("Mobile", "#0000ff"))
        .with_series("desktop", SeriesStyle::new("Desktop", "#ff0000"))
}

fn frame() -> chartbook::ContainerFrame {
    ChartContainer::new(config()).render_frame(&ChartBody::new(ChartKind::Line), ThemeMode::Light)
}

#[test]
fn tooltip_preserves_payload_order_not_config_order() {
    let payload = vec![
        ActivePayloadEntry::new("desktop", 186.0),
        ActivePayloadEntry::new("mobile", 80.0),
    ];
    let entries = frame().tooltip_entries(&payload);

    let keys: Vec<&str> = entries
        .iter()
        .map(|entry| entry.series_key.as_str())
        .collect();
    assert_eq!(keys, vec!["desktop", "mobile"]);
}

#[test]
fn tooltip_resolves_labels_and_colors_from_config() {
    let payload = vec![ActivePayloadEntry::new("desktop", 186.0)];
    let entries = frame().tooltip_entries(&payload);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "Desktop");
    assert_eq!(entries[0].color, "#ff0000");
    assert_eq!(entries[0].value, Some(186.0));
}

#[test]
fn payload_color_overrides_config_resolution() {
    let payload = vec![ActivePayloadEntry::new("desktop", 186.0).with_color("#00ff00")];
    let entries = frame().tooltip_entries(&payload);

    assert_eq!(entries[0].color, "#00ff00");
}

#[test]
fn unknown_payload_key_degrades_to_fallbacks() {
    let payload = vec![ActivePayloadEntry::new("tablet", 42.0)];
    let entries = frame().tooltip_entries(&payload);

    assert_eq!(entries[0].label, "tablet");
    assert_eq!(
        entries[0].color,
        fallback_color("tablet", ThemeMode::Light)
    );
}

#[test]
fn entry_without_value_keeps_none() {
    let payload = vec![ActivePayloadEntry::without_value("desktop")];
    let entries = frame().tooltip_entries(&payload);

    assert_eq!(entries[0].value, None);
}

#[test]
fn empty_payload_yields_no_entries() {
    assert!(frame().tooltip_entries(&[]).is_empty());
}
