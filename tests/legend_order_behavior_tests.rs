use chartbook::ChartContainer;
use chartbook::api::ActivePayloadEntry;
use chartbook::body::{ChartBody, ChartKind};
use chartbook::core::{ChartConfig, SeriesStyle, ThemeMode};

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("mobile", SeriesStyle::new("Mobile", "#0000ff"))
        .with_series("desktop", SeriesStyle::new("Desktop", "#ff0000"))
}

#[test]
fn legend_follows_config_insertion_order() {
    let frame =
        ChartContainer::new(config()).render_frame(&ChartBody::new(ChartKind::Bar), ThemeMode::Light);
    let keys: Vec<String> = frame
        .legend_entries()
        .into_iter()
        .map(|entry| entry.series_key)
        .collect();

    assert_eq!(keys, vec!["mobile", "desktop"]);
}

#[test]
fn legend_is_unaffected_by_active_payload() {
    let frame =
        ChartContainer::new(config()).render_frame(&ChartBody::new(ChartKind::Bar), ThemeMode::Light);

    // Hovering only `desktop` must not reorder or filter the legend.
    let payload = vec![ActivePayloadEntry::new("desktop", 186.0)];
    let _ = frame.tooltip_entries(&payload);

    let keys: Vec<String> = frame
        .legend_entries()
        .into_iter()
        .map(|entry| entry.series_key)
        .collect();
    assert_eq!(keys, vec!["mobile", "desktop"]);
}

#[test]
fn legend_entries_carry_labels_colors_and_vars() {
    let frame =
        ChartContainer::new(config()).render_frame(&ChartBody::new(ChartKind::Bar), ThemeMode::Light);
    let entries = frame.legend_entries();

    assert_eq!(entries[0].label, "Mobile");
    assert_eq!(entries[0].color, "#0000ff");
    assert_eq!(entries[0].css_var, "--color-mobile");
    assert_eq!(entries[1].label, "Desktop");
    assert_eq!(entries[1].color, "#ff0000");
    assert_eq!(entries[1].css_var, "--color-desktop");
}

#[test]
fn empty_config_yields_empty_legend() {
    let frame = ChartContainer::new(ChartConfig::new())
        .render_frame(&ChartBody::new(ChartKind::Bar), ThemeMode::Light);

    assert!(frame.legend_entries().is_empty());
}

#[test]
fn themed_legend_color_follows_frame_mode() {
    let config = ChartConfig::new()
        .with_series("visits", SeriesStyle::themed("Visits", "#101010", "#f0f0f0"));
    let body = ChartBody::new(ChartKind::Bar);

    let light = ChartContainer::new(config.clone()).render_frame(&body, ThemeMode::Light);
    let dark = ChartContainer::new(config).render_frame(&body, ThemeMode::Dark);

    assert_eq!(light.legend_entries()[0].color, "#101010");
    assert_eq!(dark.legend_entries()[0].color, "#f0f0f0");
}
