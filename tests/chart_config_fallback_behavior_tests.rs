use chartbook::core::{ChartConfig, SeriesStyle, ThemeMode, fallback_color};

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("mobile", SeriesStyle::themed("Mobile", "#202020", "#e0e0e0"))
        .with_series("tablet", SeriesStyle::label_only("Tablet"))
}

#[test]
fn label_resolves_from_config_entry() {
    assert_eq!(config().label_for("desktop"), "Desktop");
}

#[test]
fn missing_key_falls_back_to_identity_label() {
    let config = config();
    assert_eq!(config.label_for("unknown"), "unknown");
    assert_eq!(config.label_for(""), "");
}

#[test]
fn explicit_color_wins_over_theme_mode() {
    let config = config();
    assert_eq!(
        config.color_for("desktop", ThemeMode::Light),
        "hsl(var(--chart-1))"
    );
    assert_eq!(
        config.color_for("desktop", ThemeMode::Dark),
        "hsl(var(--chart-1))"
    );
}

#[test]
fn themed_color_follows_mode() {
    let config = config();
    assert_eq!(config.color_for("mobile", ThemeMode::Light), "#202020");
    assert_eq!(config.color_for("mobile", ThemeMode::Dark), "#e0e0e0");
}

#[test]
fn label_only_entry_uses_palette_fallback() {
    let config = config();
    assert_eq!(
        config.color_for("tablet", ThemeMode::Light),
        fallback_color("tablet", ThemeMode::Light)
    );
}

#[test]
fn missing_key_color_is_stable_across_calls() {
    let config = config();
    let first = config.color_for("unknown", ThemeMode::Light).to_owned();
    for _ in 0..32 {
        assert_eq!(config.color_for("unknown", ThemeMode::Light), first);
    }
}

#[test]
fn empty_config_falls_back_without_error() {
    let config = ChartConfig::new();
    assert_eq!(config.label_for("desktop"), "desktop");
    assert_eq!(
        config.color_for("desktop", ThemeMode::Dark),
        fallback_color("desktop", ThemeMode::Dark)
    );
}

#[test]
fn fallback_palette_differs_by_mode() {
    // Slot index is mode-independent; the slot color is not.
    assert_ne!(
        fallback_color("desktop", ThemeMode::Light),
        fallback_color("desktop", ThemeMode::Dark)
    );
}

#[test]
fn reinserting_a_key_keeps_its_position() {
    let mut config = ChartConfig::new()
        .with_series("first", SeriesStyle::label_only("First"))
        .with_series("second", SeriesStyle::label_only("Second"));
    config.insert("first", SeriesStyle::label_only("Renamed"));

    let keys: Vec<&str> = config.keys().collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert_eq!(config.label_for("first"), "Renamed");
}
