use chartbook::core::{ChartConfig, SeriesStyle, StyleScope, escape_key};

fn two_series_config() -> ChartConfig {
    ChartConfig::new()
        .with_series("mobile", SeriesStyle::new("Mobile", "hsl(var(--chart-2))"))
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
}

#[test]
fn scope_emits_one_entry_per_key_in_insertion_order() {
    let scope = StyleScope::resolve(&two_series_config());

    let keys: Vec<&str> = scope
        .entries()
        .iter()
        .map(|entry| entry.series_key.as_str())
        .collect();
    assert_eq!(keys, vec!["mobile", "desktop"]);
    assert_eq!(scope.len(), 2);
}

#[test]
fn scope_resolution_is_deterministic() {
    let config = two_series_config();
    let first = StyleScope::resolve(&config);
    let second = StyleScope::resolve(&config);

    assert_eq!(first, second);
    assert_eq!(
        first.css_block("[data-chart=\"demo\"]"),
        second.css_block("[data-chart=\"demo\"]")
    );
}

#[test]
fn empty_config_yields_empty_scope() {
    let scope = StyleScope::resolve(&ChartConfig::new());

    assert!(scope.is_empty());
    assert_eq!(scope.css_block("[data-chart=\"demo\"]"), "");
}

#[test]
fn escaping_replaces_non_alphanumeric_characters() {
    assert_eq!(escape_key("desktop"), "desktop");
    assert_eq!(escape_key("a.b"), "a_b");
    assert_eq!(escape_key("page views/day"), "page_views_day");
    assert_eq!(escape_key("größe"), "gr__e");
}

#[test]
fn escaped_var_name_lands_in_css_block() {
    let config = ChartConfig::new().with_series("page.views", SeriesStyle::new("Views", "#123456"));
    let scope = StyleScope::resolve(&config);

    assert_eq!(scope.var_for("page.views"), Some("--color-page_views"));
    let css = scope.css_block("[data-chart=\"demo\"]");
    assert!(css.contains("--color-page_views: #123456;"));
}

#[test]
fn colliding_keys_get_numeric_suffixes_in_first_seen_order() {
    let config = ChartConfig::new()
        .with_series("a.b", SeriesStyle::new("Dot", "#111111"))
        .with_series("a-b", SeriesStyle::new("Dash", "#222222"))
        .with_series("a_b", SeriesStyle::new("Underscore", "#333333"));
    let scope = StyleScope::resolve(&config);

    assert_eq!(scope.var_for("a.b"), Some("--color-a_b"));
    assert_eq!(scope.var_for("a-b"), Some("--color-a_b_2"));
    assert_eq!(scope.var_for("a_b"), Some("--color-a_b_3"));
}

#[test]
fn collision_suffix_skips_names_already_taken_by_natural_keys() {
    let config = ChartConfig::new()
        .with_series("a_b_2", SeriesStyle::new("Natural", "#111111"))
        .with_series("a.b", SeriesStyle::new("Dot", "#222222"))
        .with_series("a-b", SeriesStyle::new("Dash", "#333333"));
    let scope = StyleScope::resolve(&config);

    assert_eq!(scope.var_for("a_b_2"), Some("--color-a_b_2"));
    assert_eq!(scope.var_for("a.b"), Some("--color-a_b"));
    assert_eq!(scope.var_for("a-b"), Some("--color-a_b_3"));
}

#[test]
fn css_block_emits_light_and_dark_rule_sets() {
    let config = ChartConfig::new()
        .with_series("visits", SeriesStyle::themed("Visits", "#101010", "#f0f0f0"));
    let css = StyleScope::resolve(&config).css_block("[data-chart=\"demo\"]");

    assert!(css.starts_with("[data-chart=\"demo\"] {\n"));
    assert!(css.contains("--color-visits: #101010;"));
    assert!(css.contains(".dark [data-chart=\"demo\"] {\n"));
    assert!(css.contains("--color-visits: #f0f0f0;"));
}

#[test]
fn explicit_color_is_identical_in_both_rule_sets() {
    let config = ChartConfig::new().with_series("visits", SeriesStyle::new("Visits", "#abcdef"));
    let css = StyleScope::resolve(&config).css_block("[data-chart=\"demo\"]");

    assert_eq!(css.matches("--color-visits: #abcdef;").count(), 2);
}
