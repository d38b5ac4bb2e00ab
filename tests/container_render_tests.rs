use chartbook::ChartContainer;
use chartbook::ChartError;
use chartbook::body::{ChartBody, ChartKind, DataRow, SeriesShape, ShapeKind};
use chartbook::core::{ChartConfig, SeriesStyle, ThemeMode};
use chartbook::render::{HtmlRenderer, NullRenderer, SurfaceRenderer};

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "#ff0000"))
        .with_series("mobile", SeriesStyle::new("Mobile", "#0000ff"))
}

fn body() -> ChartBody {
    ChartBody::new(ChartKind::Area)
        .with_rows(vec![DataRow::new(
            "January",
            &[("desktop", 186.0), ("mobile", 80.0)],
        )])
        .with_grid(Some("3 3"))
        .with_axes()
        .with_legend()
        .with_shape(SeriesShape::new("desktop", ShapeKind::Area).with_stack_id("1"))
        .with_shape(SeriesShape::new("mobile", ShapeKind::Area).with_stack_id("1"))
}

#[test]
fn frame_scopes_style_block_to_chart_id() {
    let container = ChartContainer::new(config()).with_chart_id("area-demo");
    let frame = container.render_frame(&body(), ThemeMode::Light);

    assert_eq!(frame.selector(), "[data-chart=\"area-demo\"]");
    let style = frame.style_block();
    assert!(style.contains("[data-chart=\"area-demo\"] {"));
    assert!(style.contains("--color-desktop: #ff0000;"));
    assert!(style.contains("--color-mobile: #0000ff;"));
}

#[test]
fn repeated_render_passes_are_identical() {
    let container = ChartContainer::new(config()).with_chart_id("area-demo");
    let body = body();

    let first = container.render_frame(&body, ThemeMode::Light);
    let second = container.render_frame(&body, ThemeMode::Light);
    assert_eq!(first, second);

    let mut renderer = HtmlRenderer::new();
    let first_markup = renderer.render_to_string(&first).expect("render first");
    let second_markup = renderer.render_to_string(&second).expect("render second");
    assert_eq!(first_markup, second_markup);
}

#[test]
fn null_renderer_records_frame_counters() {
    let container = ChartContainer::new(config());
    let frame = container.render_frame(&body(), ThemeMode::Light);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_shape_count, 2);
    assert_eq!(renderer.last_scope_len, 2);
}

#[test]
fn shape_with_empty_key_fails_validation() {
    let container = ChartContainer::new(config());
    let invalid_body =
        ChartBody::new(ChartKind::Bar).with_shape(SeriesShape::new("", ShapeKind::Bar));
    let frame = container.render_frame(&invalid_body, ThemeMode::Light);

    let mut renderer = NullRenderer::default();
    let err = renderer.render(&frame).expect_err("must reject empty key");
    assert!(matches!(err, ChartError::InvalidFrame(_)));
}

#[test]
fn html_output_references_series_through_vars_only() {
    let container = ChartContainer::new(config()).with_chart_id("area-demo");
    let frame = container.render_frame(&body(), ThemeMode::Light);

    let markup = HtmlRenderer::new()
        .render_to_string(&frame)
        .expect("render");
    assert!(markup.contains("--series-paint: var(--color-desktop);"));
    assert!(markup.contains("--series-paint: var(--color-mobile);"));
    // Literal colors only inside the scoped style block.
    let after_style = markup.split("</style>").nth(1).expect("body after style");
    assert!(!after_style.contains("#ff0000"));
    assert!(!after_style.contains("#0000ff"));
}

#[test]
fn html_output_includes_legend_in_config_order() {
    let container = ChartContainer::new(config());
    let frame = container.render_frame(&body(), ThemeMode::Light);

    let markup = HtmlRenderer::new()
        .render_to_string(&frame)
        .expect("render");
    let desktop_at = markup.find("data-series=\"desktop\"").expect("desktop item");
    let legend_at = markup.find("chart-legend").expect("legend list");
    assert!(legend_at > desktop_at);
    assert!(markup.contains("var(--color-desktop)"));
    assert!(markup.contains(">Desktop</li>"));
    assert!(markup.contains(">Mobile</li>"));
}

#[test]
fn class_name_is_forwarded_to_container_markup() {
    let container = ChartContainer::new(config()).with_class_name("w-full h-[300px]");
    let frame = container.render_frame(&body(), ThemeMode::Light);

    let markup = HtmlRenderer::new()
        .render_to_string(&frame)
        .expect("render");
    assert!(markup.contains("class=\"chart-container w-full h-[300px]\""));
}

#[test]
fn gradient_shape_paints_through_gradient_reference() {
    let gradient_body = ChartBody::new(ChartKind::Bar)
        .with_shape(SeriesShape::new("desktop", ShapeKind::Bar).with_gradient());
    let container = ChartContainer::new(config()).with_chart_id("bars");
    let frame = container.render_frame(&gradient_body, ThemeMode::Light);

    let markup = HtmlRenderer::new()
        .render_to_string(&frame)
        .expect("render");
    assert!(markup.contains("id=\"bars-desktop-gradient\""));
    assert!(markup.contains("--series-paint: url(#bars-desktop-gradient);"));
}

#[test]
fn dark_mode_frame_emits_dark_rule_set() {
    let config = ChartConfig::new()
        .with_series("visits", SeriesStyle::themed("Visits", "#101010", "#f0f0f0"));
    let container = ChartContainer::new(config).with_chart_id("themed");
    let frame = container.render_frame(&ChartBody::new(ChartKind::Line), ThemeMode::Dark);

    let style = frame.style_block();
    assert!(style.contains(".dark [data-chart=\"themed\"] {"));
    assert!(style.contains("--color-visits: #f0f0f0;"));
}
