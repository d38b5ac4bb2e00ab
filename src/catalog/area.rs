//! Area chart stories: filled trends and cumulative totals over time.

use crate::body::{ChartBody, ChartKind, CurveKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Area charts display data as filled areas, ideal for \
showing trends and cumulative totals over time.";

fn monthly_visits() -> Vec<DataRow> {
    vec![
        DataRow::new("January", &[("desktop", 186.0), ("mobile", 80.0)]),
        DataRow::new("February", &[("desktop", 305.0), ("mobile", 200.0)]),
        DataRow::new("March", &[("desktop", 237.0), ("mobile", 120.0)]),
        DataRow::new("April", &[("desktop", 73.0), ("mobile", 190.0)]),
        DataRow::new("May", &[("desktop", 209.0), ("mobile", 130.0)]),
        DataRow::new("June", &[("desktop", 214.0), ("mobile", 140.0)]),
    ]
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("mobile", SeriesStyle::new("Mobile", "hsl(var(--chart-2))"))
}

fn area(key: &str) -> SeriesShape {
    SeriesShape::new(key, ShapeKind::Area).with_curve(CurveKind::Monotone)
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Area)
        .with_rows(monthly_visits())
        .with_grid(Some("3 3"))
        .with_axes()
        .with_tooltip()
}

fn story(id: &str, title: &str, config: ChartConfig, body: ChartBody) -> Story {
    Story::new(id, title, DESCRIPTION, config, body).with_class_name("w-full h-[300px]")
}

pub fn stories() -> Vec<Story> {
    vec![
        story(
            "area-default",
            "Area Chart: Default",
            config(),
            base_body()
                .with_legend()
                .with_shape(area("desktop").with_stack_id("1"))
                .with_shape(area("mobile").with_stack_id("1")),
        ),
        story(
            "area-single",
            "Area Chart: Single Area",
            ChartConfig::new()
                .with_series("desktop", SeriesStyle::new("Users", "hsl(var(--chart-1))")),
            base_body().with_shape(area("desktop")),
        ),
        story(
            "area-stacked",
            "Area Chart: Stacked",
            config(),
            base_body()
                .with_legend()
                .with_shape(area("desktop").with_stack_id("1"))
                .with_shape(area("mobile").with_stack_id("1")),
        ),
        story(
            "area-gradient",
            "Area Chart: Gradient",
            config(),
            base_body()
                .with_legend()
                .with_shape(area("desktop").with_stack_id("1").with_gradient())
                .with_shape(area("mobile").with_stack_id("1").with_gradient()),
        ),
        story(
            "area-smooth",
            "Area Chart: Smooth",
            config(),
            base_body()
                .with_legend()
                .with_shape(area("desktop").with_stroke_width(2.0))
                .with_shape(area("mobile").with_stroke_width(2.0)),
        ),
        story(
            "area-no-grid",
            "Area Chart: No Grid",
            config(),
            ChartBody::new(ChartKind::Area)
                .with_rows(monthly_visits())
                .with_axes()
                .with_tooltip()
                .with_legend()
                .with_shape(area("desktop").with_stack_id("1"))
                .with_shape(area("mobile").with_stack_id("1")),
        ),
    ]
}
