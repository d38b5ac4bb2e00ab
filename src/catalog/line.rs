//! Line chart stories: monthly visit trends for two device series.

use crate::body::{ChartBody, ChartKind, CurveKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Line charts trace values over an ordered axis, \
with smooth, dotted, dashed, and filled variants.";

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

fn line(key: &str) -> SeriesShape {
    SeriesShape::new(key, ShapeKind::Line).with_curve(CurveKind::Monotone)
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Line)
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
            "line-default",
            "Line Chart: Default",
            config(),
            base_body()
                .with_legend()
                .with_shape(line("desktop").with_stroke_width(2.0))
                .with_shape(line("mobile").with_stroke_width(2.0)),
        ),
        story(
            "line-single",
            "Line Chart: Single Line",
            ChartConfig::new()
                .with_series("desktop", SeriesStyle::new("Users", "hsl(var(--chart-1))")),
            base_body().with_shape(
                line("desktop")
                    .with_stroke_width(3.0)
                    .with_dots()
                    .with_point_radius(4.0),
            ),
        ),
        story(
            "line-smooth",
            "Line Chart: Smooth Curve",
            config(),
            base_body()
                .with_legend()
                .with_shape(line("desktop").with_stroke_width(2.0))
                .with_shape(line("mobile").with_stroke_width(2.0)),
        ),
        story(
            "line-with-dots",
            "Line Chart: With Dots",
            config(),
            base_body()
                .with_legend()
                .with_shape(
                    line("desktop")
                        .with_stroke_width(2.0)
                        .with_dots()
                        .with_point_radius(6.0),
                )
                .with_shape(
                    line("mobile")
                        .with_stroke_width(2.0)
                        .with_dots()
                        .with_point_radius(6.0),
                ),
        ),
        story(
            "line-dashed",
            "Line Chart: Dashed Lines",
            config(),
            base_body()
                .with_legend()
                .with_shape(
                    line("desktop")
                        .with_stroke_width(2.0)
                        .with_dash_pattern("5 5"),
                )
                .with_shape(
                    line("mobile")
                        .with_stroke_width(2.0)
                        .with_dash_pattern("10 5"),
                ),
        ),
        story(
            "line-area-fill",
            "Line Chart: Area Fill",
            config(),
            base_body()
                .with_legend()
                .with_shape(
                    line("desktop")
                        .with_stroke_width(2.0)
                        .with_fill_opacity(0.1),
                )
                .with_shape(line("mobile").with_stroke_width(2.0).with_fill_opacity(0.1)),
        ),
    ]
}
