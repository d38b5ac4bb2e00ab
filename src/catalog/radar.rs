//! Radar chart stories: two students' scores across six subjects.

use crate::body::{ChartBody, ChartKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Radar charts compare multivariate profiles on a \
polar grid, with outline-only and dashed variants.";

fn subject_scores() -> Vec<DataRow> {
    vec![
        DataRow::new("Math", &[("A", 120.0), ("B", 110.0)]),
        DataRow::new("Chinese", &[("A", 98.0), ("B", 130.0)]),
        DataRow::new("English", &[("A", 86.0), ("B", 130.0)]),
        DataRow::new("Geography", &[("A", 99.0), ("B", 100.0)]),
        DataRow::new("Physics", &[("A", 85.0), ("B", 90.0)]),
        DataRow::new("History", &[("A", 65.0), ("B", 85.0)]),
    ]
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("A", SeriesStyle::new("Student A", "hsl(var(--chart-1))"))
        .with_series("B", SeriesStyle::new("Student B", "hsl(var(--chart-2))"))
}

fn radar(key: &str) -> SeriesShape {
    SeriesShape::new(key, ShapeKind::Radar).with_fill_opacity(0.6)
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Radar)
        .with_rows(subject_scores())
        .with_grid(None)
        .with_tooltip()
}

fn story(id: &str, title: &str, config: ChartConfig, body: ChartBody) -> Story {
    Story::new(id, title, DESCRIPTION, config, body).with_class_name("w-full h-[300px]")
}

pub fn stories() -> Vec<Story> {
    vec![
        story(
            "radar-default",
            "Radar Chart: Default",
            config(),
            base_body()
                .with_legend()
                .with_shape(radar("A"))
                .with_shape(radar("B")),
        ),
        story(
            "radar-single",
            "Radar Chart: Single Radar",
            ChartConfig::new().with_series(
                "A",
                SeriesStyle::new("Performance", "hsl(var(--chart-1))"),
            ),
            base_body().with_shape(radar("A")),
        ),
        story(
            "radar-no-fill",
            "Radar Chart: No Fill",
            config(),
            base_body()
                .with_legend()
                .with_shape(
                    SeriesShape::new("A", ShapeKind::Radar)
                        .with_fill_override("none")
                        .with_stroke_width(2.0),
                )
                .with_shape(
                    SeriesShape::new("B", ShapeKind::Radar)
                        .with_fill_override("none")
                        .with_stroke_width(2.0),
                ),
        ),
        story(
            "radar-dotted",
            "Radar Chart: Dotted",
            config(),
            base_body()
                .with_legend()
                .with_shape(
                    SeriesShape::new("A", ShapeKind::Radar)
                        .with_fill_opacity(0.3)
                        .with_dash_pattern("5 5"),
                )
                .with_shape(
                    SeriesShape::new("B", ShapeKind::Radar)
                        .with_fill_opacity(0.3)
                        .with_dash_pattern("10 5"),
                ),
        ),
        story(
            "radar-custom-radius",
            "Radar Chart: Custom Radius",
            config(),
            base_body()
                .with_y_domain(0.0, 150.0)
                .with_legend()
                .with_shape(radar("A"))
                .with_shape(radar("B")),
        ),
        Story::new(
            "radar-small",
            "Radar Chart: Small",
            DESCRIPTION,
            config(),
            base_body().with_shape(radar("A")),
        )
        .with_class_name("w-full h-[200px]"),
    ]
}
