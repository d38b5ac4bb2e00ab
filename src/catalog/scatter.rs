//! Scatter chart stories: point clouds over two numeric axes, sized by an
//! optional third field.

use crate::body::{ChartBody, ChartKind, DataRow, PointShape, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Scatter charts reveal relationships between two \
numeric variables, with sized and shaped point variants.";

const POINTS: [(&str, f64, f64, f64); 8] = [
    ("A", 100.0, 200.0, 200.0),
    ("B", 120.0, 100.0, 260.0),
    ("C", 170.0, 300.0, 400.0),
    ("D", 140.0, 250.0, 280.0),
    ("E", 150.0, 400.0, 500.0),
    ("F", 110.0, 280.0, 200.0),
    ("G", 200.0, 150.0, 300.0),
    ("H", 180.0, 350.0, 450.0),
];

fn point_cloud() -> Vec<DataRow> {
    POINTS
        .iter()
        .map(|(name, x, y, z)| DataRow::new(*name, &[("x", *x), ("y", *y), ("z", *z)]))
        .collect()
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("x", SeriesStyle::new("X Value", "hsl(var(--chart-1))"))
        .with_series("y", SeriesStyle::new("Y Value", "hsl(var(--chart-2))"))
        .with_series("z", SeriesStyle::new("Z Value", "hsl(var(--chart-3))"))
}

fn scatter() -> SeriesShape {
    SeriesShape::new("y", ShapeKind::Scatter)
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Scatter)
        .with_rows(point_cloud())
        .with_grid(Some("3 3"))
        .with_axes()
        .with_tooltip()
}

fn story(id: &str, title: &str, body: ChartBody) -> Story {
    Story::new(id, title, DESCRIPTION, config(), body).with_class_name("w-full h-[300px]")
}

pub fn stories() -> Vec<Story> {
    vec![
        story(
            "scatter-default",
            "Scatter Chart: Default",
            base_body().with_shape(scatter()),
        ),
        story(
            "scatter-with-size",
            "Scatter Chart: With Size",
            base_body().with_shape(scatter().with_point_radius(6.0)),
        ),
        story(
            "scatter-variable-size",
            "Scatter Chart: Variable Size",
            base_body().with_shape(scatter().with_size_key("z")),
        ),
        story(
            "scatter-multiple-series",
            "Scatter Chart: Multiple Series",
            base_body()
                .with_shape(scatter().with_point_radius(6.0))
                .with_shape(
                    scatter()
                        .with_point_radius(6.0)
                        .with_fill_override("var(--color-z)"),
                ),
        ),
        story(
            "scatter-custom-shapes",
            "Scatter Chart: Custom Shapes",
            base_body().with_shape(
                scatter()
                    .with_point_radius(8.0)
                    .with_point_shape(PointShape::Square),
            ),
        ),
        story(
            "scatter-with-labels",
            "Scatter Chart: With Labels",
            base_body()
                .with_mark_labels()
                .with_shape(scatter().with_point_radius(6.0)),
        ),
    ]
}
