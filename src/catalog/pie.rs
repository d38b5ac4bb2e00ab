//! Pie chart stories: device share as slices, from donut to solid pie.

use crate::body::{ChartBody, ChartKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Pie charts show proportions of a whole as slices, \
with donut, labeled, and custom-color variants.";

const SLICES: [(&str, f64); 4] = [
    ("Desktop", 186.0),
    ("Mobile", 200.0),
    ("Tablet", 120.0),
    ("Other", 50.0),
];

fn device_share() -> Vec<DataRow> {
    vec![DataRow::new("devices", &SLICES)]
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("Desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("Mobile", SeriesStyle::new("Mobile", "hsl(var(--chart-2))"))
        .with_series("Tablet", SeriesStyle::new("Tablet", "hsl(var(--chart-3))"))
        .with_series("Other", SeriesStyle::new("Other", "hsl(var(--chart-4))"))
}

fn slices() -> Vec<SeriesShape> {
    SLICES
        .iter()
        .map(|(key, _)| SeriesShape::new(*key, ShapeKind::Slice))
        .collect()
}

fn base_body(inner_radius: Option<f64>, outer_radius: f64) -> ChartBody {
    let mut body = ChartBody::new(ChartKind::Pie)
        .with_rows(device_share())
        .with_radii(inner_radius, Some(outer_radius))
        .with_padding_angle(2.0)
        .with_tooltip()
        .with_legend();
    for slice in slices() {
        body = body.with_shape(slice);
    }
    body
}

fn story(id: &str, title: &str, config: ChartConfig, body: ChartBody) -> Story {
    Story::new(id, title, DESCRIPTION, config, body).with_class_name("w-full h-[300px]")
}

pub fn stories() -> Vec<Story> {
    let custom_fills = [
        ("Desktop", "#8884d8"),
        ("Mobile", "#82ca9d"),
        ("Tablet", "#ffc658"),
        ("Other", "#ff7300"),
    ];
    let mut custom_body = ChartBody::new(ChartKind::Pie)
        .with_rows(device_share())
        .with_radii(Some(60.0), Some(100.0))
        .with_padding_angle(2.0)
        .with_tooltip()
        .with_legend();
    for (key, fill) in custom_fills {
        custom_body =
            custom_body.with_shape(SeriesShape::new(key, ShapeKind::Slice).with_fill_override(fill));
    }

    vec![
        story(
            "pie-default",
            "Pie Chart: Default",
            config(),
            base_body(Some(60.0), 100.0),
        ),
        story(
            "pie-donut",
            "Pie Chart: Donut",
            config(),
            base_body(Some(80.0), 120.0),
        ),
        story(
            "pie-full",
            "Pie Chart: Full Pie",
            config(),
            base_body(None, 100.0),
        ),
        story(
            "pie-with-labels",
            "Pie Chart: With Labels",
            config(),
            base_body(Some(60.0), 100.0).with_mark_labels(),
        ),
        story(
            "pie-custom-colors",
            "Pie Chart: Custom Colors",
            config(),
            custom_body,
        ),
        Story::new(
            "pie-small",
            "Pie Chart: Small",
            DESCRIPTION,
            config(),
            base_body(Some(40.0), 70.0),
        )
        .with_class_name("w-full h-[200px]"),
    ]
}
