//! Bar chart stories: categorical comparisons across three device series.

use crate::body::{ChartBody, ChartKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Bar charts compare values across categories, \
with stacked, horizontal, and rounded variants.";

fn monthly_devices() -> Vec<DataRow> {
    vec![
        DataRow::new(
            "Jan",
            &[("desktop", 186.0), ("mobile", 80.0), ("tablet", 50.0)],
        ),
        DataRow::new(
            "Feb",
            &[("desktop", 305.0), ("mobile", 200.0), ("tablet", 120.0)],
        ),
        DataRow::new(
            "Mar",
            &[("desktop", 237.0), ("mobile", 120.0), ("tablet", 80.0)],
        ),
        DataRow::new(
            "Apr",
            &[("desktop", 73.0), ("mobile", 190.0), ("tablet", 100.0)],
        ),
        DataRow::new(
            "May",
            &[("desktop", 209.0), ("mobile", 130.0), ("tablet", 90.0)],
        ),
        DataRow::new(
            "Jun",
            &[("desktop", 214.0), ("mobile", 140.0), ("tablet", 110.0)],
        ),
    ]
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("mobile", SeriesStyle::new("Mobile", "hsl(var(--chart-2))"))
        .with_series("tablet", SeriesStyle::new("Tablet", "hsl(var(--chart-3))"))
}

fn bar(key: &str) -> SeriesShape {
    SeriesShape::new(key, ShapeKind::Bar)
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Bar)
        .with_rows(monthly_devices())
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
            "bar-default",
            "Bar Chart: Default",
            config(),
            base_body()
                .with_legend()
                .with_shape(bar("desktop"))
                .with_shape(bar("mobile"))
                .with_shape(bar("tablet")),
        ),
        story(
            "bar-single",
            "Bar Chart: Single Bar",
            ChartConfig::new()
                .with_series("desktop", SeriesStyle::new("Sales", "hsl(var(--chart-1))")),
            base_body().with_shape(bar("desktop")),
        ),
        story(
            "bar-horizontal",
            "Bar Chart: Horizontal",
            config(),
            base_body()
                .with_horizontal_layout()
                .with_legend()
                .with_shape(bar("desktop"))
                .with_shape(bar("mobile"))
                .with_shape(bar("tablet")),
        ),
        story(
            "bar-stacked",
            "Bar Chart: Stacked",
            config(),
            base_body()
                .with_legend()
                .with_shape(bar("desktop").with_stack_id("a"))
                .with_shape(bar("mobile").with_stack_id("a"))
                .with_shape(bar("tablet").with_stack_id("a")),
        ),
        story(
            "bar-rounded",
            "Bar Chart: Rounded",
            config(),
            base_body()
                .with_legend()
                .with_shape(bar("desktop").with_corner_radius(4.0))
                .with_shape(bar("mobile").with_corner_radius(4.0))
                .with_shape(bar("tablet").with_corner_radius(4.0)),
        ),
        story(
            "bar-gradient",
            "Bar Chart: Gradient",
            config(),
            base_body()
                .with_legend()
                .with_shape(bar("desktop").with_gradient())
                .with_shape(bar("mobile").with_gradient())
                .with_shape(bar("tablet").with_gradient()),
        ),
    ]
}
