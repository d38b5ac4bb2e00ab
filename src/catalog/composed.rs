//! Composed chart stories: mixed bar/area/line marks over a shared category
//! axis, with revenue on the secondary value axis.

use crate::body::{ChartBody, ChartKind, CurveKind, DataRow, SeriesShape, ShapeKind};
use crate::core::{ChartConfig, SeriesStyle};

use super::Story;

const DESCRIPTION: &str = "Composed charts mix bar, area, and line marks in \
one plot, pairing counts with a secondary revenue axis.";

fn monthly_revenue() -> Vec<DataRow> {
    vec![
        DataRow::new(
            "Jan",
            &[("desktop", 186.0), ("mobile", 80.0), ("revenue", 2400.0)],
        ),
        DataRow::new(
            "Feb",
            &[("desktop", 305.0), ("mobile", 200.0), ("revenue", 1398.0)],
        ),
        DataRow::new(
            "Mar",
            &[("desktop", 237.0), ("mobile", 120.0), ("revenue", 9800.0)],
        ),
        DataRow::new(
            "Apr",
            &[("desktop", 73.0), ("mobile", 190.0), ("revenue", 3908.0)],
        ),
        DataRow::new(
            "May",
            &[("desktop", 209.0), ("mobile", 130.0), ("revenue", 4800.0)],
        ),
        DataRow::new(
            "Jun",
            &[("desktop", 214.0), ("mobile", 140.0), ("revenue", 3800.0)],
        ),
    ]
}

fn config() -> ChartConfig {
    ChartConfig::new()
        .with_series("desktop", SeriesStyle::new("Desktop", "hsl(var(--chart-1))"))
        .with_series("mobile", SeriesStyle::new("Mobile", "hsl(var(--chart-2))"))
        .with_series("revenue", SeriesStyle::new("Revenue", "hsl(var(--chart-3))"))
}

fn revenue_line() -> SeriesShape {
    SeriesShape::new("revenue", ShapeKind::Line)
        .with_curve(CurveKind::Monotone)
        .with_stroke_width(2.0)
        .on_secondary_axis()
}

fn base_body() -> ChartBody {
    ChartBody::new(ChartKind::Composed)
        .with_rows(monthly_revenue())
        .with_grid(Some("3 3"))
        .with_axes()
        .with_tooltip()
        .with_legend()
}

fn story(id: &str, title: &str, body: ChartBody) -> Story {
    Story::new(id, title, DESCRIPTION, config(), body).with_class_name("w-full h-[300px]")
}

pub fn stories() -> Vec<Story> {
    vec![
        story(
            "composed-bar-and-line",
            "Composed Chart: Bar and Line",
            base_body()
                .with_shape(SeriesShape::new("desktop", ShapeKind::Bar))
                .with_shape(SeriesShape::new("mobile", ShapeKind::Bar))
                .with_shape(revenue_line()),
        ),
        story(
            "composed-area-and-line",
            "Composed Chart: Area and Line",
            base_body()
                .with_shape(
                    SeriesShape::new("desktop", ShapeKind::Area)
                        .with_curve(CurveKind::Monotone)
                        .with_stack_id("1"),
                )
                .with_shape(
                    SeriesShape::new("mobile", ShapeKind::Area)
                        .with_curve(CurveKind::Monotone)
                        .with_stack_id("1"),
                )
                .with_shape(revenue_line()),
        ),
        story(
            "composed-bar-area-line",
            "Composed Chart: Bar, Area and Line",
            base_body()
                .with_shape(SeriesShape::new("desktop", ShapeKind::Bar))
                .with_shape(
                    SeriesShape::new("mobile", ShapeKind::Area)
                        .with_curve(CurveKind::Monotone)
                        .with_stack_id("1"),
                )
                .with_shape(revenue_line()),
        ),
        story(
            "composed-stacked-bar-and-line",
            "Composed Chart: Stacked Bar and Line",
            base_body()
                .with_shape(SeriesShape::new("desktop", ShapeKind::Bar).with_stack_id("a"))
                .with_shape(SeriesShape::new("mobile", ShapeKind::Bar).with_stack_id("a"))
                .with_shape(revenue_line()),
        ),
        story(
            "composed-gradient",
            "Composed Chart: Gradient",
            base_body()
                .with_shape(SeriesShape::new("desktop", ShapeKind::Bar).with_gradient())
                .with_shape(
                    SeriesShape::new("mobile", ShapeKind::Area)
                        .with_curve(CurveKind::Monotone)
                        .with_stack_id("1")
                        .with_gradient(),
                )
                .with_shape(revenue_line()),
        ),
        story(
            "composed-custom-axes",
            "Composed Chart: Custom Axes",
            base_body()
                .with_y_domain(0.0, 400.0)
                .with_y2_domain(0.0, 10_000.0)
                .with_shape(SeriesShape::new("desktop", ShapeKind::Bar))
                .with_shape(SeriesShape::new("mobile", ShapeKind::Bar))
                .with_shape(revenue_line()),
        ),
    ]
}
