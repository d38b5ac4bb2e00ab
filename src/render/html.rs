use std::fmt::Write as _;

use crate::api::{ActivePayloadEntry, ContainerFrame, IndicatorKind, TooltipBehavior};
use crate::body::{ChartBody, CurveKind, PointShape, SeriesShape, ShapeKind};
use crate::core::escape_key;
use crate::error::ChartResult;

use super::SurfaceRenderer;

/// Escapes text for safe interpolation into markup.
#[must_use]
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup-emitting surface for the demo pages.
///
/// Emits a declarative DOM mirroring the frame: a scoped style block, the
/// body's series elements painted through `var(--color-…)` references, and
/// an optional legend. It draws no geometry; layout is the page styling's
/// concern.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    last_markup: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_markup(&self) -> &str {
        &self.last_markup
    }

    /// Renders a frame and returns the produced markup.
    pub fn render_to_string(&mut self, frame: &ContainerFrame) -> ChartResult<String> {
        self.render(frame)?;
        Ok(self.last_markup.clone())
    }

    /// Emits tooltip content for an active payload, in payload order.
    ///
    /// An empty payload yields empty markup; the surface hides the tooltip
    /// when nothing is under the pointer.
    #[must_use]
    pub fn tooltip_markup(
        &self,
        frame: &ContainerFrame,
        payload: &[ActivePayloadEntry],
        behavior: &TooltipBehavior,
        label: Option<&str>,
    ) -> String {
        if payload.is_empty() {
            return String::new();
        }

        let mut out = String::from("<div class=\"chart-tooltip-content\">\n");
        if !behavior.hide_label {
            if let Some(label) = label {
                let _ = writeln!(
                    out,
                    "<span class=\"chart-tooltip-label\">{}</span>",
                    escape_text(label)
                );
            }
        }
        for entry in frame.tooltip_entries(payload) {
            out.push_str("<div class=\"chart-tooltip-row\">");
            if !behavior.hide_indicator {
                let indicator_class = match behavior.indicator {
                    IndicatorKind::Dot => "dot",
                    IndicatorKind::Line => "line",
                    IndicatorKind::Dashed => "dashed",
                };
                let _ = write!(
                    out,
                    "<span class=\"chart-tooltip-indicator chart-tooltip-indicator--{indicator_class}\" style=\"background: {};\"></span>",
                    escape_text(&entry.color)
                );
            }
            let _ = write!(
                out,
                "<span class=\"chart-tooltip-name\">{}</span>",
                escape_text(&entry.label)
            );
            if let Some(value) = entry.value {
                let _ = write!(out, "<span class=\"chart-tooltip-value\">{value}</span>");
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
        out
    }

    fn emit_container(&self, frame: &ContainerFrame) -> String {
        let mut out = String::new();
        let class_attr = match frame.class_name() {
            Some(class_name) => format!("chart-container {}", escape_text(class_name)),
            None => "chart-container".to_owned(),
        };
        let _ = writeln!(
            out,
            "<div data-chart=\"{}\" class=\"{class_attr}\">",
            escape_text(frame.chart_id())
        );

        let style_block = frame.style_block();
        if !style_block.is_empty() {
            let _ = writeln!(out, "<style>\n{style_block}</style>");
        }

        out.push_str(&self.emit_body(frame));

        if frame.body().show_legend {
            out.push_str(&self.emit_legend(frame));
        }
        if frame.body().show_tooltip {
            // Mount point only; rows are interaction-driven.
            let _ = writeln!(out, "<div class=\"chart-tooltip\" hidden></div>");
        }

        out.push_str("</div>\n");
        out
    }

    fn emit_body(&self, frame: &ContainerFrame) -> String {
        let body = frame.body();
        let mut out = String::new();
        let mut body_classes = format!("chart-body chart-body--{}", body.kind.as_str());
        if body.horizontal {
            body_classes.push_str(" chart-body--horizontal");
        }
        let mut body_attrs = format!("class=\"{body_classes}\"");
        if let Some(inner_radius) = body.inner_radius {
            let _ = write!(body_attrs, " data-inner-radius=\"{inner_radius}\"");
        }
        if let Some(outer_radius) = body.outer_radius {
            let _ = write!(body_attrs, " data-outer-radius=\"{outer_radius}\"");
        }
        if let Some(padding_angle) = body.padding_angle {
            let _ = write!(body_attrs, " data-padding-angle=\"{padding_angle}\"");
        }
        if let Some([min, max]) = body.y_domain {
            let _ = write!(body_attrs, " data-y-domain=\"{min} {max}\"");
        }
        if let Some([min, max]) = body.y2_domain {
            let _ = write!(body_attrs, " data-y2-domain=\"{min} {max}\"");
        }
        let _ = writeln!(out, "<div {body_attrs}>");

        if body.show_grid {
            match &body.grid_dash_pattern {
                Some(dash) => {
                    let _ = writeln!(
                        out,
                        "<div class=\"chart-grid\" data-dash=\"{}\"></div>",
                        escape_text(dash)
                    );
                }
                None => out.push_str("<div class=\"chart-grid\"></div>\n"),
            }
        }
        if body.show_x_axis {
            out.push_str("<div class=\"chart-axis chart-axis--x\"></div>\n");
        }
        if body.show_y_axis {
            out.push_str("<div class=\"chart-axis chart-axis--y\"></div>\n");
        }

        for shape in body.shapes.iter().filter(|shape| shape.gradient) {
            out.push_str(&self.emit_gradient(frame, shape));
        }
        for shape in &body.shapes {
            out.push_str(&self.emit_shape(frame, body, shape));
        }

        out.push_str("</div>\n");
        out
    }

    fn emit_gradient(&self, frame: &ContainerFrame, shape: &SeriesShape) -> String {
        let ctx = frame.context();
        let paint = ctx.paint_for(&shape.key);
        format!(
            "<div class=\"chart-gradient\" id=\"{}-{}-gradient\" style=\"--gradient-from: {paint}; --gradient-to: transparent;\"></div>\n",
            escape_text(frame.chart_id()),
            escape_key(&shape.key)
        )
    }

    fn emit_shape(&self, frame: &ContainerFrame, body: &ChartBody, shape: &SeriesShape) -> String {
        let ctx = frame.context();
        let mut out = String::new();
        let kind_class = match shape.kind {
            ShapeKind::Area => "area",
            ShapeKind::Bar => "bar",
            ShapeKind::Line => "line",
            ShapeKind::Slice => "slice",
            ShapeKind::Radar => "radar",
            ShapeKind::Scatter => "scatter",
        };

        let paint = if let Some(fill) = &shape.fill_override {
            escape_text(fill)
        } else if shape.gradient {
            format!(
                "url(#{}-{}-gradient)",
                escape_text(frame.chart_id()),
                escape_key(&shape.key)
            )
        } else {
            ctx.paint_for(&shape.key)
        };

        let mut style = format!("--series-paint: {paint};");
        if let Some(stroke_width) = shape.stroke_width {
            let _ = write!(style, " --series-stroke-width: {stroke_width}px;");
        }
        if let Some(dash) = &shape.dash_pattern {
            let _ = write!(style, " --series-dash: {};", escape_text(dash));
        }
        if let Some(fill_opacity) = shape.fill_opacity {
            let _ = write!(style, " --series-fill-opacity: {fill_opacity};");
        }
        if let Some(corner_radius) = shape.corner_radius {
            let _ = write!(style, " --series-corner-radius: {corner_radius}px;");
        }
        if let Some(point_radius) = shape.point_radius {
            let _ = write!(style, " --series-point-radius: {point_radius}px;");
        }

        let mut attrs = format!(
            "class=\"chart-series chart-series--{kind_class}\" data-series=\"{}\" style=\"{style}\"",
            escape_text(&shape.key)
        );
        if let Some(stack_id) = &shape.stack_id {
            let _ = write!(attrs, " data-stack=\"{}\"", escape_text(stack_id));
        }
        if shape.curve == CurveKind::Monotone {
            attrs.push_str(" data-curve=\"monotone\"");
        }
        if shape.show_dots {
            attrs.push_str(" data-dots=\"\"");
        }
        if let Some(size_key) = &shape.size_key {
            let _ = write!(attrs, " data-size-key=\"{}\"", escape_text(size_key));
        }
        if shape.secondary_axis {
            attrs.push_str(" data-axis=\"secondary\"");
        }
        if let Some(point_shape) = shape.point_shape {
            let glyph = match point_shape {
                PointShape::Circle => "circle",
                PointShape::Star => "star",
                PointShape::Triangle => "triangle",
                PointShape::Square => "square",
            };
            let _ = write!(attrs, " data-point-shape=\"{glyph}\"");
        }

        let _ = writeln!(out, "<div {attrs}>");
        for row in &body.rows {
            if let Some(value) = row.values.get(&shape.key) {
                let text = if body.show_mark_labels {
                    escape_text(&row.category)
                } else {
                    String::new()
                };
                let _ = writeln!(
                    out,
                    "<span class=\"chart-mark\" data-category=\"{}\" data-value=\"{value}\">{text}</span>",
                    escape_text(&row.category)
                );
            }
        }
        out.push_str("</div>\n");
        out
    }

    fn emit_legend(&self, frame: &ContainerFrame) -> String {
        let mut out = String::from("<ul class=\"chart-legend\">\n");
        for entry in frame.legend_entries() {
            let _ = writeln!(
                out,
                "<li class=\"chart-legend-item\" data-series=\"{}\"><span class=\"chart-legend-swatch\" style=\"background: var({});\"></span>{}</li>",
                escape_text(&entry.series_key),
                entry.css_var,
                escape_text(&entry.label)
            );
        }
        out.push_str("</ul>\n");
        out
    }
}

impl SurfaceRenderer for HtmlRenderer {
    fn render(&mut self, frame: &ContainerFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_markup = self.emit_container(frame);
        Ok(())
    }
}
