//! Declarative description of the wrapped chart shape.
//!
//! A `ChartBody` is the stand-in for the external charting surface's render
//! tree: it names which series are drawn and how, but owns no geometry. All
//! colors are indirected through the style scope by series key, so a body is
//! reusable across configs and theme modes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level chart family a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Area,
    Bar,
    Composed,
    Line,
    Pie,
    Radar,
    Scatter,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Composed => "composed",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
        }
    }
}

/// Mark type drawn for one series; composed charts mix these freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Area,
    Bar,
    Line,
    Slice,
    Radar,
    Scatter,
}

/// Interpolation hint forwarded to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    #[default]
    Linear,
    Monotone,
}

/// Point glyph used by scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointShape {
    #[default]
    Circle,
    Star,
    Triangle,
    Square,
}

/// One drawn series inside a body.
///
/// `key` is the series key the surface resolves through the style scope;
/// everything else is a presentation hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesShape {
    pub key: String,
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default)]
    pub curve: CurveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Dash pattern for the series stroke, e.g. `"5 5"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<String>,
    #[serde(default)]
    pub show_dots: bool,
    /// Fill through a generated linear gradient instead of the flat color.
    #[serde(default)]
    pub gradient: bool,
    /// Corner radius for bar marks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_shape: Option<PointShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    /// Data field whose value sizes each mark (bubble-style scatter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_key: Option<String>,
    /// Literal paint overriding scope resolution, e.g. a per-cell fill
    /// or `"none"` for stroke-only marks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_override: Option<String>,
    /// Binds the series to the secondary value axis.
    #[serde(default)]
    pub secondary_axis: bool,
}

impl SeriesShape {
    #[must_use]
    pub fn new(key: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            key: key.into(),
            kind,
            stack_id: None,
            curve: CurveKind::default(),
            stroke_width: None,
            dash_pattern: None,
            show_dots: false,
            gradient: false,
            corner_radius: None,
            fill_opacity: None,
            point_shape: None,
            point_radius: None,
            size_key: None,
            fill_override: None,
            secondary_axis: false,
        }
    }

    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_dash_pattern(mut self, dash_pattern: impl Into<String>) -> Self {
        self.dash_pattern = Some(dash_pattern.into());
        self
    }

    #[must_use]
    pub fn with_dots(mut self) -> Self {
        self.show_dots = true;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self) -> Self {
        self.gradient = true;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = Some(corner_radius);
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }

    #[must_use]
    pub fn with_point_shape(mut self, point_shape: PointShape) -> Self {
        self.point_shape = Some(point_shape);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = Some(point_radius);
        self
    }

    #[must_use]
    pub fn with_size_key(mut self, size_key: impl Into<String>) -> Self {
        self.size_key = Some(size_key.into());
        self
    }

    #[must_use]
    pub fn with_fill_override(mut self, fill_override: impl Into<String>) -> Self {
        self.fill_override = Some(fill_override.into());
        self
    }

    #[must_use]
    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }
}

/// One fixture row: a category label plus the values per series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub category: String,
    pub values: IndexMap<String, f64>,
}

impl DataRow {
    #[must_use]
    pub fn new(category: impl Into<String>, values: &[(&str, f64)]) -> Self {
        Self {
            category: category.into(),
            values: values
                .iter()
                .map(|(key, value)| ((*key).to_owned(), *value))
                .collect(),
        }
    }
}

/// Declarative chart body handed to the presentation wrapper as `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBody {
    pub kind: ChartKind,
    pub shapes: Vec<SeriesShape>,
    #[serde(default)]
    pub rows: Vec<DataRow>,
    #[serde(default)]
    pub show_grid: bool,
    /// Dash pattern for grid lines, e.g. `"3 3"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_dash_pattern: Option<String>,
    #[serde(default)]
    pub show_x_axis: bool,
    #[serde(default)]
    pub show_y_axis: bool,
    /// Swapped category/value orientation for horizontal bar layouts.
    #[serde(default)]
    pub horizontal: bool,
    /// Inner radius ratio for donut pies / radar start radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    /// Angular gap between pie slices, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_angle: Option<f64>,
    /// Fixed primary value-axis domain; autoscaled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_domain: Option<[f64; 2]>,
    /// Fixed secondary value-axis domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2_domain: Option<[f64; 2]>,
    #[serde(default)]
    pub show_mark_labels: bool,
    #[serde(default)]
    pub show_tooltip: bool,
    #[serde(default)]
    pub show_legend: bool,
}

impl ChartBody {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            shapes: Vec::new(),
            rows: Vec::new(),
            show_grid: false,
            grid_dash_pattern: None,
            show_x_axis: false,
            show_y_axis: false,
            horizontal: false,
            inner_radius: None,
            outer_radius: None,
            padding_angle: None,
            y_domain: None,
            y2_domain: None,
            show_mark_labels: false,
            show_tooltip: false,
            show_legend: false,
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: SeriesShape) -> Self {
        self.shapes.push(shape);
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<DataRow>) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, dash_pattern: Option<&str>) -> Self {
        self.show_grid = true;
        self.grid_dash_pattern = dash_pattern.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_axes(mut self) -> Self {
        self.show_x_axis = true;
        self.show_y_axis = true;
        self
    }

    #[must_use]
    pub fn with_horizontal_layout(mut self) -> Self {
        self.horizontal = true;
        self
    }

    #[must_use]
    pub fn with_radii(mut self, inner_radius: Option<f64>, outer_radius: Option<f64>) -> Self {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self
    }

    #[must_use]
    pub fn with_padding_angle(mut self, padding_angle: f64) -> Self {
        self.padding_angle = Some(padding_angle);
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, min: f64, max: f64) -> Self {
        self.y_domain = Some([min, max]);
        self
    }

    #[must_use]
    pub fn with_y2_domain(mut self, min: f64, max: f64) -> Self {
        self.y2_domain = Some([min, max]);
        self
    }

    #[must_use]
    pub fn with_mark_labels(mut self) -> Self {
        self.show_mark_labels = true;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self) -> Self {
        self.show_tooltip = true;
        self
    }

    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Series keys drawn by this body, in shape order.
    pub fn series_keys(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|shape| shape.key.as_str())
    }
}
