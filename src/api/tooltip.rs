use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::context::RenderContext;

/// One entry of the active payload supplied by the rendering surface.
///
/// The surface reports which series sit under the pointer, in its own order;
/// an optional per-entry color carries surface-side fills (pie slices pass
/// one per cell) that take precedence over config resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePayloadEntry {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ActivePayloadEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            color: None,
        }
    }

    #[must_use]
    pub fn without_value(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Swatch shape drawn next to each tooltip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[default]
    Dot,
    Line,
    Dashed,
}

/// Presentation options for tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipBehavior {
    pub indicator: IndicatorKind,
    pub hide_label: bool,
    pub hide_indicator: bool,
}

impl TooltipBehavior {
    #[must_use]
    pub fn with_indicator(mut self, indicator: IndicatorKind) -> Self {
        self.indicator = indicator;
        self
    }

    #[must_use]
    pub fn with_hide_label(mut self, hide_label: bool) -> Self {
        self.hide_label = hide_label;
        self
    }

    #[must_use]
    pub fn with_hide_indicator(mut self, hide_indicator: bool) -> Self {
        self.hide_indicator = hide_indicator;
        self
    }
}

/// Per-row tooltip view model for the current render pass.
///
/// Created from the active payload on each interaction event and discarded
/// with the pass; it owns resolved strings so it has no borrow into the
/// frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub series_key: String,
    pub label: String,
    pub color: String,
    pub value: Option<f64>,
}

/// Builds tooltip rows from the active payload, preserving payload order.
///
/// Entries for keys absent from the config degrade to identity labels and
/// palette colors; this never fails.
pub(crate) fn resolve_tooltip(
    ctx: &RenderContext<'_>,
    payload: &[ActivePayloadEntry],
) -> SmallVec<[TooltipEntry; 4]> {
    payload
        .iter()
        .map(|entry| TooltipEntry {
            series_key: entry.key.clone(),
            label: ctx.label_for(&entry.key).to_owned(),
            color: entry
                .color
                .clone()
                .unwrap_or_else(|| ctx.color_for(&entry.key).to_owned()),
            value: entry.value,
        })
        .collect()
}
