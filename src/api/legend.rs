use serde::{Deserialize, Serialize};

use super::context::RenderContext;

/// Per-series legend view model for the current render pass.
///
/// Legend rows always cover the full config, in insertion order, so the
/// legend stays stable regardless of hover state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series_key: String,
    pub label: String,
    pub color: String,
    /// Scope variable backing the swatch, e.g. `--color-desktop`.
    pub css_var: String,
}

/// Builds legend rows in config insertion order.
pub(crate) fn resolve_legend(ctx: &RenderContext<'_>) -> Vec<LegendEntry> {
    ctx.scope()
        .entries()
        .iter()
        .map(|entry| LegendEntry {
            series_key: entry.series_key.clone(),
            label: ctx.label_for(&entry.series_key).to_owned(),
            color: entry.color(ctx.mode()).to_owned(),
            css_var: entry.css_var.clone(),
        })
        .collect()
}
