use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::body::ChartBody;
use crate::core::{ChartConfig, StyleScope, ThemeMode};
use crate::error::{ChartError, ChartResult};

use super::context::RenderContext;
use super::legend::{LegendEntry, resolve_legend};
use super::tooltip::{ActivePayloadEntry, TooltipEntry, resolve_tooltip};

/// Themable wrapper around an arbitrary chart body.
///
/// The container owns the `ChartConfig` for one chart instance and produces
/// a fully materialized [`ContainerFrame`] per render pass. It keeps no
/// other state: each pass is a pure function of `(config, body, mode)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContainer {
    config: ChartConfig,
    chart_id: String,
    class_name: Option<String>,
}

impl ChartContainer {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            chart_id: "chart".to_owned(),
            class_name: None,
        }
    }

    /// Sets the id used in the container's `data-chart` selector.
    ///
    /// Ids are caller-chosen rather than generated so repeated renders of
    /// the same container stay byte-identical.
    #[must_use]
    pub fn with_chart_id(mut self, chart_id: impl Into<String>) -> Self {
        self.chart_id = chart_id.into();
        self
    }

    /// Sets an opaque presentation hint forwarded to the rendered container.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn chart_id(&self) -> &str {
        &self.chart_id
    }

    /// Runs one render pass: resolves the style scope and binds it to the
    /// body in a frame the rendering surface can consume.
    #[must_use]
    pub fn render_frame(&self, body: &ChartBody, mode: ThemeMode) -> ContainerFrame {
        let scope = StyleScope::resolve(&self.config);
        debug!(
            chart_id = %self.chart_id,
            series = self.config.len(),
            shapes = body.shapes.len(),
            "resolved container frame"
        );
        ContainerFrame {
            chart_id: self.chart_id.clone(),
            class_name: self.class_name.clone(),
            config: self.config.clone(),
            scope,
            body: body.clone(),
            mode,
        }
    }
}

/// Materialized output of one container render pass.
///
/// Everything a rendering surface needs is resolved up front; the frame is
/// read-only and lives only for the pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerFrame {
    chart_id: String,
    class_name: Option<String>,
    config: ChartConfig,
    scope: StyleScope,
    body: ChartBody,
    mode: ThemeMode,
}

impl ContainerFrame {
    #[must_use]
    pub fn chart_id(&self) -> &str {
        &self.chart_id
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub fn scope(&self) -> &StyleScope {
        &self.scope
    }

    #[must_use]
    pub fn body(&self) -> &ChartBody {
        &self.body
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Ambient read-only context handed to descendant renderers.
    #[must_use]
    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.config, &self.scope, self.mode)
    }

    /// CSS selector scoping this frame's custom properties.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("[data-chart=\"{}\"]", self.chart_id)
    }

    /// Scoped custom-property block for this frame.
    #[must_use]
    pub fn style_block(&self) -> String {
        self.scope.css_block(&self.selector())
    }

    /// Tooltip rows for the given active payload, in payload order.
    #[must_use]
    pub fn tooltip_entries(
        &self,
        payload: &[ActivePayloadEntry],
    ) -> SmallVec<[TooltipEntry; 4]> {
        trace!(
            chart_id = %self.chart_id,
            payload_len = payload.len(),
            "building tooltip entries"
        );
        resolve_tooltip(&self.context(), payload)
    }

    /// Legend rows in config insertion order, independent of hover state.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        resolve_legend(&self.context())
    }

    /// Structural sanity checks run by renderers before emitting output.
    pub fn validate(&self) -> ChartResult<()> {
        if self.chart_id.is_empty() {
            return Err(ChartError::InvalidFrame("empty chart id".to_owned()));
        }
        for shape in &self.body.shapes {
            if shape.key.is_empty() {
                return Err(ChartError::InvalidFrame(
                    "series shape with empty key".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
