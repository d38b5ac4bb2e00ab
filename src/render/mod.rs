mod html;
mod null_renderer;

pub use html::{HtmlRenderer, escape_text};
pub use null_renderer::NullRenderer;

use crate::api::ContainerFrame;
use crate::error::ChartResult;

/// Contract implemented by any rendering surface.
///
/// Surfaces receive a fully materialized, deterministic `ContainerFrame` so
/// markup emission stays isolated from theming and view-model logic.
pub trait SurfaceRenderer {
    fn render(&mut self, frame: &ContainerFrame) -> ChartResult<()>;
}
