use crate::api::ContainerFrame;
use crate::error::ChartResult;

use super::SurfaceRenderer;

/// No-op surface used by tests and headless rendering.
///
/// It still validates frame content so tests can catch malformed bodies
/// before a real surface is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_shape_count: usize,
    pub last_scope_len: usize,
}

impl SurfaceRenderer for NullRenderer {
    fn render(&mut self, frame: &ContainerFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_shape_count = frame.body().shapes.len();
        self.last_scope_len = frame.scope().len();
        Ok(())
    }
}
