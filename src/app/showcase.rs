use std::fmt::Write as _;

use crate::catalog::StoryCatalog;
use crate::core::ThemeMode;
use crate::error::ChartResult;
use crate::render::{HtmlRenderer, SurfaceRenderer, escape_text};

use super::page_shell;

/// Renders the showcase page: every catalog story as a card in one grid.
pub fn render(catalog: &StoryCatalog, mode: ThemeMode) -> ChartResult<String> {
    let mut renderer = HtmlRenderer::new();
    let mut content = String::from("<main class=\"showcase\">\n<h1>Chart Showcase</h1>\n");
    content.push_str("<div class=\"showcase-grid\">\n");

    for story in catalog.iter() {
        let frame = story.container().render_frame(&story.body, mode);
        renderer.render(&frame)?;
        let _ = writeln!(
            content,
            "<section class=\"showcase-card\">\n<h2>{}</h2>",
            escape_text(&story.title)
        );
        content.push_str(renderer.last_markup());
        content.push_str("</section>\n");
    }

    content.push_str("</div>\n</main>\n");
    Ok(page_shell("Chart Showcase", &content, mode))
}
