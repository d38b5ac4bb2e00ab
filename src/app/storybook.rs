use std::fmt::Write as _;

use crate::api::{ActivePayloadEntry, ContainerFrame, TooltipBehavior};
use crate::catalog::{Story, StoryCatalog};
use crate::core::ThemeMode;
use crate::error::ChartResult;
use crate::render::{HtmlRenderer, SurfaceRenderer, escape_text};

use super::page_shell;

/// Renders the storybook page: one documented section per story, including
/// a sample tooltip built from the story's first data row.
pub fn render(catalog: &StoryCatalog, mode: ThemeMode) -> ChartResult<String> {
    let mut renderer = HtmlRenderer::new();
    let mut content = String::from("<main class=\"storybook\">\n<h1>Storybook</h1>\n");

    for story in catalog.iter() {
        let frame = story.container().render_frame(&story.body, mode);
        renderer.render(&frame)?;
        let _ = writeln!(
            content,
            "<article class=\"story\" id=\"{}\">\n<h2>{}</h2>\n<p>{}</p>",
            escape_text(&story.id),
            escape_text(&story.title),
            escape_text(&story.description)
        );
        content.push_str(renderer.last_markup());
        content.push_str(&sample_tooltip(&renderer, story, &frame));
        content.push_str("</article>\n");
    }

    content.push_str("</main>\n");
    Ok(page_shell("Storybook", &content, mode))
}

/// Static tooltip preview: the rows the surface would show when hovering the
/// story's first category.
fn sample_tooltip(renderer: &HtmlRenderer, story: &Story, frame: &ContainerFrame) -> String {
    let Some(row) = story.body.rows.first() else {
        return String::new();
    };

    let mut seen = Vec::new();
    let payload: Vec<ActivePayloadEntry> = story
        .body
        .series_keys()
        .filter(|key| {
            if seen.contains(key) {
                false
            } else {
                seen.push(*key);
                true
            }
        })
        .filter_map(|key| {
            row.values
                .get(key)
                .map(|value| ActivePayloadEntry::new(key, *value))
        })
        .collect();
    renderer.tooltip_markup(
        frame,
        &payload,
        &TooltipBehavior::default(),
        Some(&row.category),
    )
}
