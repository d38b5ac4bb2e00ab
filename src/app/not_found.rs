use crate::core::ThemeMode;

use super::page_shell;

/// Renders the fallback page for unmatched routes.
#[must_use]
pub fn render(mode: ThemeMode) -> String {
    let content = "<main class=\"not-found\">\n<h1>404</h1>\n<p>This page does not exist.</p>\n</main>\n";
    page_shell("Not Found", content, mode)
}
