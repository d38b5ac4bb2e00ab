//! Routed demo application: a showcase page and a storybook page rendered
//! to static HTML around the story catalog.

pub mod not_found;
pub mod router;
pub mod showcase;
pub mod storybook;

use std::fmt::Write as _;

use crate::core::{ThemeMode, root_palette_css};
use crate::render::escape_text;

pub use router::{Page, Router};

/// Wraps page content in the shared document shell.
///
/// The shell carries the root palette tokens so configs written against the
/// stock `--chart-N` tokens resolve in either theme mode.
#[must_use]
pub fn page_shell(title: &str, content: &str, mode: ThemeMode) -> String {
    let body_class = match mode {
        ThemeMode::Light => "",
        ThemeMode::Dark => " class=\"dark\"",
    };
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_text(title));
    let _ = writeln!(out, "<style>\n{}</style>", root_palette_css());
    out.push_str("</head>\n");
    let _ = writeln!(out, "<body{body_class}>");
    out.push_str(content);
    out.push_str("</body>\n</html>\n");
    out
}
