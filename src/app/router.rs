/// Route targets for the demo application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Showcase,
    Storybook,
    NotFound,
}

/// Minimal path router for the demo pages.
///
/// The base path is stripped before matching so the app can be served from a
/// subdirectory; a trailing slash on the base is normalized away because
/// matching expects clean paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base: String,
}

impl Router {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolves a request path to a page.
    ///
    /// Paths outside the base resolve to `NotFound`. `/` and `/showcase`
    /// both mount the showcase.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Page {
        let Some(rest) = path.strip_prefix(self.base.as_str()) else {
            return Page::NotFound;
        };
        match rest.trim_end_matches('/') {
            "" | "/showcase" => Page::Showcase,
            "/storybook" => Page::Storybook,
            _ => Page::NotFound,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("")
    }
}
