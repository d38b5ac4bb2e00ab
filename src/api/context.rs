use crate::core::{ChartConfig, StyleScope, ThemeMode};

/// Read-only ambient state for one render pass.
///
/// Descendant renderers (tooltip, legend, chart body) resolve series keys
/// through this context instead of receiving copies of the scope. It borrows
/// from the frame that produced it and never outlives the render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a ChartConfig,
    scope: &'a StyleScope,
    mode: ThemeMode,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(config: &'a ChartConfig, scope: &'a StyleScope, mode: ThemeMode) -> Self {
        Self {
            config,
            scope,
            mode,
        }
    }

    #[must_use]
    pub fn config(&self) -> &'a ChartConfig {
        self.config
    }

    #[must_use]
    pub fn scope(&self) -> &'a StyleScope {
        self.scope
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Display label for a series key; unknown keys pass through unchanged.
    #[must_use]
    pub fn label_for<'k>(&'k self, key: &'k str) -> &'k str {
        self.config.label_for(key)
    }

    /// Resolved literal color for a series key under the active theme mode.
    #[must_use]
    pub fn color_for(&self, key: &str) -> &str {
        self.config.color_for(key, self.mode)
    }

    /// Paint value for fill/stroke attributes.
    ///
    /// Keys in scope are indirected through their CSS variable so the
    /// rendering surface picks colors up from the ambient style block; keys
    /// outside the config degrade to the literal fallback color.
    #[must_use]
    pub fn paint_for(&self, key: &str) -> String {
        match self.scope.var_for(key) {
            Some(var) => format!("var({var})"),
            None => self.color_for(key).to_owned(),
        }
    }
}
