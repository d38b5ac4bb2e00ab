use indexmap::IndexMap;

use super::config::{ChartConfig, ThemeMode};

/// Escapes a series key into the identifier used for its CSS variable.
///
/// Every character outside `[A-Za-z0-9]` maps to `_`. The rule is a pure
/// character substitution; collisions between distinct keys are broken at
/// scope-resolution time, not here.
#[must_use]
pub fn escape_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// One resolved scope slot: a series key bound to its generated CSS variable
/// and per-mode colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    pub series_key: String,
    /// Generated variable name, including the `--color-` prefix.
    pub css_var: String,
    pub light_color: String,
    pub dark_color: String,
}

impl ScopeEntry {
    #[must_use]
    pub fn color(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.light_color,
            ThemeMode::Dark => &self.dark_color,
        }
    }
}

/// The style scope derived from one `ChartConfig`.
///
/// Computed fresh on every render pass and read-only afterwards; it has no
/// identity beyond the render it belongs to. Entries keep config insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScope {
    entries: Vec<ScopeEntry>,
    by_key: IndexMap<String, usize>,
}

impl StyleScope {
    /// Resolves the scope for a config.
    ///
    /// One entry is emitted per config key, in insertion order. Distinct keys
    /// whose escaped forms collide (`"a.b"` and `"a-b"` both escape to `a_b`)
    /// are disambiguated by appending a numeric suffix to the later key in
    /// first-seen order: `a_b`, `a_b_2`, `a_b_3`, …. An empty config yields
    /// an empty scope. This operation never fails.
    #[must_use]
    pub fn resolve(config: &ChartConfig) -> Self {
        let mut entries = Vec::with_capacity(config.len());
        let mut by_key = IndexMap::with_capacity(config.len());
        let mut taken: IndexMap<String, u32> = IndexMap::new();

        for (key, _) in config.iter() {
            let base = escape_key(key);
            let name = if taken.contains_key(&base) {
                let mut suffix = taken[&base] + 1;
                let mut candidate = format!("{base}_{suffix}");
                while taken.contains_key(&candidate) {
                    suffix += 1;
                    candidate = format!("{base}_{suffix}");
                }
                taken.insert(base, suffix);
                taken.insert(candidate.clone(), 1);
                candidate
            } else {
                taken.insert(base.clone(), 1);
                base
            };

            by_key.insert(key.to_owned(), entries.len());
            entries.push(ScopeEntry {
                series_key: key.to_owned(),
                css_var: format!("--color-{name}"),
                light_color: config.color_for(key, ThemeMode::Light).to_owned(),
                dark_color: config.color_for(key, ThemeMode::Dark).to_owned(),
            });
        }

        Self { entries, by_key }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, series_key: &str) -> Option<&ScopeEntry> {
        self.by_key
            .get(series_key)
            .map(|&index| &self.entries[index])
    }

    /// Variable name for a series key, when the key is in scope.
    #[must_use]
    pub fn var_for(&self, series_key: &str) -> Option<&str> {
        self.get(series_key).map(|entry| entry.css_var.as_str())
    }

    /// Emits the scoped custom-property block for a container selector.
    ///
    /// One rule set is emitted per theme mode; the dark rule set is prefixed
    /// with the `.dark` ancestor selector. Output is deterministic for a
    /// given scope.
    #[must_use]
    pub fn css_block(&self, container_selector: &str) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str(container_selector);
        out.push_str(" {\n");
        for entry in &self.entries {
            out.push_str(&format!("  {}: {};\n", entry.css_var, entry.light_color));
        }
        out.push_str("}\n.dark ");
        out.push_str(container_selector);
        out.push_str(" {\n");
        for entry in &self.entries {
            out.push_str(&format!("  {}: {};\n", entry.css_var, entry.dark_color));
        }
        out.push_str("}\n");
        out
    }
}
