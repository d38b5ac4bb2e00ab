use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::palette::fallback_color;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Theme mode selecting which color variant a scope entry emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Per-mode color pair for series that change color with the active theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: String,
    pub dark: String,
}

/// Display style for one data series: a human label plus its color source.
///
/// An explicit `color` wins over `theme`. When both are absent the series
/// still resolves through the fallback palette, so an under-specified entry
/// never fails a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeColors>,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: Some(color.into()),
            theme: None,
        }
    }

    /// Series whose color differs between light and dark mode.
    #[must_use]
    pub fn themed(
        label: impl Into<String>,
        light: impl Into<String>,
        dark: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            color: None,
            theme: Some(ThemeColors {
                light: light.into(),
                dark: dark.into(),
            }),
        }
    }

    /// Series with a label only; color comes from the fallback palette.
    #[must_use]
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
            theme: None,
        }
    }

    #[must_use]
    pub fn color_for_mode(&self, mode: ThemeMode) -> Option<&str> {
        if let Some(color) = &self.color {
            return Some(color);
        }
        self.theme.as_ref().map(|theme| match mode {
            ThemeMode::Light => theme.light.as_str(),
            ThemeMode::Dark => theme.dark.as_str(),
        })
    }
}

/// Declarative mapping from series key to display style.
///
/// Insertion order is the default legend and series ordering, so the map is
/// backed by `IndexMap`. The config is owned by the calling story or page
/// and is never mutated by the presentation wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartConfig {
    series: IndexMap<String, SeriesStyle>,
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series entry, keeping insertion order.
    ///
    /// Re-inserting an existing key replaces its style in place without
    /// changing the key's position.
    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, style: SeriesStyle) -> Self {
        self.series.insert(key.into(), style);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, style: SeriesStyle) {
        self.series.insert(key.into(), style);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SeriesStyle> {
        self.series.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesStyle)> {
        self.series.iter().map(|(key, style)| (key.as_str(), style))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Resolves the display label for a series key.
    ///
    /// Keys without a config entry fall back to the raw key unchanged.
    #[must_use]
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.series
            .get(key)
            .map_or(key, |style| style.label.as_str())
    }

    /// Resolves the color for a series key under the given theme mode.
    ///
    /// Keys without a configured color fall back to a palette slot derived
    /// from the key itself, so repeated lookups are stable.
    #[must_use]
    pub fn color_for(&self, key: &str, mode: ThemeMode) -> &str {
        self.series
            .get(key)
            .and_then(|style| style.color_for_mode(mode))
            .unwrap_or_else(|| fallback_color(key, mode))
    }

    /// Serializes the config to the versioned JSON contract.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Deserializes a config from either the bare map shape or the versioned
    /// contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}
