pub mod config;
pub mod palette;
pub mod scope;

pub use config::{ChartConfig, SeriesStyle, ThemeColors, ThemeMode};
pub use palette::{fallback_color, root_palette_css};
pub use scope::{ScopeEntry, StyleScope, escape_key};
