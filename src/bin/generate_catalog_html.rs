use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use chartbook::app::{not_found, showcase, storybook};
use chartbook::catalog::default_catalog;
use chartbook::core::ThemeMode;
use chartbook::error::{ChartError, ChartResult};

const DEFAULT_OUTPUT_ROOT: &str = "target/catalog_html";

fn write_page(path: &Path, content: &str) -> ChartResult<()> {
    fs::write(path, content).map_err(|source| ChartError::ArtifactOutput {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote page");
    Ok(())
}

fn main() -> ChartResult<()> {
    let _ = chartbook::telemetry::init_default_tracing();

    let output_root = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_owned()),
    );
    fs::create_dir_all(&output_root).map_err(|source| ChartError::ArtifactOutput {
        path: output_root.display().to_string(),
        source,
    })?;

    let catalog = default_catalog()?;
    info!(stories = catalog.len(), "building catalog pages");

    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let suffix = match mode {
            ThemeMode::Light => "",
            ThemeMode::Dark => "-dark",
        };
        write_page(
            &output_root.join(format!("index{suffix}.html")),
            &showcase::render(&catalog, mode)?,
        )?;
        write_page(
            &output_root.join(format!("storybook{suffix}.html")),
            &storybook::render(&catalog, mode)?,
        )?;
        write_page(
            &output_root.join(format!("404{suffix}.html")),
            &not_found::render(mode),
        )?;
    }

    Ok(())
}
