//! Declarative story catalog exhibiting the chart container's variants.
//!
//! Each story pairs a `ChartConfig` with a chart body and the presentation
//! hints the demo pages need. Stories are fixture data only; nothing here
//! computes geometry.

pub mod area;
pub mod bar;
pub mod composed;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scatter;

use indexmap::IndexMap;

use crate::api::ChartContainer;
use crate::body::ChartBody;
use crate::core::ChartConfig;
use crate::error::{ChartError, ChartResult};

/// One catalog entry: a chart configuration variant with its description.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub config: ChartConfig,
    pub body: ChartBody,
    pub class_name: Option<String>,
}

impl Story {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        config: ChartConfig,
        body: ChartBody,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            config,
            body,
            class_name: None,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Builds the presentation container for this story.
    #[must_use]
    pub fn container(&self) -> ChartContainer {
        let container = ChartContainer::new(self.config.clone()).with_chart_id(self.id.as_str());
        match &self.class_name {
            Some(class_name) => container.with_class_name(class_name.as_str()),
            None => container,
        }
    }
}

/// Insertion-ordered story registry keyed by story id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryCatalog {
    stories: IndexMap<String, Story>,
}

impl StoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a story; ids must be unique across the catalog.
    pub fn register(&mut self, story: Story) -> ChartResult<()> {
        if self.stories.contains_key(&story.id) {
            return Err(ChartError::DuplicateStory(story.id));
        }
        self.stories.insert(story.id.clone(), story);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Story> {
        self.stories.get(id)
    }

    /// Stories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Story> {
        self.stories.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.stories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

/// Builds the full catalog: every chart kind's variants in a fixed order.
pub fn default_catalog() -> ChartResult<StoryCatalog> {
    let mut catalog = StoryCatalog::new();
    for story in area::stories()
        .into_iter()
        .chain(bar::stories())
        .chain(composed::stories())
        .chain(line::stories())
        .chain(pie::stories())
        .chain(radar::stories())
        .chain(scatter::stories())
    {
        catalog.register(story)?;
    }
    Ok(catalog)
}
