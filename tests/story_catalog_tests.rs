use chartbook::ChartError;
use chartbook::body::{ChartBody, ChartKind};
use chartbook::catalog::{Story, StoryCatalog, default_catalog};
use chartbook::core::{ChartConfig, SeriesStyle};

fn story(id: &str) -> Story {
    Story::new(
        id,
        "Demo",
        "Demo story",
        ChartConfig::new().with_series("desktop", SeriesStyle::label_only("Desktop")),
        ChartBody::new(ChartKind::Line),
    )
}

#[test]
fn registration_preserves_order() {
    let mut catalog = StoryCatalog::new();
    catalog.register(story("b")).expect("register b");
    catalog.register(story("a")).expect("register a");
    catalog.register(story("c")).expect("register c");

    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn duplicate_story_id_is_rejected() {
    let mut catalog = StoryCatalog::new();
    catalog.register(story("dup")).expect("first register");

    let err = catalog.register(story("dup")).expect_err("must reject");
    assert!(matches!(err, ChartError::DuplicateStory(id) if id == "dup"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn default_catalog_covers_every_chart_kind() {
    let catalog = default_catalog().expect("default catalog");

    for kind in [
        ChartKind::Area,
        ChartKind::Bar,
        ChartKind::Composed,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Radar,
        ChartKind::Scatter,
    ] {
        let count = catalog
            .iter()
            .filter(|story| story.body.kind == kind)
            .count();
        assert_eq!(count, 6, "expected six variants for {kind:?}");
    }
    assert_eq!(catalog.len(), 42);
}

#[test]
fn default_catalog_story_ids_match_container_ids() {
    let catalog = default_catalog().expect("default catalog");

    for story in catalog.iter() {
        assert_eq!(story.container().chart_id(), story.id);
    }
}

#[test]
fn default_catalog_shapes_reference_configured_keys() {
    let catalog = default_catalog().expect("default catalog");

    for story in catalog.iter() {
        for key in story.body.series_keys() {
            assert!(
                story.config.get(key).is_some(),
                "story {} draws unconfigured key {key}",
                story.id
            );
        }
    }
}

#[test]
fn lookup_by_id_returns_registered_story() {
    let catalog = default_catalog().expect("default catalog");

    let story = catalog.get("pie-donut").expect("pie-donut registered");
    assert_eq!(story.body.kind, ChartKind::Pie);
    assert_eq!(story.body.inner_radius, Some(80.0));
    assert!(catalog.get("pie-missing").is_none());
}
