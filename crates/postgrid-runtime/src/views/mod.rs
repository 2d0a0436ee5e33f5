//! View controllers.
//!
//! Each view looks up its container in the page document. When the page does
//! not declare it the view does nothing, not even fetch. Otherwise it fetches
//! the catalog, narrows it and replaces the container content wholesale, so
//! running a view twice leaves the same page as running it once.

mod article;
mod category;
mod grid;
mod related;
mod search;

pub use article::render_article;
pub use category::render_category;
pub use grid::render_grid;
pub use related::render_related;
pub use search::render_search;

use crate::config::SiteConfig;
use crate::document::Container;
use crate::source::PostSource;
use postgrid_engine::{EmptyState, Renderer, empty_state};
use postgrid_types::{Markup, Post};
use serde::Serialize;
use std::fmt;

/// Everything a view needs besides the page itself
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub source: &'a dyn PostSource,
    pub renderer: &'a Renderer,
    pub config: &'a SiteConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewOutcome {
    /// The page has no container for this view
    Skipped,
    /// An empty state was rendered
    Empty,
    Rendered { count: usize },
    NotFound,
    /// Nothing to show; the container was hidden
    Hidden,
    /// A newer request superseded this one; the page was left untouched
    Stale,
}

impl fmt::Display for ViewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewOutcome::Skipped => write!(f, "skipped"),
            ViewOutcome::Empty => write!(f, "empty"),
            ViewOutcome::Rendered { count } => write!(f, "rendered ({})", count),
            ViewOutcome::NotFound => write!(f, "not found"),
            ViewOutcome::Hidden => write!(f, "hidden"),
            ViewOutcome::Stale => write!(f, "stale"),
        }
    }
}

/// Fill `container` with one card per post, or `empty` when there are none
fn fill_cards(
    container: &mut Container,
    renderer: &Renderer,
    posts: &[&Post],
    empty: EmptyState<'_>,
) -> ViewOutcome {
    if posts.is_empty() {
        container.replace(empty_state(empty));
        return ViewOutcome::Empty;
    }

    let cards: Markup = posts
        .iter()
        .enumerate()
        .map(|(index, post)| renderer.card(post, index))
        .collect();
    container.replace(cards);
    ViewOutcome::Rendered { count: posts.len() }
}

fn skipped(view: &'static str, container: &str) -> ViewOutcome {
    tracing::debug!(view, container, "container not on page, skipping");
    ViewOutcome::Skipped
}

fn finish(view: &'static str, outcome: ViewOutcome) -> ViewOutcome {
    tracing::debug!(view, %outcome, "view finished");
    outcome
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::SiteConfig;
    use crate::document::{Document, Metadata};
    use postgrid_types::Post;

    pub fn post(id: &str, category: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {}", id),
            summary: format!("Summary of {}", id),
            content: Some("<p>body</p>".to_string()),
            image: format!("/img/{}.jpg", id),
            category: category.to_string(),
            subcategory: None,
            date: "2025-01-05".to_string(),
            read_time: None,
            author: None,
        }
    }

    pub fn catalog() -> Vec<Post> {
        vec![
            post("ssd", "Hardware"),
            post("android", "Mobile"),
            post("gpu", "hardware"),
            post("shell", "Software"),
            post("ram", "Hardware"),
            post("pixel", "Mobile"),
        ]
    }

    pub fn full_page(config: &SiteConfig, location: &str) -> Document {
        let mut doc = Document::new(
            location,
            Metadata {
                title: config.site_name.clone(),
                description: Some("Tech articles".to_string()),
            },
        );
        for id in config.containers.all() {
            doc = doc.with_container(id);
        }
        doc
    }
}
