use super::{ViewContext, ViewOutcome, fill_cards, finish, skipped};
use crate::document::Document;
use postgrid_engine::{EmptyState, filter_by_category};

pub fn render_category(ctx: &ViewContext<'_>, doc: &mut Document, category: &str) -> ViewOutcome {
    let id = ctx.config.containers.category.as_str();
    let Some(container) = doc.container_mut(id) else {
        return skipped("category", id);
    };

    let posts = ctx.source.fetch_posts();
    let matching = filter_by_category(&posts, category);
    let outcome = fill_cards(
        container,
        ctx.renderer,
        &matching,
        EmptyState::NoCategoryArticles { category },
    );
    finish("category", outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::source::StaticSource;
    use crate::views::test_support::{catalog, full_page};
    use postgrid_engine::Renderer;

    fn run(category: &str, source: &StaticSource) -> (ViewOutcome, String) {
        let config = SiteConfig::default();
        let renderer = Renderer::default();
        let ctx = ViewContext {
            source,
            renderer: &renderer,
            config: &config,
        };
        let mut doc = full_page(&config, "/category");
        let outcome = render_category(&ctx, &mut doc, category);
        let html = doc
            .container("category-grid")
            .unwrap()
            .content
            .as_str()
            .to_string();
        (outcome, html)
    }

    #[test]
    fn test_category_match_ignores_case_and_keeps_order() {
        let (outcome, html) = run("HARDWARE", &StaticSource::new(catalog()));
        assert_eq!(outcome, ViewOutcome::Rendered { count: 3 });

        let positions: Vec<usize> = ["ssd", "gpu", "ram"]
            .iter()
            .map(|id| html.find(&format!("/article?id={}\"", id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains("/article?id=android\""));
    }

    #[test]
    fn test_unknown_category_renders_empty_state() {
        let (outcome, html) = run("Gaming", &StaticSource::new(catalog()));
        assert_eq!(outcome, ViewOutcome::Empty);
        assert!(html.contains("No articles in this category yet"));
        assert!(html.contains("Check back soon for new Gaming content!"));
    }

    #[test]
    fn test_failed_source_renders_empty_state() {
        let (outcome, html) = run("Hardware", &StaticSource::unavailable());
        assert_eq!(outcome, ViewOutcome::Empty);
        assert!(html.contains("No articles in this category yet"));
    }
}
