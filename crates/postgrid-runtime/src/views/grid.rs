use super::{ViewContext, ViewOutcome, fill_cards, finish, skipped};
use crate::document::Document;
use postgrid_engine::EmptyState;
use postgrid_types::Post;

/// Homepage grid: every post, in catalog order
pub fn render_grid(ctx: &ViewContext<'_>, doc: &mut Document) -> ViewOutcome {
    let id = ctx.config.containers.grid.as_str();
    let Some(container) = doc.container_mut(id) else {
        return skipped("grid", id);
    };

    let posts = ctx.source.fetch_posts();
    let all: Vec<&Post> = posts.iter().collect();
    let outcome = fill_cards(container, ctx.renderer, &all, EmptyState::NoArticles);
    finish("grid", outcome)
}
