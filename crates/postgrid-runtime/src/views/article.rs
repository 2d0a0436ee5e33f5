use super::{ViewContext, ViewOutcome, finish, render_related, skipped};
use crate::document::Document;
use postgrid_engine::{NotFound, find_post, resolve_id};
use postgrid_types::Markup;

/// Single-article page for the post named by the document location.
///
/// A location without an id shows the not-found panel without fetching.
/// A found post also sets the page title and description and fills the
/// related-articles block; otherwise that block is cleared and hidden.
pub fn render_article(ctx: &ViewContext<'_>, doc: &mut Document) -> ViewOutcome {
    let id = ctx.config.containers.article.as_str();
    if doc.container(id).is_none() {
        return skipped("article", id);
    }

    let Some(post_id) = resolve_id(&ctx.config.routing, doc.location()) else {
        tracing::debug!(location = doc.location(), "no article id in location");
        return not_found(ctx, doc, ctx.renderer.not_found(NotFound::MissingId));
    };

    let posts = ctx.source.fetch_posts();
    let Some(post) = find_post(&posts, &post_id) else {
        tracing::debug!(id = %post_id, "article not in catalog");
        return not_found(ctx, doc, ctx.renderer.not_found(NotFound::Unmatched));
    };

    let page_url = ctx.config.absolute_url(doc.location());
    if let Some(container) = doc.container_mut(id) {
        container.replace(ctx.renderer.detail(post, &page_url));
    }
    doc.set_title(format!("{} - {}", post.title, ctx.config.site_name));
    doc.set_description(post.summary.clone());

    render_related(ctx, doc, &posts, post);
    finish("article", ViewOutcome::Rendered { count: 1 })
}

fn not_found(ctx: &ViewContext<'_>, doc: &mut Document, panel: Markup) -> ViewOutcome {
    if let Some(container) = doc.container_mut(&ctx.config.containers.article) {
        container.replace(panel);
    }
    if let Some(related) = doc.container_mut(&ctx.config.containers.related) {
        related.clear();
        related.hide();
    }
    finish("article", ViewOutcome::NotFound)
}
