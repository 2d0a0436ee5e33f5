use postgrid_engine::{EmptyState, NotFound, RenderOptions, Renderer, empty_state};
use postgrid_types::Post;

fn load_posts() -> Vec<Post> {
    let payload = include_str!("fixtures/posts.json");
    postgrid_types::parse_posts(payload).expect("fixture parses")
}

#[test]
fn test_empty_grid_state() {
    insta::assert_snapshot!(empty_state(EmptyState::NoArticles).as_str(), @r#"
    <div class="no-results">
    <h3>No articles yet</h3>
    <p>Check back soon for new content!</p>
    </div>
    "#);
}

#[test]
fn test_empty_category_state_escapes_name() {
    let markup = empty_state(EmptyState::NoCategoryArticles {
        category: "<Gaming>",
    });
    insta::assert_snapshot!(markup.as_str(), @r#"
    <div class="no-results">
    <h3>No articles in this category yet</h3>
    <p>Check back soon for new &lt;Gaming&gt; content!</p>
    </div>
    "#);
}

#[test]
fn test_not_found_links_home() {
    let renderer = Renderer::new(RenderOptions {
        home_href: "/blog/".to_string(),
        ..RenderOptions::default()
    });
    insta::assert_snapshot!(renderer.not_found(NotFound::Unmatched).as_str(), @r#"
    <div class="error-message">
    <h2>Article not found</h2>
    <p>Sorry, we couldn't find the article you're looking for.</p>
    <a href="/blog/" class="btn btn-primary">Go to Homepage</a>
    </div>
    "#);
}

#[test]
fn test_card_markup() {
    let posts = load_posts();
    let card = Renderer::default().card(&posts[1], 1);
    insta::assert_snapshot!(card.as_str(), @r#"
    <div class="blog-card" style="animation-delay: 0.1s">
    <div class="card-image-container"><img src="/img/android.jpg" alt="Android tips &amp; tricks" loading="lazy"></div>
    <div class="card-content">
    <span class="category mobile">Mobile</span>
    <h3><a href="/article?id=android-tips" target="_blank" rel="noopener">Android tips &amp; tricks</a></h3>
    <p>Ten quick wins for your phone</p>
    <div class="card-meta"><span>February 10, 2025 • 3 min read</span><a href="/article?id=android-tips" target="_blank" rel="noopener" class="read-more">Read More →</a></div>
    </div>
    </div>
    "#);
}

#[test]
fn test_every_card_is_self_contained() {
    let posts = load_posts();
    let renderer = Renderer::default();
    for (index, post) in posts.iter().enumerate() {
        let html = renderer.card(post, index).into_string();
        assert_eq!(
            html.matches("<div").count(),
            html.matches("</div>").count(),
            "unbalanced card for {}",
            post.id
        );
    }
}
