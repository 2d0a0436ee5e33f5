use crate::date::format_date;
use crate::read_time::ReadTimePolicy;
use crate::routing::article_href;
use crate::sanitize::sanitize_content;
use postgrid_types::{Markup, Post, RoutingScheme};
use url::form_urlencoded;

pub const DEFAULT_AUTHOR: &str = "Hamza";
pub const DEFAULT_AUTHOR_BIO: &str =
    "Technology enthusiast sharing knowledge about hardware, software, and mobile devices.";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub routing: RoutingScheme,
    pub read_time: ReadTimePolicy,
    pub default_author: String,
    pub author_bio: String,
    pub home_href: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            routing: RoutingScheme::default(),
            read_time: ReadTimePolicy::default(),
            default_author: DEFAULT_AUTHOR.to_string(),
            author_bio: DEFAULT_AUTHOR_BIO.to_string(),
            home_href: "/".to_string(),
        }
    }
}

/// Fixed messages shown instead of a card list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState<'a> {
    NoArticles,
    NoCategoryArticles { category: &'a str },
    NoSearchResults,
}

/// Why the article page has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// The location carried no post id
    MissingId,
    /// No post in the catalog has the requested id
    Unmatched,
}

/// Turns post records into markup fragments.
///
/// Rendering is pure: the same post and options always produce the same
/// markup. Plain-text fields are escaped and rich content is sanitised.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn article_href(&self, id: &str) -> String {
        article_href(&self.options.routing, id)
    }

    pub fn read_time(&self, post: &Post) -> u32 {
        self.options.read_time.minutes_for(post)
    }

    pub fn author<'a>(&'a self, post: &'a Post) -> &'a str {
        post.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&self.options.default_author)
    }

    /// Grid card; `index` staggers the entry animation
    pub fn card(&self, post: &Post, index: usize) -> Markup {
        let href = self.article_href(&post.id);
        let meta = format!(
            "{} • {} min read",
            format_date(&post.date),
            self.read_time(post)
        );
        let delay = format!("animation-delay: {}.{}s", index / 10, index % 10);

        let mut m = Markup::new();
        m.raw("<div class=\"blog-card\" style=\"")
            .text(&delay)
            .raw("\">\n");
        push_card_image(&mut m, post);
        m.raw("<div class=\"card-content\">\n");
        push_category_badge(&mut m, post);
        if let Some(sub) = post.subcategory.as_deref().filter(|s| !s.is_empty()) {
            m.raw("<span class=\"subcategory\">").text(sub).raw("</span>\n");
        }
        push_title_link(&mut m, &href, &post.title);
        m.raw("<p>").text(&post.summary).raw("</p>\n");
        m.raw("<div class=\"card-meta\"><span>")
            .text(&meta)
            .raw("</span>");
        push_read_more(&mut m, &href);
        m.raw("</div>\n</div>\n</div>\n");
        m
    }

    /// Compact card used in the related-articles block
    pub fn related_card(&self, post: &Post) -> Markup {
        let href = self.article_href(&post.id);

        let mut m = Markup::new();
        m.raw("<div class=\"blog-card\">\n");
        push_card_image(&mut m, post);
        m.raw("<div class=\"card-content\">\n");
        push_category_badge(&mut m, post);
        push_title_link(&mut m, &href, &post.title);
        push_read_more(&mut m, &href);
        m.raw("\n</div>\n</div>\n");
        m
    }

    pub fn related_block(&self, posts: &[&Post]) -> Markup {
        let mut m = Markup::new();
        m.raw("<h3>Related Articles</h3>\n<div class=\"blog-grid\">\n");
        for post in posts {
            m.append(&self.related_card(post));
        }
        m.raw("</div>\n");
        m
    }

    /// Full article body. `page_url` is the address shared by the share links.
    pub fn detail(&self, post: &Post, page_url: &str) -> Markup {
        let author = self.author(post);
        let initial: String = author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        let mut m = Markup::new();
        push_category_badge(&mut m, post);
        m.raw("<h1>").text(&post.title).raw("</h1>\n");
        m.raw("<p class=\"meta\"><span>By ")
            .text(author)
            .raw("</span><span>•</span><span>")
            .text(&format_date(&post.date))
            .raw("</span><span>•</span><span>")
            .text(&format!("{} min read", self.read_time(post)))
            .raw("</span></p>\n");
        m.raw("<img src=\"")
            .text(&post.image)
            .raw("\" alt=\"")
            .text(&post.title)
            .raw("\" class=\"featured-image\">\n");
        m.raw("<div class=\"content-body\">\n")
            .append(&sanitize_content(post.content.as_deref().unwrap_or_default()))
            .raw("\n</div>\n");

        m.raw("<div class=\"article-footer\">\n<div class=\"share-section\">\n<h4>Share this article:</h4>\n<div class=\"share-buttons\">\n");
        for link in share_links(page_url, &post.title) {
            m.raw("<a class=\"")
                .raw(link.class)
                .raw("\" href=\"")
                .text(&link.href)
                .raw("\" target=\"_blank\" rel=\"noopener\">")
                .raw(link.label)
                .raw("</a>\n");
        }
        m.raw("</div>\n</div>\n");
        m.raw("<div class=\"author-box\">\n<div class=\"author-avatar\">")
            .text(&initial)
            .raw("</div>\n<div class=\"author-info\">\n<h4>Written by ")
            .text(author)
            .raw("</h4>\n<p>")
            .text(&self.options.author_bio)
            .raw("</p>\n</div>\n</div>\n</div>\n");
        m
    }

    pub fn not_found(&self, kind: NotFound) -> Markup {
        let message = match kind {
            NotFound::MissingId => "The requested article could not be found.",
            NotFound::Unmatched => "Sorry, we couldn't find the article you're looking for.",
        };

        let mut m = Markup::new();
        m.raw("<div class=\"error-message\">\n<h2>Article not found</h2>\n<p>")
            .raw(message)
            .raw("</p>\n<a href=\"")
            .text(&self.options.home_href)
            .raw("\" class=\"btn btn-primary\">Go to Homepage</a>\n</div>\n");
        m
    }
}

pub fn empty_state(state: EmptyState<'_>) -> Markup {
    let mut m = Markup::new();
    m.raw("<div class=\"no-results\">\n<h3>");
    match state {
        EmptyState::NoArticles => {
            m.raw("No articles yet</h3>\n<p>Check back soon for new content!");
        }
        EmptyState::NoCategoryArticles { category } => {
            m.raw("No articles in this category yet</h3>\n<p>Check back soon for new ")
                .text(category)
                .raw(" content!");
        }
        EmptyState::NoSearchResults => {
            m.raw("No articles found</h3>\n<p>Try a different search term or browse our categories.");
        }
    }
    m.raw("</p>\n</div>\n");
    m
}

/// CSS class for a category label: lowercase, non-alphanumerics folded to `-`
pub fn category_class(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    for ch in category.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

fn push_card_image(m: &mut Markup, post: &Post) {
    m.raw("<div class=\"card-image-container\"><img src=\"")
        .text(&post.image)
        .raw("\" alt=\"")
        .text(&post.title)
        .raw("\" loading=\"lazy\"></div>\n");
}

fn push_category_badge(m: &mut Markup, post: &Post) {
    m.raw("<span class=\"category ")
        .text(&category_class(&post.category))
        .raw("\">")
        .text(&post.category)
        .raw("</span>\n");
}

fn push_title_link(m: &mut Markup, href: &str, title: &str) {
    m.raw("<h3><a href=\"")
        .text(href)
        .raw("\" target=\"_blank\" rel=\"noopener\">")
        .text(title)
        .raw("</a></h3>\n");
}

fn push_read_more(m: &mut Markup, href: &str) {
    m.raw("<a href=\"")
        .text(href)
        .raw("\" target=\"_blank\" rel=\"noopener\" class=\"read-more\">Read More →</a>");
}

struct ShareLink {
    class: &'static str,
    label: &'static str,
    href: String,
}

fn share_links(page_url: &str, title: &str) -> Vec<ShareLink> {
    let query = |pairs: &[(&str, &str)]| {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    };

    vec![
        ShareLink {
            class: "share-twitter",
            label: "Twitter",
            href: format!(
                "https://twitter.com/intent/tweet?{}",
                query(&[("url", page_url), ("text", title)])
            ),
        },
        ShareLink {
            class: "share-facebook",
            label: "Facebook",
            href: format!(
                "https://www.facebook.com/sharer/sharer.php?{}",
                query(&[("u", page_url)])
            ),
        },
        ShareLink {
            class: "share-linkedin",
            label: "LinkedIn",
            href: format!(
                "https://www.linkedin.com/shareArticle?{}",
                query(&[("mini", "true"), ("url", page_url), ("title", title)])
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: "ssd-guide".to_string(),
            title: "Choosing an SSD".to_string(),
            summary: "NVMe or SATA?".to_string(),
            content: Some("<p>Pick <strong>NVMe</strong>.</p>".to_string()),
            image: "/img/ssd.jpg".to_string(),
            category: "Hardware".to_string(),
            subcategory: Some("Storage".to_string()),
            date: "2025-01-05".to_string(),
            read_time: Some(4),
            author: None,
        }
    }

    #[test]
    fn test_category_class() {
        assert_eq!(category_class("Hardware"), "hardware");
        assert_eq!(category_class("Mobile Devices"), "mobile-devices");
        assert_eq!(category_class(" AI & ML "), "ai-ml");
    }

    #[test]
    fn test_card_links_to_article_and_shows_meta() {
        let renderer = Renderer::default();
        let card = renderer.card(&sample(), 2).into_string();

        assert!(card.contains("animation-delay: 0.2s"));
        assert!(card.contains("href=\"/article?id=ssd-guide\""));
        assert!(card.contains("<span class=\"category hardware\">Hardware</span>"));
        assert!(card.contains("<span class=\"subcategory\">Storage</span>"));
        assert!(card.contains("January 5, 2025 • 4 min read"));
        assert!(card.contains("Read More →"));
    }

    #[test]
    fn test_card_follows_path_routing() {
        let renderer = Renderer::new(RenderOptions {
            routing: RoutingScheme::path(),
            ..RenderOptions::default()
        });
        let card = renderer.card(&sample(), 0).into_string();
        assert!(card.contains("href=\"/article/ssd-guide\""));
        assert!(!card.contains("?id="));
    }

    #[test]
    fn test_hostile_fields_are_escaped() {
        let mut post = sample();
        post.title = "<script>alert(1)</script>".to_string();
        post.summary = "\"><img src=x onerror=alert(1)>".to_string();
        post.image = "x\" onerror=\"alert(1)".to_string();
        post.content = Some("<p>ok</p><script>steal()</script>".to_string());

        let renderer = Renderer::default();
        for fragment in [
            renderer.card(&post, 0),
            renderer.related_card(&post),
            renderer.detail(&post, "https://blog.example/article?id=ssd-guide"),
        ] {
            let html = fragment.into_string();
            assert!(!html.contains("<script>"), "{}", html);
            assert!(!html.contains("<img src=x"), "{}", html);
            assert!(!html.contains("\" onerror=\""), "{}", html);
            assert!(!html.contains("steal()"), "{}", html);
        }
    }

    #[test]
    fn test_detail_uses_fallback_author_and_share_links() {
        let renderer = Renderer::default();
        let html = renderer
            .detail(&sample(), "https://blog.example/article?id=ssd-guide")
            .into_string();

        assert!(html.contains("<span>By Hamza</span>"));
        assert!(html.contains("<div class=\"author-avatar\">H</div>"));
        assert!(html.contains("<h4>Written by Hamza</h4>"));
        assert!(html.contains("<p>Pick <strong>NVMe</strong>.</p>"));
        assert!(html.contains(
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fblog.example%2Farticle%3Fid%3Dssd-guide&amp;text=Choosing+an+SSD"
        ));
        assert!(html.contains("https://www.linkedin.com/shareArticle?mini=true&amp;url="));
    }

    #[test]
    fn test_detail_prefers_post_author() {
        let mut post = sample();
        post.author = Some("zoë".to_string());
        let html = Renderer::default().detail(&post, "/").into_string();
        assert!(html.contains("<span>By zoë</span>"));
        assert!(html.contains("<div class=\"author-avatar\">Z</div>"));
    }

    #[test]
    fn test_blank_author_falls_back() {
        let mut post = sample();
        post.author = Some("  ".to_string());
        assert_eq!(Renderer::default().author(&post), "Hamza");
    }

    #[test]
    fn test_related_block_has_heading_and_cards() {
        let post = sample();
        let html = Renderer::default()
            .related_block(&[&post, &post])
            .into_string();
        assert!(html.starts_with("<h3>Related Articles</h3>"));
        assert_eq!(html.matches("class=\"blog-card\"").count(), 2);
        assert!(!html.contains("card-meta"));
    }
}
