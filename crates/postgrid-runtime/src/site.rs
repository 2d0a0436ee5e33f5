use crate::Result;
use crate::config::SiteConfig;
use crate::document::{Document, Metadata};
use crate::sequencer::RequestSequencer;
use crate::source::{CachedSource, PostSource, source_for};
use crate::views::{self, ViewContext, ViewOutcome};
use postgrid_engine::Renderer;
use postgrid_types::Post;
use std::path::{Path, PathBuf};

/// One page load of the blog.
///
/// Owns the configuration, a fetch-once view of the catalog and the search
/// sequencer. Every view rendered through the same `Site` sees the same
/// catalog.
pub struct Site {
    config: SiteConfig,
    source: CachedSource<Box<dyn PostSource>>,
    renderer: Renderer,
    sequencer: RequestSequencer,
}

impl Site {
    pub fn new(config: SiteConfig, source: Box<dyn PostSource>) -> Self {
        let renderer = Renderer::new(config.render_options());
        Self {
            config,
            source: CachedSource::new(source),
            renderer,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Load the config at `config_path` and build the source it names.
    ///
    /// `resource` replaces the configured resource when given. Relative file
    /// resources resolve against the config file's directory.
    pub fn open(config_path: &Path, resource: Option<&str>) -> Result<Self> {
        let mut config = SiteConfig::load_from(config_path)?;
        if let Some(resource) = resource {
            config.resource = resource.to_string();
        }

        let root = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let source = source_for(&config.resource, &root, &config.fetch);
        tracing::debug!(source = %source.describe(), config = %config_path.display(), "opened site");

        Ok(Self::new(config, source))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    pub fn source(&self) -> &dyn PostSource {
        &self.source
    }

    /// The catalog, fetched on first use
    pub fn posts(&self) -> &[Post] {
        self.source.posts()
    }

    /// A page at `location` declaring every configured container
    pub fn document(&self, location: &str) -> Document {
        let metadata = Metadata {
            title: self.config.site_name.clone(),
            description: self.config.description.clone(),
        };
        self.config
            .containers
            .all()
            .into_iter()
            .fold(Document::new(location, metadata), |doc, id| {
                doc.with_container(id)
            })
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext {
            source: &self.source,
            renderer: &self.renderer,
            config: &self.config,
        }
    }

    pub fn render_grid(&self, doc: &mut Document) -> ViewOutcome {
        views::render_grid(&self.context(), doc)
    }

    pub fn render_category(&self, doc: &mut Document, category: &str) -> ViewOutcome {
        views::render_category(&self.context(), doc, category)
    }

    pub fn render_search(&self, doc: &mut Document, query: &str) -> ViewOutcome {
        views::render_search(&self.context(), doc, &self.sequencer, query)
    }

    pub fn render_article(&self, doc: &mut Document) -> ViewOutcome {
        views::render_article(&self.context(), doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"id":"a","title":"A","summary":"first","image":"/a.jpg","category":"Software","date":"2025-01-01"},
        {"id":"b","title":"B","summary":"second","image":"/b.jpg","category":"Software","date":"2025-01-02"}
    ]"#;

    #[test]
    fn test_open_resolves_resource_next_to_config() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("posts.json"), CATALOG)?;
        let config_path = dir.path().join("postgrid.toml");
        std::fs::write(&config_path, "site_name = \"Test Blog\"\n")?;

        let site = Site::open(&config_path, None)?;
        assert_eq!(site.config().site_name, "Test Blog");
        assert_eq!(site.posts().len(), 2);
        Ok(())
    }

    #[test]
    fn test_open_with_resource_override() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("other.json"), CATALOG)?;

        let site = Site::open(&dir.path().join("postgrid.toml"), Some("other.json"))?;
        assert_eq!(site.config().resource, "other.json");
        assert_eq!(site.posts().len(), 2);
        Ok(())
    }

    #[test]
    fn test_views_render_from_one_catalog() {
        let site = Site::new(
            SiteConfig::default(),
            Box::new(StaticSource::new(postgrid_types::parse_posts(CATALOG).unwrap())),
        );

        let mut home = site.document("/");
        assert_eq!(site.render_grid(&mut home), ViewOutcome::Rendered { count: 2 });

        let mut article = site.document("/article?id=b");
        assert_eq!(
            site.render_article(&mut article),
            ViewOutcome::Rendered { count: 1 }
        );
        assert_eq!(article.title(), "B - Hamza IT Solutions");

        let mut search = site.document("/");
        assert_eq!(
            site.render_search(&mut search, "second"),
            ViewOutcome::Rendered { count: 1 }
        );
        assert_eq!(site.source().describe(), "memory");
    }

    #[test]
    fn test_document_declares_configured_containers() {
        let site = Site::new(SiteConfig::default(), Box::new(StaticSource::default()));
        let doc = site.document("/");
        let ids: Vec<&str> = doc.containers().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            ["blog-grid", "category-grid", "article-content", "related-articles"]
        );
        assert_eq!(doc.title(), "Hamza IT Solutions");
        assert_eq!(doc.description(), None);
    }
}
