use crate::{Error, Result};
use postgrid_engine::render::{DEFAULT_AUTHOR, DEFAULT_AUTHOR_BIO};
use postgrid_engine::{DEFAULT_RELATED_LIMIT, ReadTimePolicy, RenderOptions};
use postgrid_types::RoutingScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "postgrid.toml";
pub const CONFIG_ENV_VAR: &str = "POSTGRID_CONFIG";
pub const DATA_DIR_ENV_VAR: &str = "POSTGRID_PATH";

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POSTGRID_CONFIG environment variable (with tilde expansion)
/// 3. ./postgrid.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return expand_tilde(&env_path);
    }

    PathBuf::from(CONFIG_FILE_NAME)
}

/// Resolve the directory holding local preferences based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POSTGRID_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.postgrid
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("postgrid"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".postgrid"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Element ids of the page containers each view fills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerIds {
    pub grid: String,
    pub category: String,
    pub article: String,
    pub related: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            grid: "blog-grid".to_string(),
            category: "category-grid".to_string(),
            article: "article-content".to_string(),
            related: "related-articles".to_string(),
        }
    }
}

impl ContainerIds {
    pub fn all(&self) -> [&str; 4] {
        [&self.grid, &self.category, &self.article, &self.related]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_attempts: u32,
    pub backoff_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_attempts: 3,
            backoff_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// URL or file path of the post list. Relative paths resolve against the
    /// directory of the config file.
    pub resource: String,
    /// Public origin used for share links, e.g. `https://blog.example`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Description meta of pages that declare one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default_author: String,
    pub related_limit: usize,

    pub routing: RoutingScheme,
    pub containers: ContainerIds,
    pub read_time: ReadTimePolicy,
    pub fetch: FetchConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Hamza IT Solutions".to_string(),
            resource: "posts.json".to_string(),
            base_url: None,
            description: None,
            default_author: DEFAULT_AUTHOR.to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            routing: RoutingScheme::default(),
            containers: ContainerIds::default(),
            read_time: ReadTimePolicy::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_time.words_per_minute == 0 {
            return Err(Error::Config(
                "read_time.words_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.fetch.max_attempts == 0 {
            return Err(Error::Config(
                "fetch.max_attempts must be greater than zero".to_string(),
            ));
        }
        if let RoutingScheme::Query { param, .. } = &self.routing
            && param.trim().is_empty()
        {
            return Err(Error::Config(
                "routing.param must not be empty for the query scheme".to_string(),
            ));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            routing: self.routing.clone(),
            read_time: self.read_time,
            default_author: self.default_author.clone(),
            author_bio: DEFAULT_AUTHOR_BIO.to_string(),
            home_href: "/".to_string(),
        }
    }

    /// Absolute address of a site location, used for share links.
    /// Without `base_url` the location is returned unchanged.
    pub fn absolute_url(&self, location: &str) -> String {
        let Some(base) = self.base_url.as_deref() else {
            return location.to_string();
        };
        match url::Url::parse(base).and_then(|base| base.join(location)) {
            Ok(url) => url.to_string(),
            Err(err) => {
                tracing::warn!(base_url = base, error = %err, "invalid base_url, sharing relative location");
                location.to_string()
            }
        }
    }
}
