use super::PostSource;
use crate::Result;
use postgrid_types::{Post, parse_posts_slice};
use std::path::PathBuf;

/// Catalog stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PostSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Post>> {
        let bytes = std::fs::read(&self.path)?;
        Ok(parse_posts_slice(&bytes)?)
    }
}
