use postgrid_types::Markup;
use serde::Serialize;

/// A named element of the page that a view fills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Container {
    pub id: String,
    pub content: Markup,
    pub hidden: bool,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Markup::new(),
            hidden: false,
        }
    }

    pub fn replace(&mut self, content: Markup) {
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.content = Markup::new();
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    /// `None` when the page has no description meta element
    pub description: Option<String>,
}

/// The page a view renders into.
///
/// Containers are whatever the page declares; views never create them.
/// Metadata writes made while showing one article are undone by
/// [`Document::begin_navigation`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    location: String,
    #[serde(skip)]
    baseline: Metadata,
    metadata: Metadata,
    containers: Vec<Container>,
}

impl Document {
    pub fn new(location: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            location: location.into(),
            baseline: metadata.clone(),
            metadata,
            containers: Vec::new(),
        }
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.container(&id).is_none() {
            self.containers.push(Container::new(id));
        }
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.description.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = title.into();
    }

    /// Only pages that declare a description meta get one written
    pub fn set_description(&mut self, description: impl Into<String>) {
        if let Some(current) = self.metadata.description.as_mut() {
            *current = description.into();
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Move to a new location, restoring the page's original metadata
    pub fn begin_navigation(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.metadata = self.baseline.clone();
    }
}
