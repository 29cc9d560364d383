//! Themes: a configuration plus the metadata shown in the theme gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shipwright_config::Config;
use uuid::Uuid;

/// Name given to a fresh theme.
pub const UNTITLED: &str = "Untitled Theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMetadata {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub is_preset: bool,
}

impl ThemeMetadata {
    /// Metadata with a fresh id and both timestamps set to now.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            author: None,
            description: None,
            tags: Vec::new(),
            created: now,
            updated: now,
            is_preset: false,
        }
    }

    /// Applies the fields set in `patch` and bumps `updated`.
    pub fn apply(&mut self, patch: MetadataPatch) {
        let MetadataPatch {
            name,
            author,
            description,
            tags,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(author) = author {
            self.author = Some(author);
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}

/// A partial metadata update. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetadataPatch {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl MetadataPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub config: Config,
}

impl Theme {
    pub fn new(metadata: ThemeMetadata, config: Config) -> Self {
        Self { metadata, config }
    }

    /// A new, unsaved theme with the default Starship configuration.
    pub fn untitled() -> Self {
        Self::new(ThemeMetadata::new(UNTITLED), Config::starship_default())
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::untitled()
    }
}
