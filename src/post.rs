//! Post data model.
//!
//! Posts are owned by the repository; screens only read them.

use serde::{Deserialize, Serialize};

/// A single article in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub publication: Option<Publication>,
    pub metadata: PostMetadata,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub author: PostAuthor,
    pub date: String,
    #[serde(rename = "reading_time")]
    pub reading_time_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body paragraph of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub kind: ParagraphKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    #[default]
    Text,
    Header,
    Subhead,
    Quote,
    Bullet,
    Code,
}

impl Post {
    /// "Author · Date · N min read"
    pub fn byline(&self) -> String {
        format!(
            "{} · {} · {} min read",
            self.metadata.author.name, self.metadata.date, self.metadata.reading_time_minutes
        )
    }

    /// Author and reading time only, for narrow cards
    pub fn short_byline(&self) -> String {
        format!(
            "{} · {} min",
            self.metadata.author.name, self.metadata.reading_time_minutes
        )
    }
}
