//! Post providers for the home screen.
//!
//! The home view only depends on [`PostsRepository`]. Two providers exist:
//! the feed bundled into the binary and a JSON file on disk.

use std::path::PathBuf;

use thiserror::Error;

use crate::post::Post;

/// Feed shipped with the binary, used when no posts file is configured
const BUNDLED_FEED: &str = include_str!("../data/posts.json");

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read posts from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse posts from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("bundled feed is malformed")]
    Bundled(#[source] serde_json::Error),
}

/// Source of posts for a screen
pub trait PostsRepository: Send + Sync {
    /// Fetch the full list of posts, in feed order
    fn get_posts(&self) -> Result<Vec<Post>, RepositoryError>;

    /// Look up a single post by id
    fn get_post(&self, id: &str) -> Result<Option<Post>, RepositoryError> {
        Ok(self.get_posts()?.into_iter().find(|post| post.id == id))
    }
}

/// Posts compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledPostsRepository;

impl PostsRepository for BundledPostsRepository {
    fn get_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        serde_json::from_str(BUNDLED_FEED).map_err(RepositoryError::Bundled)
    }
}

/// Posts read from a JSON array on disk, re-read on every fetch
#[derive(Debug, Clone)]
pub struct FilePostsRepository {
    path: PathBuf,
}

impl FilePostsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PostsRepository for FilePostsRepository {
    fn get_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| RepositoryError::Read {
            path: self.path.clone(),
            source,
        })?;

        let posts: Vec<Post> =
            serde_json::from_str(&content).map_err(|source| RepositoryError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Read {} posts from {}", posts.len(), self.path.display());
        Ok(posts)
    }
}

/// Build the repository for an optional posts file path
pub fn from_path(path: Option<&str>) -> Box<dyn PostsRepository> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            tracing::info!("Using posts file {}", expanded);
            Box::new(FilePostsRepository::new(expanded.into_owned()))
        }
        None => {
            tracing::info!("Using bundled feed");
            Box::new(BundledPostsRepository)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::fixtures;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("newsdesk-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_bundled_feed_parses() {
        let posts = BundledPostsRepository.get_posts().unwrap();
        assert!(posts.len() >= 5);
        assert!(posts.iter().all(|p| !p.id.is_empty()));
    }

    #[test]
    fn test_get_post_by_id() {
        let repo = BundledPostsRepository;
        let first = repo.get_posts().unwrap().remove(0);
        assert_eq!(repo.get_post(&first.id).unwrap(), Some(first));
        assert_eq!(repo.get_post("missing").unwrap(), None);
    }

    #[test]
    fn test_file_repository_reads_posts() {
        let json = serde_json::to_string(&fixtures::posts(5)).unwrap();
        let path = temp_file("posts.json", &json);

        let repo = FilePostsRepository::new(&path);
        let posts = repo.get_posts().unwrap();
        assert_eq!(posts, fixtures::posts(5));
    }

    #[test]
    fn test_file_repository_missing_file() {
        let repo = FilePostsRepository::new("/nonexistent/newsdesk/posts.json");
        let err = repo.get_posts().unwrap_err();
        assert!(matches!(err, RepositoryError::Read { .. }));
    }

    #[test]
    fn test_file_repository_malformed() {
        let path = temp_file("broken.json", "{ not json");
        let err = FilePostsRepository::new(&path).get_posts().unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
