// src/storage.rs
use url::Url;

use crate::errors::CatalogError;

/// Boundary to the blob store that holds listing photos. The catalog only
/// ever stores relative paths; turning a path into something a browser can
/// fetch is this collaborator's job.
pub trait ImageStorage {
    /// Resolves a stored image path to a publicly reachable URL.
    /// Empty or unresolvable paths yield None.
    fn url(&self, path: &str) -> Option<String>;
}

/// Resolves stored paths against a public base URL (CDN or media host).
#[derive(Debug, Clone)]
pub struct PublicImageStorage {
    base: Url,
}

impl PublicImageStorage {
    pub fn new(base: &str) -> Result<Self, CatalogError> {
        // A trailing slash keeps Url::join appending instead of replacing
        // the last path segment.
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized)
            .map_err(|e| CatalogError::BadRequest(format!("invalid storage base URL: {e}")))?;
        Ok(Self { base })
    }
}

impl ImageStorage for PublicImageStorage {
    fn url(&self, path: &str) -> Option<String> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        self.base.join(path).ok().map(|u| u.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_paths_against_the_base() {
        let storage = PublicImageStorage::new("https://media.example.com/listings").unwrap();
        assert_eq!(
            storage.url("abdoun/villa-1.jpg").as_deref(),
            Some("https://media.example.com/listings/abdoun/villa-1.jpg")
        );
    }

    #[test]
    fn leading_slashes_do_not_escape_the_base_path() {
        let storage = PublicImageStorage::new("https://media.example.com/listings/").unwrap();
        assert_eq!(
            storage.url("/villa-1.jpg").as_deref(),
            Some("https://media.example.com/listings/villa-1.jpg")
        );
    }

    #[test]
    fn empty_path_has_no_url() {
        let storage = PublicImageStorage::new("https://media.example.com").unwrap();
        assert_eq!(storage.url(""), None);
    }

    #[test]
    fn rejects_garbage_base_urls() {
        assert!(PublicImageStorage::new("not a url").is_err());
    }
}
