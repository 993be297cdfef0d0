//! Core breed lookup types for the Dog Breeds CLI
//!
//! This module defines the `BreedSource` capability shared by the HTTP client
//! and the caching layer, along with the single error kind every lookup
//! failure collapses to.

pub mod dog_api;

pub use dog_api::DogApiClient;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Ordered list of sub-breed names as returned by a source
pub type SubBreeds = Vec<String>;

/// Error returned when a breed cannot be resolved
///
/// Every failure mode (blank input, unknown breed, transport or parse
/// failure) is reported with this one kind. The message is either the
/// offending breed name or an explanatory string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Breed not found: {message}")]
pub struct BreedNotFound {
    message: String,
}

impl BreedNotFound {
    /// Creates a new error carrying the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message (usually the breed name)
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Anything that can list the sub-breeds of a named breed
///
/// Implementations return sub-breeds in the order the underlying data
/// provides them, without sorting or deduplicating.
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Fetches the sub-breeds for `breed`
    ///
    /// # Returns
    /// * `Ok(SubBreeds)` - Zero or more sub-breed names
    /// * `Err(BreedNotFound)` - If the name is blank, the breed is unknown,
    ///   or the lookup failed for any other reason
    async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedNotFound>;
}

#[async_trait]
impl<S: BreedSource + ?Sized> BreedSource for Arc<S> {
    async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedNotFound> {
        (**self).get_sub_breeds(breed).await
    }
}

/// Normalizes a breed name for lookups
///
/// Trims surrounding whitespace and lowercases with Unicode case mapping,
/// which does not depend on the process locale.
///
/// # Returns
/// * `Some(String)` - The normalized name
/// * `None` - If the name is empty or whitespace only
pub fn normalize_breed_name(breed: &str) -> Option<String> {
    let trimmed = breed.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_breed_name("  Bulldog "), Some("bulldog".to_string()));
        assert_eq!(normalize_breed_name("HUSKY"), Some("husky".to_string()));
        assert_eq!(normalize_breed_name("\tretriever\n"), Some("retriever".to_string()));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_breed_name(""), None);
        assert_eq!(normalize_breed_name("   "), None);
        assert_eq!(normalize_breed_name("\t\n"), None);
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(
            normalize_breed_name(" Bull Terrier "),
            Some("bull terrier".to_string())
        );
    }

    #[test]
    fn test_breed_not_found_display_includes_message() {
        let err = BreedNotFound::new("unicorn");
        assert_eq!(err.message(), "unicorn");
        assert_eq!(err.to_string(), "Breed not found: unicorn");
    }

    struct FixedSource;

    #[async_trait]
    impl BreedSource for FixedSource {
        async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedNotFound> {
            Ok(vec![breed.to_string()])
        }
    }

    #[tokio::test]
    async fn test_arc_delegates_to_inner_source() {
        let source: Arc<dyn BreedSource> = Arc::new(FixedSource);
        assert_eq!(source.get_sub_breeds("pug").await.unwrap(), vec!["pug"]);
    }
}
