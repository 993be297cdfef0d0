//! Dog Breeds CLI Library
//!
//! Exposes the breed source abstraction, the dog.ceo client, the caching
//! decorator, and CLI parsing for use by the binary and integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod output;

pub use cache::CachingBreedSource;
pub use data::{BreedNotFound, BreedSource, DogApiClient, SubBreeds};
