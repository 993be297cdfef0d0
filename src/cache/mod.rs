//! Cache module for sub-breed lookups
//!
//! This module provides an in-memory caching decorator that wraps any
//! `BreedSource`. Successful lookups are remembered for the lifetime of the
//! decorator; failures are always passed through and never remembered.

mod caching_source;

pub use caching_source::CachingBreedSource;
