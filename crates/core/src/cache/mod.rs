//! Keyed request cache with single-flight fetches and explicit invalidation.

mod cache_service;


pub use cache_service::{CacheState, FetchFuture, Fetcher, RequestCache};
