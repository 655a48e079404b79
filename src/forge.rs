//! Read-only access to the hosting forge (GitHub by default).
//!
//! Only three resources are consumed: the latest release of a repository,
//! its tag list, and the raw `Chart.yaml` at a given tag. Responses are
//! returned as raw bytes and decoded ad hoc by the callers.

/// Endpoint configuration and URL rendering.
pub mod config;

/// Wraps a fetcher with the forge endpoints used by the resolver.
pub mod manager;

/// HTTP fetcher backed by reqwest.
pub mod request;

/// Trait seam for HTTP access.
pub mod traits;
