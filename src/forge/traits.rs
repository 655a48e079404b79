//! Traits related to remote forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

/// Issues GET requests and hands back the raw response body.
///
/// Status codes are not inspected: a non-2xx response that carries a body is
/// returned like any other, and malformed payloads surface when the caller
/// decodes them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
