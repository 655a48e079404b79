//! HTTP fetcher implementation using reqwest.
use async_trait::async_trait;
use log::*;
use reqwest::Client;

use crate::{
    error::{CompositeError, Result},
    forge::traits::Fetcher,
};

/// GitHub rejects API requests that carry no user agent.
const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated GET client. No retry, no pagination, default redirects.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client =
            Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
                CompositeError::invalid_config(format!(
                    "failed to build http client: {e}"
                ))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CompositeError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {url} returned {status}: passing body through");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CompositeError::network(url, e))?;

        Ok(body.to_vec())
    }
}
