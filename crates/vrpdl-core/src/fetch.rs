//! Blocking HTTP GET via libcurl.
//!
//! One request at a time, whole body buffered in memory. The listing page and
//! every instance/solution file go through the same [`Fetch`] implementation.

use crate::config::HttpConfig;
use crate::error::{FetchError, HarvestError};
use crate::storage;
use std::path::Path;
use std::time::Duration;

/// Source of response bodies. [`CurlFetcher`] in production; tests substitute an in-memory map.
pub trait Fetch {
    /// GET `url` and return the raw response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// libcurl-backed fetcher. Follows redirects; timeouts only when configured.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    http: HttpConfig,
}

impl CurlFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn curl_err(url: &str, source: curl::Error) -> FetchError {
        FetchError::Curl {
            url: url.to_string(),
            source,
        }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(secs) = self.http.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = self.http.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        if let Some(ua) = &self.http.user_agent {
            easy.useragent(ua)?;
        }
        Ok(())
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, url)
            .map_err(|e| Self::curl_err(url, e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| Self::curl_err(url, e))?;
            transfer.perform().map_err(|e| Self::curl_err(url, e))?;
        }

        let code = easy.response_code().map_err(|e| Self::curl_err(url, e))?;
        if !(200..300).contains(&code) {
            if self.http.strict_status {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    code,
                });
            }
            tracing::warn!(url, code, "non-2xx response, keeping body");
        }
        tracing::debug!(url, code, bytes = body.len(), "GET done");
        Ok(body)
    }
}

/// Fetches `url` and writes the body to `path` (created or truncated). Returns bytes written.
pub fn download_file<F: Fetch>(fetcher: &F, url: &str, path: &Path) -> Result<u64, HarvestError> {
    let body = fetcher.fetch(url)?;
    storage::write_file(path, &body)?;
    Ok(body.len() as u64)
}
