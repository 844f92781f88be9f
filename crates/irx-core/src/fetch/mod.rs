//! HTTP Range GET transport.
//!
//! Uses the curl crate (libcurl) to fetch an inclusive byte range of a remote
//! line-delimited JSON resource. Transfers are blocking; the range cache runs
//! them on tokio's blocking pool.

mod error;

pub use error::FetchError;

use crate::config::ExplorerConfig;
use crate::range::ByteRange;
use std::time::Duration;

/// Fetches the raw body for `range` of `url`.
///
/// Implementations block the calling thread. `url` is already resolved.
pub trait RangeFetch: Send + Sync + 'static {
    fn fetch(&self, url: &str, range: ByteRange) -> Result<Vec<u8>, FetchError>;
}

/// Curl-backed transport: one `Easy` handle per request.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &ExplorerConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl RangeFetch for CurlFetcher {
    fn fetch(&self, url: &str, range: ByteRange) -> Result<Vec<u8>, FetchError> {
        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.get(true).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.connect_timeout(self.connect_timeout).map_err(transport)?;
        easy.timeout(self.timeout).map_err(transport)?;
        // Sends `Range: bytes=start-end`.
        easy.range(&range.to_string()).map_err(transport)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: code,
            });
        }

        tracing::debug!(url, range = %range, bytes = body.len(), "range fetched");
        Ok(body)
    }
}
