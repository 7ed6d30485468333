//! Upstream source clients and shared HTTP utilities.

use std::time::Duration;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::error::DrugCheckerError;

pub(crate) mod openfda;
pub(crate) mod trace;

/// Characters of an upstream error body kept in error messages.
const ERROR_EXCERPT_CHARS: usize = 512;
pub(crate) const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Reads a trimmed, non-blank environment variable.
pub(crate) fn env_value(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Builds the outbound client. `timeout` bounds the whole exchange, connect included.
pub(crate) fn http_client(timeout: Duration) -> Result<ClientWithMiddleware, DrugCheckerError> {
    let base_client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("drug-checker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(DrugCheckerError::HttpClientInit)?;

    Ok(ClientBuilder::new(base_client)
        .with(trace::UpstreamTraceMiddleware)
        .build())
}

/// One-line excerpt of an upstream error body for log and error messages.
pub(crate) fn error_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let words: Vec<&str> = text.split_whitespace().collect();
    let flat = words.join(" ");

    match flat.char_indices().nth(ERROR_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{} …", &flat[..cut]),
        None => flat,
    }
}

/// Collects the response body, refusing anything larger than [`MAX_BODY_BYTES`].
pub(crate) async fn read_capped_body(
    mut resp: reqwest::Response,
    api: &str,
) -> Result<Vec<u8>, DrugCheckerError> {
    let too_large = || DrugCheckerError::Api {
        api: api.to_string(),
        message: format!("response body exceeded {MAX_BODY_BYTES} bytes"),
    };

    if resp
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(too_large());
    }

    let mut body = Vec::with_capacity(resp.content_length().unwrap_or(0) as usize);
    while let Some(chunk) = resp.chunk().await? {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
