use http::Extensions;
use reqwest_middleware::{Middleware, Next};
use tokio::time::Instant;

/// Logs every outbound upstream exchange at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct UpstreamTraceMiddleware;

#[async_trait::async_trait]
impl Middleware for UpstreamTraceMiddleware {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<reqwest::Response> {
        let method = req.method().clone();
        let host = req.url().host_str().unwrap_or("unknown-host").to_string();
        let path = req.url().path().to_string();
        let start = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(resp) => tracing::debug!(
                %method,
                host = %host,
                path = %path,
                status = resp.status().as_u16(),
                elapsed_ms,
                "upstream request"
            ),
            Err(err) => tracing::debug!(
                %method,
                host = %host,
                path = %path,
                elapsed_ms,
                error = %err,
                "upstream request failed"
            ),
        }
        result
    }
}
