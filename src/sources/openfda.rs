use std::borrow::Cow;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DrugCheckerError;
use crate::utils::serde::StringOrVec;

const OPENFDA_BASE: &str = "https://api.fda.gov";
const OPENFDA_API: &str = "openfda";
const OPENFDA_BASE_ENV: &str = "DRUG_CHECKER_OPENFDA_BASE";
const OPENFDA_API_KEY_ENV: &str = "OPENFDA_API_KEY";

pub struct OpenFdaClient {
    client: reqwest_middleware::ClientWithMiddleware,
    base: Cow<'static, str>,
    api_key: Option<String>,
    timeout: Duration,
}

impl OpenFdaClient {
    pub fn new(timeout: Duration) -> Result<Self, DrugCheckerError> {
        Ok(Self {
            client: crate::sources::http_client(timeout)?,
            base: crate::sources::env_value(OPENFDA_BASE_ENV)
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(OPENFDA_BASE)),
            api_key: crate::sources::env_value(OPENFDA_API_KEY_ENV),
            timeout,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(
        base: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DrugCheckerError> {
        Ok(Self {
            client: crate::sources::http_client(timeout)?,
            base: Cow::Owned(base),
            api_key: api_key
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            timeout,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_ref().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Exact-match search over brand or generic name in the `openfda` block.
    pub(crate) fn label_query(name: &str) -> String {
        let escaped = crate::utils::query::escape_lucene_value(name);
        format!("openfda.brand_name:\"{escaped}\" OR openfda.generic_name:\"{escaped}\"")
    }

    fn classify_timeout(&self, err: DrugCheckerError) -> DrugCheckerError {
        let timed_out = match &err {
            DrugCheckerError::Http(e) => e.is_timeout(),
            DrugCheckerError::HttpMiddleware(reqwest_middleware::Error::Reqwest(e)) => {
                e.is_timeout()
            }
            _ => false,
        };
        if timed_out {
            return DrugCheckerError::UpstreamTimeout {
                api: OPENFDA_API.to_string(),
                timeout: self.timeout,
            };
        }
        err
    }

    async fn get_json_optional<T: DeserializeOwned>(
        &self,
        req: reqwest_middleware::RequestBuilder,
    ) -> Result<Option<T>, DrugCheckerError> {
        let resp = req
            .send()
            .await
            .map_err(|e| self.classify_timeout(e.into()))?;
        let status = resp.status();
        let bytes = crate::sources::read_capped_body(resp, OPENFDA_API)
            .await
            .map_err(|e| self.classify_timeout(e))?;

        if status.as_u16() == 404 {
            return Ok(None);
        }

        if !status.is_success() {
            let excerpt = crate::sources::error_excerpt(&bytes);
            return Err(DrugCheckerError::Api {
                api: OPENFDA_API.to_string(),
                message: format!("HTTP {status}: {excerpt}"),
            });
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| DrugCheckerError::ApiJson {
                api: OPENFDA_API.to_string(),
                source,
            })
    }

    /// Fetches the single best label match for `drug_name`.
    ///
    /// `Ok(None)` means openFDA answered 404, which it does for searches with no hits.
    pub async fn label_search(
        &self,
        drug_name: &str,
    ) -> Result<Option<OpenFdaResponse<LabelResult>>, DrugCheckerError> {
        let q = Self::label_query(drug_name);

        let url = self.endpoint("drug/label.json");
        let mut req = self
            .client
            .get(&url)
            .query(&[("search", q.as_str()), ("limit", "1")]);
        if let Some(key) = self.api_key.as_deref() {
            req = req.query(&[("api_key", key)]);
        }

        tracing::debug!(search = %q, "openfda label search");
        self.get_json_optional(req).await
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenFdaResponse<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelResult {
    #[serde(default)]
    pub purpose: StringOrVec,
    #[serde(default)]
    pub indications_and_usage: StringOrVec,
    #[serde(default)]
    pub warnings: StringOrVec,
    #[serde(default)]
    pub drug_interactions: StringOrVec,
    #[serde(default)]
    pub openfda: Option<LabelOpenFda>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelOpenFda {
    #[serde(default)]
    pub brand_name: StringOrVec,
    #[serde(default)]
    pub generic_name: StringOrVec,
    #[serde(default)]
    pub manufacturer_name: StringOrVec,
    #[serde(default)]
    pub product_type: StringOrVec,
}
