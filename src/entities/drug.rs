use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DrugCheckerError;
use crate::sources::openfda::OpenFdaClient;
use crate::transform;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugLookupRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugLookupResponse {
    pub found: bool,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions_section: Option<String>,
}

impl DrugLookupResponse {
    pub fn not_found(query: &str) -> Self {
        Self {
            found: false,
            display_name: query.to_string(),
            brand_names: None,
            generic_names: None,
            manufacturer: None,
            product_type: None,
            purpose: None,
            indications: None,
            warnings: None,
            interactions_section: None,
        }
    }
}

fn validate_name(name: &str) -> Result<&str, DrugCheckerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DrugCheckerError::InvalidArgument("Empty name".into()));
    }
    Ok(name)
}

/// Looks up the first openFDA label matching `name` by brand or generic name.
///
/// A 404 or an empty result set is a normal `found: false` answer, not an error.
pub async fn lookup(
    client: &OpenFdaClient,
    name: &str,
) -> Result<DrugLookupResponse, DrugCheckerError> {
    let query = validate_name(name)?;

    let Some(resp) = client.label_search(query).await? else {
        debug!(query, "openfda returned 404");
        return Ok(DrugLookupResponse::not_found(query));
    };

    let Some(first) = resp.results.into_iter().next() else {
        debug!(query, "openfda returned no results");
        return Ok(DrugLookupResponse::not_found(query));
    };

    Ok(transform::drug::from_label_result(first, query))
}
