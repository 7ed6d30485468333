use serde::{Deserialize, Serialize};

use crate::error::DrugCheckerError;

const NOT_IMPLEMENTED_NOTICE: &str = "(Interaction resolution is not implemented yet.)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionsRequest {
    pub drugs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionsResponse {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
}

// TODO: resolve names to RxCUI and query an interaction database once one is chosen.
/// Echoes the selected drugs back as a bulleted list.
///
/// No name resolution or interaction analysis happens here.
pub fn summarize(drugs: &[String]) -> Result<InteractionsResponse, DrugCheckerError> {
    if drugs.is_empty() {
        return Err(DrugCheckerError::InvalidArgument(
            "No drugs supplied".into(),
        ));
    }

    let mut summary = String::from("Selected drugs:");
    for drug in drugs {
        summary.push_str("\n- ");
        summary.push_str(drug);
    }
    summary.push_str("\n\n");
    summary.push_str(NOT_IMPLEMENTED_NOTICE);

    Ok(InteractionsResponse {
        summary,
        details: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_lists_each_drug_in_order() {
        let resp = summarize(&["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(
            resp.summary,
            "Selected drugs:\n- A\n- B\n\n(Interaction resolution is not implemented yet.)"
        );
        assert!(resp.details.is_none());
    }

    #[test]
    fn summarize_rejects_empty_list() {
        let err = summarize(&[]).unwrap_err();
        assert!(matches!(err, DrugCheckerError::InvalidArgument(_)));
        assert!(err.to_string().contains("No drugs supplied"));
    }

    #[test]
    fn details_are_omitted_when_serialized() {
        let resp = summarize(&["warfarin".to_string()]).unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("details").is_none());
        assert!(json["summary"].as_str().unwrap().contains("- warfarin"));
    }
}
