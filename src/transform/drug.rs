use crate::entities::drug::DrugLookupResponse;
use crate::sources::openfda::{LabelOpenFda, LabelResult};
use crate::utils::serde::StringOrVec;

fn first_segment(field: &StringOrVec) -> Option<String> {
    let joined = field.join()?;
    let head = joined.split(',').next().unwrap_or_default();
    (!head.is_empty()).then(|| head.to_string())
}

/// Brand name first, then generic name, then whatever the caller asked for.
pub fn display_name(openfda: &LabelOpenFda, query: &str) -> String {
    first_segment(&openfda.brand_name)
        .or_else(|| first_segment(&openfda.generic_name))
        .unwrap_or_else(|| query.to_string())
}

pub fn from_label_result(result: LabelResult, query: &str) -> DrugLookupResponse {
    let openfda = result.openfda.unwrap_or_default();

    DrugLookupResponse {
        found: true,
        display_name: display_name(&openfda, query),
        brand_names: openfda.brand_name.join(),
        generic_names: openfda.generic_name.join(),
        manufacturer: openfda.manufacturer_name.join(),
        product_type: openfda.product_type.join(),
        purpose: result.purpose.first_text(),
        indications: result.indications_and_usage.first_text(),
        warnings: result.warnings.first_text(),
        interactions_section: result.drug_interactions.first_text(),
    }
}
