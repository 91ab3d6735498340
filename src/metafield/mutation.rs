// metafieldsSet request construction and response inspection

use serde::Serialize;
use serde_json::{json, Value};

use super::product_id::ProductId;
use super::year_range::YearList;

pub const METAFIELD_NAMESPACE: &str = "custom";
pub const METAFIELD_KEY: &str = "vehicle_year_range_list";
pub const METAFIELD_TYPE: &str = "single_line_text_field";

const METAFIELDS_SET_MUTATION: &str = r#"mutation SetVehicleYearRange($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields {
      key
      namespace
      value
    }
    userErrors {
      field
      message
    }
  }
}"#;

/// GraphQL request body: `{ "query": ..., "variables": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationDocument {
    pub query: String,
    pub variables: Value,
}

/// Single metafield write on a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldInput {
    pub namespace: &'static str,
    pub key: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
    pub owner_id: String,
}

impl MetafieldInput {
    pub fn vehicle_years(product: &ProductId, years: &YearList) -> Self {
        Self {
            namespace: METAFIELD_NAMESPACE,
            key: METAFIELD_KEY,
            kind: METAFIELD_TYPE,
            value: years.to_metafield_value(),
            owner_id: product.gid(),
        }
    }
}

impl MutationDocument {
    pub fn metafields_set(input: MetafieldInput) -> Self {
        Self {
            query: METAFIELDS_SET_MUTATION.to_string(),
            variables: json!({ "metafields": [input] }),
        }
    }
}

/// `data.metafieldsSet.userErrors`, empty when any level is missing.
pub fn user_errors(response: &Value) -> Vec<Value> {
    response
        .pointer("/data/metafieldsSet/userErrors")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Top-level GraphQL `errors` (auth, throttling, schema). Logged only.
pub fn graphql_errors(response: &Value) -> Vec<Value> {
    response
        .get("errors")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}
