use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::mutation::{graphql_errors, user_errors, MetafieldInput, MutationDocument};
use super::product_id::ProductId;
use super::year_range::{InvalidYearRange, YearList, YearRange};
use crate::shopify::client::MutationExecutor;

/// Failure of an update call. `Display` is the message returned to clients.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Missing productId or yearRange")]
    Validation,
    #[error("Invalid year range format")]
    RangeParse(#[from] InvalidYearRange),
    #[error("Failed to update metafield")]
    Mutation { details: Vec<Value> },
    #[error("Server error")]
    Server(#[source] anyhow::Error),
}

impl UpdateError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation | Self::RangeParse(_))
    }

    pub fn details(&self) -> Option<&[Value]> {
        match self {
            Self::Mutation { details } => Some(details),
            _ => None,
        }
    }
}

/// Writes the vehicle year list of one product.
#[derive(Clone)]
pub struct RangeMetafieldUpdater {
    executor: Arc<dyn MutationExecutor>,
}

impl RangeMetafieldUpdater {
    pub fn new(executor: Arc<dyn MutationExecutor>) -> Self {
        Self { executor }
    }

    /// Host clock decides what `current` means.
    pub async fn update_vehicle_year_range(
        &self,
        product_id: Option<&str>,
        year_range: Option<&str>,
    ) -> Result<YearList, UpdateError> {
        let (product_id, year_range) = require_inputs(product_id, year_range)?;
        let product = ProductId::normalize(product_id);
        let range = YearRange::parse(year_range).inspect_err(|e| {
            debug!(product_id = %product.bare(), input = %e.input, "year range rejected");
        })?;
        self.apply(&product, range).await
    }

    async fn apply(&self, product: &ProductId, range: YearRange) -> Result<YearList, UpdateError> {
        let years = range.years();
        let document =
            MutationDocument::metafields_set(MetafieldInput::vehicle_years(product, &years));

        let response = match self.executor.execute_mutation(&document).await {
            Ok(v) => v,
            Err(e) => {
                error!(product_id = %product.bare(), error = ?e, "metafieldsSet request failed");
                return Err(UpdateError::Server(e));
            }
        };

        let top_level = graphql_errors(&response);
        if !top_level.is_empty() {
            warn!(product_id = %product.bare(), errors = ?top_level, "GraphQL response carried top-level errors");
        }

        let details = user_errors(&response);
        if !details.is_empty() {
            warn!(product_id = %product.bare(), user_errors = ?details, "metafieldsSet rejected");
            return Err(UpdateError::Mutation { details });
        }

        info!(
            product_id = %product.bare(),
            start = range.start(),
            end = range.end(),
            "vehicle year range updated"
        );
        Ok(years)
    }
}

/// Presence check: both inputs set and non-empty.
fn require_inputs<'a>(
    product_id: Option<&'a str>,
    year_range: Option<&'a str>,
) -> Result<(&'a str, &'a str), UpdateError> {
    match (product_id, year_range) {
        (Some(p), Some(y)) if !p.is_empty() && !y.is_empty() => Ok((p, y)),
        _ => Err(UpdateError::Validation),
    }
}
