// HTTP request handlers for API endpoints

use actix_web::{web, HttpResponse};
use tracing::Instrument;

use crate::api::models::{ApiResponse, UpdateRequest};
use crate::metafield::{RangeMetafieldUpdater, UpdateError};

pub const LIVENESS_MESSAGE: &str = "Product Metafield API is live";
pub const UPDATED_MESSAGE: &str = "Metafield updated successfully";

/// Liveness probe
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// Expand a year range and store it on the product's metafield.
pub async fn update_product_metafield(
    payload: web::Json<UpdateRequest>,
    updater: web::Data<RangeMetafieldUpdater>,
) -> Result<HttpResponse, UpdateError> {
    let UpdateRequest {
        product_id,
        year_range,
    } = payload.into_inner();
    let product_id = product_id.map(|p| p.into_string());

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("update_product_metafield", %request_id);

    async move {
        tracing::info!(
            product_id = ?product_id,
            year_range = ?year_range,
            "metafield update requested"
        );

        let years = updater
            .update_vehicle_year_range(product_id.as_deref(), year_range.as_deref())
            .await?;

        Ok::<_, UpdateError>(HttpResponse::Ok().json(ApiResponse::success(
            UPDATED_MESSAGE,
            years.into_vec(),
        )))
    }
    .instrument(span)
    .await
}
