// HTTP mapping for update failures

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::api::models::ApiResponse;
use crate::metafield::UpdateError;

impl ResponseError for UpdateError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ApiResponse::error(self.to_string());
        if let Some(details) = self.details() {
            body = body.with_details(details.to_vec());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Undecodable request bodies are reported like missing fields.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejecting undecodable request body");
    UpdateError::Validation.into()
}
