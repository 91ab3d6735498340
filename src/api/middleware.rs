// Request logging, compression and CORS

use actix_web::middleware::{Compress, Logger};

pub fn setup_middleware() -> (Logger, Compress) {
    let logger = Logger::default();
    let compress = Compress::default();
    (logger, compress)
}

use actix_cors::Cors;
use actix_web::http::header;

/// Any origin; GET and POST; Content-Type and Authorization headers.
pub fn setup_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}
