// API route configuration

use crate::api::{errors, handlers};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Liveness
        .route("/", web::get().to(handlers::liveness))
        .service(
            web::resource("/update-product-metafield")
                .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
                .route(web::post().to(handlers::update_product_metafield)),
        );
}
