pub mod api;
pub mod config;
pub mod metafield;
pub mod shopify;
pub mod tracing;

pub mod util {
    pub mod env;
}

pub use metafield::{RangeMetafieldUpdater, UpdateError, YearList, YearRange};
pub use shopify::{MutationExecutor, ShopifyClient};
