// Shopify Admin GraphQL access

pub mod client;

pub use client::{MutationExecutor, ShopifyClient};
