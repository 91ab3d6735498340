// Vehicle year range metafield: parsing, id handling, mutation building and
// the updater tying them to a MutationExecutor.

pub mod mutation;
pub mod product_id;
pub mod updater;
pub mod year_range;

pub use product_id::ProductId;
pub use updater::{RangeMetafieldUpdater, UpdateError};
pub use year_range::{YearList, YearRange};
