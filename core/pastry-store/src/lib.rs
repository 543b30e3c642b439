//! In-memory pastry store.
//!
//! [`PastryStore`] owns an insertion-ordered list of [`PastryRecord`]s and
//! enforces the two invariants every operation must preserve:
//! - ids are assigned as one past the highest id ever issued and never reused
//! - no two records share a normalized name (see [`pastry_types::normalize_name`])
//!
//! The store is a plain owned value with `&mut self` mutators. Callers that
//! share it across threads wrap it in a lock and hold the guard for the whole
//! read-modify-write.

mod error;
mod seed;
mod store;

pub use error::{StoreError, StoreResult};
pub use seed::seed_records;
pub use store::PastryStore;
