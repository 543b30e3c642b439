//! Core pastry types.
//!
//! This crate defines the record model shared by the store and the HTTP API:
//! - [`PastryRecord`] — a stored pastry with its assigned [`PastryId`]
//! - [`PastryInput`] / [`PastryUpdate`] — validated create and partial-update payloads
//! - [`Schema`] — validates untyped JSON into the payload types, collecting
//!   every field-level [`Issue`] instead of stopping at the first
//! - [`normalize_name`] — the comparison key behind the name uniqueness rule

mod issue;
mod name;
mod record;
mod schema;

pub use issue::{Issue, IssueKind, ValidationError, ValidationResult};
pub use name::{names_match, normalize_name};
pub use record::{Allergen, PastryId, PastryInput, PastryRecord, PastryUpdate};
pub use schema::{
    DESCRIPTION_MAX, DESCRIPTION_MIN, NAME_MAX, NAME_MIN, Schema, SchemaProfile, ValidationMode,
};
