//! Normalized collections: ordered ids plus an id -> record lookup, and the
//! helpers that derive new values from them without mutating the input.

pub mod collate;
pub mod model;
pub mod ops;
pub mod record;
pub mod render;

pub use model::{FieldLookup, Identified, NormalizedCollection};
pub use ops::{
    is_absent, project_excluding, project_into, sort_ids_by_keys, strip_empty_fields, SortOrder,
};
pub use record::{FieldValue, Record};
