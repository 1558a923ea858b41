//! Header canonicalization for uploaded datasets.
//!
//! Raw headers arrive with arbitrary casing, spacing and punctuation. This
//! crate reduces them to comparison keys, resolves the keys against a fixed
//! table of canonical fields, and rewrites decoded rows onto those names.

#![deny(unsafe_code)]

mod canonical;
mod normalize;
mod rows;

pub use canonical::{
    CANONICAL_FIELD_MAP, canonical_field, canonical_field_for_header, create_header_mapping,
};
pub use normalize::{normalize_header, normalize_optional_header, normalize_value};
pub use rows::{map_row_to_canonical, map_rows_to_canonical};
