//! Canonical field resolution for schemaless food records.
//!
//! Food exports disagree on column names (English, Hebrew, with and without
//! underscores), so fields are located by alias lists, fuzzy catalog matches
//! and a couple of last-resort heuristics. See [`ColumnResolver`].

#![deny(unsafe_code)]

pub mod numeric;
pub mod patterns;
pub mod resolver;
pub mod utils;

pub use numeric::{is_numeric_text, lenient_number, parse_number_prefix};
pub use resolver::{ColumnResolver, Resolution, ResolutionSource};
