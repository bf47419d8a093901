//! Display-name vocabularies.
//!
//! - `formatting`: school slug canonicalization
//! - `conferences`: conference abbreviations
//! - `positions`: position code long names
//! - `collation`: alphabetical ordering of display names

pub mod collation;
pub mod conferences;
pub mod formatting;
pub mod positions;

pub use collation::locale_cmp;
pub use conferences::conference_abbreviation;
pub use formatting::{MISSING_NAME, canonicalize, capitalize};
pub use positions::position_display_name;
