pub mod fields;
pub mod labels;
pub mod listing;
pub mod review;
pub mod validation;

pub use fields::{FieldKind, ListingField, CANONICAL_HEADERS};
pub use listing::{CellValue, RawListingRecord};
pub use review::{build_review, CellDisplay, Review, ReviewColumn, ReviewRow};
