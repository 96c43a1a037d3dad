mod cells;
mod upload;

pub use upload::{parse_listings, UploadError};
