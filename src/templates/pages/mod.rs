pub mod review_table;
pub mod upload;

pub use review_table::review_table;
pub use upload::{upload_page, UploadVm};
