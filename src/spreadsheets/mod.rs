pub mod review_xlsx;

pub use review_xlsx::export_review_xlsx;
