// responses/xlsx.rs
use crate::responses::{build_attachment, ResultResp};
use astra::Body;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return XLSX file as HTTP response
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    build_attachment(XLSX_CONTENT_TYPE, filename, Body::from(buffer))
}
