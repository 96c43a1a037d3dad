pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
pub use xlsx::xlsx_response;

pub fn text_response(status: u16, text: &'static str) -> ResultResp {
    build(status, mime::TEXT_PLAIN_UTF_8.as_ref(), Body::from(text))
}

fn build(status: u16, content_type: &str, body: Body) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
        .map_err(|_| ServerError::InternalError)
}

fn build_attachment(content_type: &str, filename: &str, body: Body) -> Result<Response, ServerError> {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(body)
        .map_err(|_| ServerError::InternalError)
}
