use crate::responses::{build, ResultResp};
use astra::Body;
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    build(
        status,
        mime::TEXT_HTML_UTF_8.as_ref(),
        Body::from(markup.into_string()),
    )
}
