use crate::config::Config;
use crate::domain::CANONICAL_HEADERS;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub const STUDIO_ROW: &str = "1,Lumpini Park View,12000,,0,1,28,7,TRUE,TRUE,Studio near park,Quiet unit,https://img.example/1.jpg,TRUE,,,TRUE,,,,";
pub const SALE_ROW: &str = "2,Noble Ploenchit,,8500000,2,2,80,30,FALSE,FALSE,Corner unit,City view,,,TRUE,,,,TRUE,,";
/// No prices and no title: flagged in the review.
pub const INCOMPLETE_ROW: &str = "3,Ideo Q,,,1,1,35,12,,,,Near BTS,,,,,,,,,";

pub fn test_config() -> Config {
    Config::default()
}

/// Header row followed by `rows`, newline-terminated.
pub fn listing_csv(rows: &[&str]) -> String {
    let mut out = CANONICAL_HEADERS.join(",");
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: impl Into<Vec<u8>>) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
