use crate::config::Config;
use crate::domain::{build_review, Review};
use crate::errors::ServerError;
use crate::ingest::parse_listings;
use crate::responses::{html_response, html_response_with_status, json_response, text_response, ResultResp};
use crate::spreadsheets::export_review_xlsx;
use crate::templates::pages::{upload_page, UploadVm};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn};

pub fn handle(mut req: Request, cfg: &Config) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(upload_page(&UploadVm::default())),
        ("GET", "/health") => text_response(200, "ok"),

        ("POST", "/upload") => match review_upload(&mut req, cfg) {
            Ok(review) => html_response(upload_page(&UploadVm {
                review: Some(review),
                error: None,
            })),
            Err(ServerError::Upload(err)) => html_response_with_status(
                400,
                upload_page(&UploadVm {
                    review: None,
                    error: Some(err.to_string()),
                }),
            ),
            Err(err) => Err(err),
        },

        ("POST", "/api/review") => match review_upload(&mut req, cfg) {
            Ok(review) => json_response(200, &review),
            Err(ServerError::Upload(err)) => json_response(
                400,
                &ApiError {
                    error: err.to_string(),
                },
            ),
            Err(err) => Err(err),
        },

        ("POST", "/export") => {
            let review = review_upload(&mut req, cfg)?;
            export_review_xlsx(&review)
        }

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

/// Reads the upload body, runs it through ingest and builds the review.
/// A rejected upload is logged here and surfaces as `ServerError::Upload`.
fn review_upload(req: &mut Request, cfg: &Config) -> Result<Review, ServerError> {
    let params = parse_query(req);
    let file_name = params.get("filename").map(String::as_str).unwrap_or("");

    let bytes = read_body(req, cfg.max_upload_bytes)?;

    let parsed = parse_listings(file_name, &bytes, cfg.max_upload_bytes).map_err(|err| {
        warn!(file_name, "upload rejected: {err}");
        ServerError::Upload(err)
    })?;

    let review = build_review(&parsed.file_name, parsed.records);
    info!(
        file_name,
        total = review.summary.total,
        flagged = review.summary.flagged,
        "review ready"
    );
    Ok(review)
}

/// Reads at most `limit + 1` bytes so an oversized upload is detectable
/// without buffering all of it.
fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read upload: {e}")))?;
    Ok(buf)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
