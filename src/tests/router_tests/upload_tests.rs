use crate::config::Config;
use crate::domain::CANONICAL_HEADERS;
use crate::router::handle;
use crate::tests::utils::{
    body_string, listing_csv, post, test_config, INCOMPLETE_ROW, SALE_ROW, STUDIO_ROW,
};

#[test]
fn upload_renders_review_table() {
    let csv = listing_csv(&[STUDIO_ROW, SALE_ROW, INCOMPLETE_ROW]);
    let resp = handle(post("/upload?filename=listings.csv", csv), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("listings.csv"));
    assert!(body.contains("2 ready to publish"));
    assert!(body.contains("Lumpini Park View"));
    assert!(body.contains("Studio"));
    assert!(body.contains("12000"));
    assert!(body.contains("/month"));
    assert!(body.contains("Agent post"));
    assert!(body.contains("รับ Co-Agent"));
    assert!(body.contains("not found"), "missing title is marked");
    assert_eq!(body.matches("row-number error").count(), 1);
    assert_eq!(body.matches("data-valid=\"true\"").count(), 2);
}

#[test]
fn filename_is_url_decoded() {
    let csv = listing_csv(&[STUDIO_ROW]);
    let resp = handle(
        post("/upload?filename=bangkok%20listings.csv", csv),
        &test_config(),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("bangkok listings.csv"));
}

#[test]
fn wrong_extension_is_rejected_with_reset_form() {
    let csv = listing_csv(&[STUDIO_ROW]);
    let resp = handle(post("/upload?filename=listings.txt", csv), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Only .csv files are accepted"));
    assert!(body.contains("id=\"csv-file\""));
    assert!(!body.contains("Lumpini Park View"));
}

#[test]
fn missing_filename_is_rejected() {
    let resp = handle(post("/upload", listing_csv(&[])), &test_config()).expect("Handler failed");
    assert_eq!(resp.status(), 400);
}

#[test]
fn reordered_header_is_rejected() {
    let mut headers = CANONICAL_HEADERS.to_vec();
    headers.reverse();
    let csv = format!("{}\n{}\n", headers.join(","), STUDIO_ROW);

    let resp = handle(post("/upload?filename=a.csv", csv), &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("do not match the listing template"));
    assert!(!body.contains("<table"));
}

#[test]
fn malformed_row_rejects_whole_file() {
    let csv = listing_csv(&[STUDIO_ROW, "9,Short row"]);
    let resp = handle(post("/upload?filename=a.csv", csv), &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Could not read CSV"));
    assert!(!body.contains("Lumpini Park View"));
}

#[test]
fn oversized_upload_is_rejected() {
    let cfg = Config {
        max_upload_bytes: 64,
        ..test_config()
    };
    let csv = listing_csv(&[STUDIO_ROW]);
    let resp = handle(post("/upload?filename=a.csv", csv), &cfg).expect("Handler failed");

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("upload limit"));
}

#[test]
fn formatted_price_keeps_row_publishable() {
    let row = "4,Rhythm Sathorn,\"12,000\",,1,1,40,18,,,Sathorn view,Near BTS,,,,,,,,,";
    let csv = listing_csv(&[row]);
    let resp = handle(post("/upload?filename=a.csv", csv), &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("12,000"));
    assert!(body.contains("1 ready to publish"));
    assert_eq!(body.matches("row-number error").count(), 0);
}
