use crate::router::handle;
use crate::tests::utils::{body_bytes, content_type, listing_csv, post, test_config, STUDIO_ROW};

#[test]
fn export_returns_xlsx_attachment() {
    let csv = listing_csv(&[STUDIO_ROW]);
    let resp = handle(post("/export?filename=listings.csv", csv), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        content_type(&resp),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"listings_review_"));
    assert!(disposition.ends_with(".xlsx\""));

    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn export_rejects_bad_upload() {
    let err = handle(post("/export?filename=listings.xls", "x"), &test_config())
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 400);
}

#[test]
fn export_survives_control_characters_in_filename() {
    let csv = listing_csv(&[STUDIO_ROW]);
    let resp = handle(post("/export?filename=a%0D%0Ab.csv", csv), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"a__b_review_"));
}
