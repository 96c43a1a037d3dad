use crate::router::handle;
use crate::tests::utils::{
    body_string, content_type, listing_csv, post, test_config, INCOMPLETE_ROW, STUDIO_ROW,
};
use serde_json::Value;

#[test]
fn review_api_returns_rows_and_summary() {
    let csv = listing_csv(&[STUDIO_ROW, INCOMPLETE_ROW]);
    let resp = handle(post("/api/review?filename=a.csv", csv), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["summary"]["file_name"], "a.csv");
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["publishable"], 1);
    assert_eq!(json["summary"]["flagged"], 1);

    let first = &json["rows"][0];
    assert_eq!(first["number"], 1);
    assert_eq!(first["valid"], true);
    assert_eq!(first["labels"]["status"][0], "Agent post");
    assert_eq!(first["labels"]["amenities"], serde_json::json!(["Aircon", "Furniture"]));
    assert_eq!(first["record"]["condo_name-EN"], "Lumpini Park View");
    assert_eq!(first["record"]["bedroom"], 0.0);

    let second = &json["rows"][1];
    assert_eq!(second["valid"], false);
    assert_eq!(second["record"]["rent_price"], Value::Null);
}

#[test]
fn review_api_reports_rejections_as_json() {
    let resp = handle(post("/api/review?filename=a.csv", "nope\n1\n"), &test_config())
        .expect("Handler failed");

    assert_eq!(resp.status(), 400);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("listing template"));
}

#[test]
fn review_api_is_repeatable() {
    let csv = listing_csv(&[STUDIO_ROW, INCOMPLETE_ROW]);
    let first = body_string(
        handle(post("/api/review?filename=a.csv", csv.clone()), &test_config()).unwrap(),
    );
    let second =
        body_string(handle(post("/api/review?filename=a.csv", csv), &test_config()).unwrap());
    assert_eq!(first, second);
}

#[test]
fn review_api_reports_unparsed_cells() {
    let row = "4,Rhythm Sathorn,\"12,000\",,two,1,40,18,,,Sathorn view,Near BTS,,,,,,,,,";
    let csv = listing_csv(&[row]);
    let resp = handle(post("/api/review?filename=a.csv", csv), &test_config())
        .expect("Handler failed");

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let record = &json["rows"][0]["record"];
    assert_eq!(json["rows"][0]["valid"], true);
    assert_eq!(record["rent_price"], Value::Null);
    assert_eq!(record["unparsed"]["rent_price"], "12,000");
    assert_eq!(record["unparsed"]["bedroom"], "two");
}
