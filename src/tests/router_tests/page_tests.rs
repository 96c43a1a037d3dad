use crate::router::handle;
use crate::tests::utils::{body_string, content_type, get, test_config};

#[test]
fn upload_page_loads_empty() {
    let resp = handle(get("/"), &test_config()).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("Bulk Upload form"));
    assert!(body.contains("accept=\".csv\""));
    assert!(body.contains("listings uploaded"));
    assert!(!body.contains("<table"), "no review table before an upload");
}

#[test]
fn health_check() {
    let resp = handle(get("/health"), &test_config()).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/admin"), &test_config())
        .err()
        .expect("request should fail");
    assert_eq!(err.status(), 404);

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
