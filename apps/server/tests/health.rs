mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

use common::{build_test_app, get, send};

#[tokio::test]
async fn healthz_reports_ok() {
    let app = build_test_app(None).await;

    let (status, headers, body) = send(&app.router, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_lists_quote_routes() {
    let app = build_test_app(None).await;

    let (status, _, body) = send(&app.router, get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/quotes"));
    assert!(paths.contains_key("/random-quote"));
    assert!(paths.contains_key("/healthz"));
}

#[tokio::test]
async fn cross_origin_reads_see_pagination_headers() {
    let app = build_test_app(None).await;

    let request = Request::builder()
        .uri("/quotes")
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let exposed = headers[header::ACCESS_CONTROL_EXPOSE_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(exposed.contains("x-pagination-count"));
}
