use std::future::IntoFuture;

use axum::http::{header, Method, StatusCode};
use futures_util::future::join_all;
use insta::assert_snapshot;
use landing_core::{app::App, testing::prelude::*};
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[case("/health/")]
#[case("/health")]
#[tokio::test]
#[serial]
async fn reports_healthy(#[case] uri: &'static str) {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.get(uri).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            response.json::<serde_json::Value>(),
            serde_json::json!({"healthy": true})
        );
        insta::allow_duplicates! {
            assert_snapshot!(response.text(), @r#"{"healthy":true}"#);
        }
    })
    .await;
}

#[rstest]
#[case(Method::POST)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
#[serial]
async fn rejects_other_methods(#[case] method: Method) {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.method(method, "/health/").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn ignores_query_and_headers() {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request
            .get("/health/")
            .add_query_param("verbose", "1")
            .add_header(
                header::ACCEPT,
                header::HeaderValue::from_static("text/html"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), r#"{"healthy":true}"#);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn concurrent_checks_are_identical() {
    request::<App, _, _>(|request, _ctx| async move {
        let responses = join_all((0..32).map(|_| request.get("/health/").into_future())).await;

        assert_eq!(responses.len(), 32);
        for response in responses {
            assert_eq!(response.status_code(), StatusCode::OK);
            assert_eq!(response.text(), r#"{"healthy":true}"#);
        }
    })
    .await;
}
