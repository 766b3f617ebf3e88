use async_trait::async_trait;
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
    routing::get,
};
use insta::assert_snapshot;
use landing_core::{
    app::{App, AppContext, Hooks},
    boot::{create_app, BootResult},
    config::Config,
    controller::{AppRoutes, Routes},
    environment::Environment,
    testing::prelude::*,
    Result,
};
use serial_test::serial;

/// The real application plus a route whose handler panics.
struct PanickingApp;

async fn explode() -> Result<Response> {
    panic!("landing renderer exploded")
}

#[async_trait]
impl Hooks for PanickingApp {
    fn app_name() -> &'static str {
        "landing_core"
    }

    async fn boot(environment: &Environment, config: Config) -> Result<BootResult> {
        create_app::<Self>(environment, config).await
    }

    fn routes(ctx: &AppContext) -> AppRoutes {
        App::routes(ctx).add_route(Routes::new().add("/explode", get(explode)))
    }
}

macro_rules! configure_insta {
    () => {
        let mut settings = insta::Settings::clone_current();
        settings.set_prepend_module_to_snapshot(false);
        for (pattern, replacement) in cleanup_request_id() {
            settings.add_filter(pattern, *replacement);
        }
        let _guard = settings.bind_to_scope();
    };
}

fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
#[serial]
async fn generates_request_id() {
    configure_insta!();

    request::<App, _, _>(|request, _ctx| async move {
        let response = request.get("/health/").await;
        assert_snapshot!(header_str(response.headers(), "x-request-id"), @"REQUEST_ID");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn echoes_sanitized_request_id() {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request
            .get("/")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("abc-123@edge=1"),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(header_str(response.headers(), "x-request-id"), "abc-123@edge1");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn sets_powered_by() {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.get("/health/").await;
        assert_eq!(header_str(response.headers(), "x-powered-by"), "landing-core");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn panicking_handler_gets_internal_error_body() {
    request::<PanickingApp, _, _>(|request, _ctx| async move {
        let response = request.get("/explode").await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<serde_json::Value>(),
            serde_json::json!({
                "error": "internal_server_error",
                "description": "Internal Server Error"
            })
        );
        assert!(!header_str(response.headers(), "x-request-id").is_empty());

        let health = request.get("/health/").await;
        assert_eq!(health.status_code(), StatusCode::OK);
    })
    .await;
}
