use async_trait::async_trait;
use axum::{
    http::{header, Method, StatusCode},
    Extension, Router as AxumRouter,
};
use landing_core::{
    app::{App, AppContext, Hooks},
    boot::{create_app, BootResult},
    config::Config,
    controller::{
        views::{engines::TeraView, ViewEngine},
        AppRoutes,
    },
    environment::Environment,
    testing::prelude::*,
    Error, Result,
};
use rstest::rstest;
use serial_test::serial;
use tree_fs::TreeBuilder;

/// The real routes and middleware, with a views directory that has no
/// `core/landing.html`.
struct MissingLandingTemplate;

#[async_trait]
impl Hooks for MissingLandingTemplate {
    fn app_name() -> &'static str {
        "landing_core"
    }

    async fn boot(environment: &Environment, config: Config) -> Result<BootResult> {
        create_app::<Self>(environment, config).await
    }

    fn routes(ctx: &AppContext) -> AppRoutes {
        App::routes(ctx)
    }

    async fn after_routes(router: AxumRouter, _ctx: &AppContext) -> Result<AxumRouter> {
        let tree = TreeBuilder::default()
            .add("views/other.html", "<p>other</p>")
            .create()
            .map_err(|err| Error::string(&err.to_string()))?;
        let engine = TeraView::from_custom_dir(&tree.root.join("views"))?;
        Ok(router.layer(Extension(ViewEngine::from(engine))))
    }
}

#[rstest]
#[case(Method::GET)]
#[case(Method::POST)]
#[case(Method::PUT)]
#[tokio::test]
#[serial]
async fn renders_landing_page(#[case] method: Method) {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.method(method, "/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let body = response.text();
        assert!(body.contains("<html"));
        assert!(body.contains("Welcome"));
    })
    .await;
}

#[tokio::test]
#[serial]
async fn rendering_is_stable() {
    request::<App, _, _>(|request, _ctx| async move {
        let first = request.get("/").await.text();
        let second = request.get("/").await.text();
        assert_eq!(first, second);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn unknown_path_is_not_found() {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.get("/nowhere").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    })
    .await;
}

#[rstest]
#[case(Method::GET)]
#[case(Method::POST)]
#[tokio::test]
#[serial]
async fn missing_template_is_a_server_error(#[case] method: Method) {
    request::<MissingLandingTemplate, _, _>(|request, _ctx| async move {
        let response = request.method(method, "/").await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<serde_json::Value>(),
            serde_json::json!({
                "error": "internal_server_error",
                "description": "Internal Server Error"
            })
        );
        assert!(response.headers().contains_key("x-request-id"));

        let health = request.get("/health/").await;
        assert_eq!(health.status_code(), StatusCode::OK);
    })
    .await;
}
