use async_trait::async_trait;
use axum::{Extension, Router as AxumRouter};
use tracing::info;

use crate::{
    app::{AppContext, Initializer},
    controller::views::{engines, ViewEngine},
    Result,
};

/// Loads the Tera templates under `assets/views` and makes them available to
/// handlers through the [`ViewEngine`] extractor.
#[allow(clippy::module_name_repetitions)]
pub struct ViewEngineInitializer;

#[async_trait]
impl Initializer for ViewEngineInitializer {
    fn name(&self) -> String {
        "view-engine".to_string()
    }

    async fn after_routes(&self, router: AxumRouter, _ctx: &AppContext) -> Result<AxumRouter> {
        let tera_engine = engines::TeraView::build()?;
        info!("views loaded");

        Ok(router.layer(Extension(ViewEngine::from(tera_engine))))
    }
}
