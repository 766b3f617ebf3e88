use async_trait::async_trait;

use crate::{
    app::{AppContext, Hooks},
    boot::{self, BootResult},
    config::Config,
    controller::AppRoutes,
    environment::Environment,
    tests_cfg::config::test_config,
    Result,
};

#[must_use]
pub fn get_app_context() -> AppContext {
    AppContext {
        environment: Environment::Test,
        config: test_config(),
    }
}

/// Bare hooks with no routes and no initializers, for exercising the router
/// plumbing in isolation.
pub struct AppHook;

#[async_trait]
impl Hooks for AppHook {
    fn app_name() -> &'static str {
        "test-app"
    }

    async fn boot(environment: &Environment, config: Config) -> Result<BootResult> {
        boot::create_app::<Self>(environment, config).await
    }

    fn routes(_ctx: &AppContext) -> AppRoutes {
        AppRoutes::empty()
    }
}
