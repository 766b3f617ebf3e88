//! This module contains the core components and traits for building the web
//! server application, and the [`App`] that serves the landing page and the
//! health check.
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router as AxumRouter;

use crate::{
    boot::{self, BootResult, ServeParams},
    config::Config,
    controller::{middleware, middleware::MiddlewareLayer, AppRoutes},
    controllers,
    environment::Environment,
    initializers, Result,
};

/// Represents the application context for a web server.
///
/// This struct encapsulates the configuration and environment the web
/// server runs with. It is the axum state of every route and is read only
/// once the server runs.
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AppContext {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Configuration settings for the application
    pub config: Config,
}

/// A trait that defines hooks for customizing and extending the behavior of a
/// web server application.
#[async_trait]
pub trait Hooks: Send {
    /// Defines the composite app version
    #[must_use]
    fn app_version() -> String {
        "dev".to_string()
    }

    /// Defines the crate name
    ///
    /// Example
    /// ```rust
    /// fn app_name() -> &'static str {
    ///     env!("CARGO_CRATE_NAME")
    /// }
    /// ```
    fn app_name() -> &'static str;

    /// Loads the configuration settings for the application based on the
    /// given environment.
    ///
    /// # Errors
    /// Could not load the configuration files.
    async fn load_config(env: &Environment) -> Result<Config> {
        env.load()
    }

    /// Initializes and boots the application for the given environment.
    ///
    /// ```rust,ignore
    /// async fn boot(environment: &Environment, config: Config) -> Result<BootResult> {
    ///     create_app::<Self>(environment, config).await
    /// }
    /// ````
    ///
    /// # Errors
    /// Could not boot the application
    async fn boot(environment: &Environment, config: Config) -> Result<BootResult>;

    /// Start serving the Axum web application on the provided address and
    /// port, until a shutdown signal arrives.
    ///
    /// # Errors
    /// Could not bind the address or serve the application.
    async fn serve(app: AxumRouter, server_config: ServeParams) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&format!(
            "{}:{}",
            server_config.binding, server_config.port
        ))
        .await?;

        let app = app.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(boot::shutdown_signal())
            .await?;

        Ok(())
    }

    /// Override and return `Ok(true)` to provide an alternative logging and
    /// tracing stack of your own.
    /// When returning `Ok(true)`, the application will *not* initialize its
    /// own logger, so you should set up a complete tracing and logging stack.
    ///
    /// # Errors
    /// If fails returns an error
    fn init_logger(_config: &Config, _env: &Environment) -> Result<bool> {
        Ok(false)
    }

    /// Defines the application's routing configuration.
    fn routes(_ctx: &AppContext) -> AppRoutes;

    /// Returns the middleware stack wrapped around every route. Override to
    /// add, drop or reorder layers.
    fn middlewares(ctx: &AppContext) -> Vec<Box<dyn MiddlewareLayer>> {
        middleware::default_middleware_stack(ctx)
    }

    /// Provide a list of initializers
    /// An initializer can be used to seamlessly add functionality to your app
    /// or to initialize some aspects of it.
    async fn initializers(_ctx: &AppContext) -> Result<Vec<Box<dyn Initializer>>> {
        Ok(vec![])
    }

    /// Calling the function before run the app
    /// You can now code some custom loading of resources or other things before
    /// the app runs
    async fn before_run(_app_context: &AppContext) -> Result<()> {
        Ok(())
    }

    /// Invoke this function after the routers have been constructed. This
    /// function enables you to configure custom Axum logics, such as layers,
    /// that are compatible with Axum.
    ///
    /// # Errors
    /// Axum router error
    async fn after_routes(router: AxumRouter, _ctx: &AppContext) -> Result<AxumRouter> {
        Ok(router)
    }
}

/// An initializer.
/// Initializers should be kept in `src/initializers/`
#[async_trait]
pub trait Initializer: Sync + Send {
    /// The initializer name or identifier
    fn name(&self) -> String;

    /// Occurs after the app's `before_run`.
    /// Use this to for one-time initializations, load caches, perform web
    /// hooks, etc.
    async fn before_run(&self, _app_context: &AppContext) -> Result<()> {
        Ok(())
    }

    /// Occurs after the app's `after_routes`.
    /// Use this to compose additional functionality and wire it into an Axum
    /// Router
    async fn after_routes(&self, router: AxumRouter, _ctx: &AppContext) -> Result<AxumRouter> {
        Ok(router)
    }
}

pub struct App;

#[async_trait]
impl Hooks for App {
    fn app_version() -> String {
        format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            option_env!("BUILD_SHA")
                .or(option_env!("GITHUB_SHA"))
                .unwrap_or("dev")
        )
    }

    fn app_name() -> &'static str {
        env!("CARGO_CRATE_NAME")
    }

    async fn boot(environment: &Environment, config: Config) -> Result<BootResult> {
        boot::create_app::<Self>(environment, config).await
    }

    fn routes(_ctx: &AppContext) -> AppRoutes {
        AppRoutes::with_default_routes().add_route(controllers::landing::routes())
    }

    async fn initializers(_ctx: &AppContext) -> Result<Vec<Box<dyn Initializer>>> {
        Ok(vec![Box::new(
            initializers::view_engine::ViewEngineInitializer,
        )])
    }
}
