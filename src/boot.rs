//! # Application Bootstrapping and Logic
//! This module contains functions and structures for bootstrapping and running
//! your application.
use axum::Router;
use tracing::{info, warn};

use crate::{
    app::{AppContext, Hooks},
    banner::print_banner,
    config::Config,
    controller::ListRoutes,
    environment::Environment,
    Result,
};

pub struct BootResult {
    /// Application Context
    pub app_context: AppContext,
    /// Web server routes
    pub router: Router,
}

/// Configuration structure for serving an application.
pub struct ServeParams {
    /// The port number on which the server will listen for incoming
    /// connections.
    pub port: i32,
    /// The network address to which the server will bind. It specifies the
    /// interface to listen on.
    pub binding: String,
}

/// Runs the web server of the provided `BootResult`.
///
/// # Errors
///
/// When could not initialize the application.
pub async fn start<H: Hooks>(
    boot: BootResult,
    server_config: ServeParams,
    no_banner: bool,
) -> Result<()> {
    if !no_banner {
        print_banner(&boot, &server_config);
    }

    let BootResult {
        router,
        app_context: _,
    } = boot;

    H::serve(router, server_config).await?;
    info!("shutting down");
    Ok(())
}

/// Initializes the application context from the loaded configuration.
///
/// # Errors
/// Currently this function does not fail. this is for future functionality
pub async fn create_context<H: Hooks>(
    environment: &Environment,
    config: Config,
) -> Result<AppContext> {
    if config.logger.pretty_backtrace {
        std::env::set_var("RUST_BACKTRACE", "1");
        warn!(
            "pretty backtraces are enabled (this is great for development but has a runtime cost \
             for production. disable with `logger.pretty_backtrace` in your config yaml)"
        );
    }

    Ok(AppContext {
        environment: environment.clone(),
        config,
    })
}

/// Creates an application for the given environment.
///
/// # Errors
///
/// When could not create the application
pub async fn create_app<H: Hooks>(environment: &Environment, config: Config) -> Result<BootResult> {
    let app_context = create_context::<H>(environment, config).await?;
    run_app::<H>(app_context).await
}

/// Run the application hooks and initializers, then build the router.
///
/// # Errors
///
/// When could not create the application
pub async fn run_app<H: Hooks>(app_context: AppContext) -> Result<BootResult> {
    H::before_run(&app_context).await?;
    let initializers = H::initializers(&app_context).await?;
    info!(initializers = ?initializers.iter().map(|init| init.name()).collect::<Vec<_>>().join(","), "initializers loaded");
    for initializer in &initializers {
        initializer.before_run(&app_context).await?;
    }

    let app = H::routes(&app_context).to_router::<H>(app_context.clone(), Router::new())?;
    let mut router = H::after_routes(app, &app_context).await?;
    for initializer in &initializers {
        router = initializer.after_routes(router, &app_context).await?;
    }

    Ok(BootResult {
        app_context,
        router,
    })
}

#[must_use]
pub fn list_endpoints<H: Hooks>(ctx: &AppContext) -> Vec<ListRoutes> {
    H::routes(ctx).collect()
}

pub struct MiddlewareInfo {
    pub id: String,
    pub enabled: bool,
    pub detail: String,
}

#[must_use]
pub fn list_middlewares<H: Hooks>(ctx: &AppContext) -> Vec<MiddlewareInfo> {
    H::middlewares(ctx)
        .iter()
        .map(|m| MiddlewareInfo {
            id: m.name().to_string(),
            enabled: m.is_enabled(),
            detail: m.config().unwrap_or_default().to_string(),
        })
        .collect::<Vec<_>>()
}

/// Resolves on Ctrl-C, or on SIGTERM where supported.
///
/// # Panics
///
/// Panics when the signal handlers cannot be installed.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
