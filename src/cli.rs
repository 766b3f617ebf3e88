//! Command-line interface for running the application and inspecting how it
//! is wired.
//!
//! # Example
//!
//! ```rust,ignore
//! use landing_core::{app::App, cli};
//!
//! #[tokio::main]
//! async fn main() -> landing_core::Result<()> {
//!     cli::main::<App>().await
//! }
//! ```
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use crate::{
    app::{AppContext, Hooks},
    boot::{create_context, list_endpoints, list_middlewares, start, ServeParams},
    environment::{resolve_from_env, Environment, DEFAULT_ENVIRONMENT},
    logger,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Specify the environment
    #[arg(short, long, global = true, help = &format!("Specify the environment [default: {}]", DEFAULT_ENVIRONMENT))]
    environment: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an app
    #[clap(alias("s"))]
    Start {
        /// server bind address
        #[arg(short, long, action)]
        binding: Option<String>,
        /// server port address
        #[arg(short, long, action)]
        port: Option<i32>,
        /// disable the banner display
        #[arg(short, long, action = ArgAction::SetTrue)]
        no_banner: bool,
    },
    /// Describe all application endpoints
    Routes {},
    /// Describe all application middlewares
    Middleware {
        // print out the middleware configurations.
        #[arg(short = 'c', long = "config", action)]
        show_config: bool,
    },
    /// Display the app version
    Version {},
}

/// # Main CLI Function
///
/// Parses the command line, loads the configuration of the selected
/// environment, installs the logger and runs the requested command.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded, the logger
/// cannot be installed, or the command fails.
pub async fn main<H: Hooks>() -> crate::Result<()> {
    let cli = Cli::parse();
    let environment: Environment = cli.environment.unwrap_or_else(resolve_from_env).into();

    let config = H::load_config(&environment).await?;

    if !H::init_logger(&config, &environment)? {
        logger::init::<H>(&config.logger)?;
    }

    let task_span = create_root_span(&environment);
    let _guard = task_span.enter();

    match cli.command {
        Commands::Start {
            binding,
            port,
            no_banner,
        } => {
            let boot_result = H::boot(&environment, config).await?;
            let serve_params = ServeParams {
                port: port.unwrap_or(boot_result.app_context.config.server.port),
                binding: binding
                    .unwrap_or_else(|| boot_result.app_context.config.server.binding.to_string()),
            };
            start::<H>(boot_result, serve_params, no_banner).await?;
        }
        Commands::Routes {} => {
            let app_context = create_context::<H>(&environment, config).await?;
            show_list_endpoints::<H>(&app_context);
        }
        Commands::Middleware { show_config } => {
            let app_context = create_context::<H>(&environment, config).await?;
            let middlewares = list_middlewares::<H>(&app_context);
            for middleware in middlewares.iter().filter(|m| m.enabled) {
                println!(
                    "{:<22} {}",
                    middleware.id.bold(),
                    if show_config {
                        middleware.detail.as_str()
                    } else {
                        ""
                    }
                );
            }
            println!("\n");
            for middleware in middlewares.iter().filter(|m| !m.enabled) {
                println!("{:<22} (disabled)", middleware.id.bold().dimmed());
            }
        }
        Commands::Version {} => {
            println!("{}", H::app_version());
        }
    }
    Ok(())
}

fn show_list_endpoints<H: Hooks>(ctx: &AppContext) {
    let mut routes = list_endpoints::<H>(ctx);
    routes.sort_by(|a, b| a.uri.cmp(&b.uri));
    for router in routes {
        println!("{router}");
    }
}

fn create_root_span(environment: &Environment) -> tracing::Span {
    tracing::span!(tracing::Level::DEBUG, "app", environment = %environment)
}
