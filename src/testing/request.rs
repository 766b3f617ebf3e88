use std::net::SocketAddr;

use axum_test::{TestServer, TestServerConfig};

use crate::{
    app::{AppContext, Hooks},
    boot::BootResult,
    environment::Environment,
    Result,
};

/// Configuration for making requests in the test server.
pub struct RequestConfig {
    /// Determines whether cookies should be saved for future requests.
    pub save_cookies: bool,
    /// The default content type for all requests.
    pub default_content_type: Option<String>,
    /// The default scheme to use for requests (e.g., "http" or "https").
    pub default_scheme: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        RequestConfigBuilder::new().build()
    }
}

/// Builder pattern for constructing [`RequestConfig`] instances.
pub struct RequestConfigBuilder {
    save_cookies: bool,
    default_content_type: Option<String>,
    default_scheme: String,
}

impl RequestConfigBuilder {
    /// Creates a new [`RequestConfigBuilder`] with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            save_cookies: false,
            default_content_type: Some("application/json".to_string()),
            default_scheme: "http".to_string(),
        }
    }

    /// Sets whether cookies should be saved for future requests.
    #[must_use]
    pub fn save_cookies(mut self, save: bool) -> Self {
        self.save_cookies = save;
        self
    }

    /// Sets the default content type for requests.
    #[must_use]
    pub fn default_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.default_content_type = Some(content_type.into());
        self
    }

    /// Sets the default scheme to use for requests.
    #[must_use]
    pub fn default_scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// Builds and returns a `RequestConfig` instance.
    #[must_use]
    pub fn build(self) -> RequestConfig {
        RequestConfig {
            save_cookies: self.save_cookies,
            default_content_type: self.default_content_type,
            default_scheme: self.default_scheme,
        }
    }
}

impl Default for RequestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Implement the From trait for automatic conversion
impl From<RequestConfig> for TestServerConfig {
    fn from(request_config: RequestConfig) -> Self {
        Self {
            default_content_type: request_config.default_content_type,
            save_cookies: request_config.save_cookies,
            default_scheme: Some(request_config.default_scheme),
            ..Default::default()
        }
    }
}

/// Bootstraps test application with test environment hard coded.
///
/// # Example
///
/// ```rust,ignore
/// use landing_core::app::App;
/// use landing_core::testing::prelude::*;
///
/// #[tokio::test]
/// async fn boots() {
///     let boot = boot_test::<App>().await.unwrap();
/// }
/// ```
///
/// # Errors
/// when could not bootstrap the test environment
pub async fn boot_test<H: Hooks>() -> Result<BootResult> {
    let config = H::load_config(&Environment::Test).await?;
    let boot = H::boot(&Environment::Test, config).await?;
    Ok(boot)
}

#[allow(clippy::future_not_send)]
async fn request_internal<F, Fut>(callback: F, boot: &BootResult, test_server_config: RequestConfig)
where
    F: FnOnce(TestServer, AppContext) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let routes = boot.router.clone();
    let server = TestServer::new_with_config(
        routes.into_make_service_with_connect_info::<SocketAddr>(),
        test_server_config,
    )
    .unwrap();

    callback(server, boot.app_context.clone()).await;
}

/// Executes a test server request using the provided callback and the default boot process.
///
/// The `callback` is called with the test server and the application context.
///
/// # Panics
/// When the test app cannot be booted
///
/// # Example
///
/// ```rust,ignore
/// use landing_core::app::App;
/// use landing_core::testing::prelude::*;
///
/// #[tokio::test]
/// #[serial]
/// async fn health_is_ok() {
///     request::<App, _, _>(|request, _ctx| async move {
///         request.get("/health/").await.assert_status_ok();
///     })
///     .await;
/// }
/// ```
#[allow(clippy::future_not_send)]
pub async fn request<H: Hooks, F, Fut>(callback: F)
where
    F: FnOnce(TestServer, AppContext) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    request_with_config::<H, F, Fut>(RequestConfig::default(), callback).await;
}

/// Executes a test server request using a custom [`RequestConfig`].
///
/// Same as [`request`], with `config` customizing the test server.
///
/// # Panics
/// When the test request cannot be initialized, such as when the test app fails to start.
///
/// # Example
/// ```rust,ignore
/// let config = RequestConfigBuilder::new().save_cookies(true).build();
/// request_with_config::<App, _, _>(config, |request, ctx| async move {
///     let response = request.get("/health/").await;
/// });
/// ```
pub async fn request_with_config<H: Hooks, F, Fut>(config: RequestConfig, callback: F)
where
    F: FnOnce(TestServer, AppContext) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let boot: BootResult = boot_test::<H>().await.unwrap();
    request_internal::<F, Fut>(callback, &boot, config).await;
}
