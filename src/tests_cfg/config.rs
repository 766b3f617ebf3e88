use crate::{
    config::{self, Config},
    logger,
};

#[must_use]
pub fn test_config() -> Config {
    Config {
        logger: config::Logger {
            enable: false,
            pretty_backtrace: false,
            level: logger::LogLevel::Off,
            format: logger::Format::Json,
            override_filter: None,
            file_appender: None,
        },
        server: config::Server {
            binding: "localhost".to_string(),
            port: 3000,
            host: "http://localhost".to_string(),
            ident: None,
            middlewares: crate::controller::middleware::Config::default(),
        },
        settings: None,
    }
}
