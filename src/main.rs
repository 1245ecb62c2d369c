mod config;
mod error;
mod greeting;
mod greeting_endpoint;
mod host;

use crate::config::Config;
use crate::greeting_endpoint::demo_function;
use crate::host::{AuthLevel, FunctionApp, HttpHost};
use axum::http::Method;
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .init();

    let app = FunctionApp::new(&config.route_prefix).register_route(
        "DemoFunction",
        &[Method::GET, Method::POST],
        AuthLevel::Anonymous,
        demo_function,
    )?;

    app.run(config.runtime).await
}
