use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use employee_gateway::config::{Config, LogFormat};
use employee_gateway::employees::{self, EmployeeService, HttpEmployeeRepository};
use employee_gateway::health;
use employee_gateway::middleware::RequestId;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize tracing
    let json = config.app.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting Employee Gateway");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Upstream employee API: {}", config.upstream.base_url);

    // One HTTP client shared by all workers
    let client = reqwest::Client::builder().build()?;
    let repository = Arc::new(HttpEmployeeRepository::new(client, &config.upstream)?);
    let service = Arc::new(EmployeeService::new(repository));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(service.clone()))
            .configure(health::configure)
            .configure(employees::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
