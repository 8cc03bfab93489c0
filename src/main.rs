use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use portfolio_catalog::{
    constants::START_TIME,
    db::mongo::MongoStore,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::{AppConfig, LogFormat, StorageBackend},
    web::{cors::build_cors, telemetry::init_tracing},
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.effective_log_format());
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    Lazy::force(&START_TIME);

    let (app_state, store) = match config.storage {
        StorageBackend::Mongo => {
            let store = MongoStore::connect(&config.database_url, &config.database_name, &config.name)
                .await
                .context("Failed to connect to the document store")?;
            (AppState::with_mongo(store.database()), Some(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            (AppState::in_memory(), None)
        }
    };
    let app_state = web::Data::new(app_state);

    let server_addr = config.server_addr();

    tracing::info!(
        "Starting Portfolio Catalog API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .disable_signals()
    .run();

    let handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        res = server_task => {
            res.context("Server task panicked")?.context("Server error")?;
        }
        _ = shutdown_signal() => {
            handle.stop(true).await;
        }
    }

    if let Some(store) = store {
        store.shutdown().await;
    }

    tracing::info!("Portfolio Catalog API stopped");
    Ok(())
}
