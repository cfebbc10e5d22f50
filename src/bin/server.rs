use log::{error, info, warn};

use user_directory::config::ServerConfig;
use user_directory::core::AppContext;
use user_directory::routes;

#[tokio::main]
async fn main() {
    // Initialize env
    let dotenv_result = dotenvy::dotenv();

    // Initialize logging
    env_logger::init();

    match dotenv_result {
        Ok(path) => info!("Environment variables loaded from {}", path.display()),
        Err(e) => warn!("Failed to load .env file: {}", e),
    };

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Configuration: host={}, port={}, database={}, tls={}",
        config.host, config.port, config.database_url, config.enable_tls
    );

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // Create the service context (storage pool + token signer)
    let ctx = match AppContext::initialize(&config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to initialize user store: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Issuing access tokens valid for {} hours",
        ctx.token_manager().ttl().as_secs() / 3600
    );

    let routes = routes(ctx.clone());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received");
    };

    match (config.enable_tls, &config.tls_cert_path, &config.tls_key_path) {
        (true, Some(cert_path), Some(key_path)) => {
            let (bound, server) = warp::serve(routes)
                .tls()
                .cert_path(cert_path)
                .key_path(key_path)
                .bind_with_graceful_shutdown(addr, shutdown);
            info!("Starting user directory on https://{}", bound);
            server.await;
        }
        _ => match warp::serve(routes).try_bind_with_graceful_shutdown(addr, shutdown) {
            Ok((bound, server)) => {
                info!("Starting user directory on http://{}", bound);
                server.await;
            }
            Err(e) => {
                error!("Failed to bind {}: {}", addr, e);
                ctx.shutdown().await;
                std::process::exit(1);
            }
        },
    }

    ctx.shutdown().await;
    info!("Server stopped");
}
