use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gdh_api::{
    config::Config,
    db,
    rpc::{self, GrpcAuthClient, GrpcUserClient},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about = "Device, meta and user gateway API")]
struct Cli {
    /// Human-readable debug logging instead of JSON lines.
    #[arg(long)]
    debug: bool,

    /// Apply the embedded schema migrations before serving.
    #[arg(long)]
    migrate: bool,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if debug {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    info!(version = env!("CARGO_PKG_VERSION"), "starting gateway");

    let config = Arc::new(Config::from_env()?);

    let pool = db::create_pool(&config.database_url).await?;
    info!("Database connected");
    if cli.migrate {
        db::run_migrations(&pool).await?;
        info!("Migrations applied");
    }

    let channel = rpc::connect(&config.auth_grpc_server, config.rpc_timeout).await?;
    let auth_client = Arc::new(GrpcAuthClient::new(channel.clone()));
    let user_client = Arc::new(GrpcUserClient::new(channel));

    let state = AppState::new(config.clone(), pool, auth_client, user_client);
    let app = gdh_api::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway API listening on {}", addr);

    let stop = Arc::new(Notify::new());
    let server = {
        let stop = stop.clone();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
                .with_graceful_shutdown(async move { stop.notified().await })
                .await
        })
    };

    shutdown_signal().await;
    info!(grace = ?config.shutdown_grace, "shutdown requested, draining connections");
    stop.notify_one();

    match tokio::time::timeout(config.shutdown_grace, server).await {
        Ok(joined) => joined??,
        Err(_) => warn!("grace period expired with requests still in flight"),
    }

    info!("Gateway stopped");
    Ok(())
}
