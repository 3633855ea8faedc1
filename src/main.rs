use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{ApiKeyInterceptor, TmrService};
use api_shared::pb::tmr_server::TmrServer;
use api_shared::{ApiConfig, FILE_DESCRIPTOR_SET};

/// Main entry point for the TMR decision support service
///
/// Starts both gRPC and REST servers concurrently:
/// - gRPC server on port 50051 (configurable via TMR_ADDR)
/// - REST server on port 3000 (configurable via TMR_REST_ADDR)
///
/// The gRPC server requires authentication via x-api-key header.
/// The REST server provides open access to recommendations and reference material.
///
/// # Environment Variables
/// - `TMR_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `TMR_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `API_KEY`: API key for gRPC authentication
/// - `TMR_ENABLE_REFLECTION`: "true" enables gRPC server reflection
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("tmr=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ApiConfig::from_env()?;
    run(cfg).await
}

/// Serves REST and gRPC until either server stops.
///
/// Whichever server fails first ends the run with its error; the other one is shut down.
async fn run(cfg: ApiConfig) -> anyhow::Result<()> {
    let grpc_addr = cfg.grpc_addr();
    let rest_addr = cfg.rest_addr();

    if cfg.api_key().is_none() {
        tracing::warn!("API_KEY is not set; every gRPC call will be rejected");
    }

    tracing::info!("++ Starting TMR gRPC on {}", grpc_addr);
    tracing::info!("++ Starting TMR REST on {}", rest_addr);

    // Start REST server
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    let mut rest_server =
        tokio::spawn(async move { axum::serve(listener, api_rest::router()).await });

    // Start gRPC server
    let mut grpc_builder = Server::builder().add_service(TmrServer::with_interceptor(
        TmrService::default(),
        ApiKeyInterceptor::new(cfg.api_key()),
    ));

    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        grpc_builder = grpc_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    }

    let grpc_server = grpc_builder.serve(grpc_addr);

    // Run both
    tokio::select! {
        rest_result = &mut rest_server => {
            let rest_result = rest_result
                .map_err(anyhow::Error::from)
                .and_then(|served| served.map_err(anyhow::Error::from));
            if let Err(e) = rest_result {
                tracing::error!("REST server failed: {}", e);
                return Err(e);
            }
        }
        grpc_result = grpc_server => {
            rest_server.abort();
            if let Err(e) = grpc_result {
                tracing::error!("gRPC server failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
