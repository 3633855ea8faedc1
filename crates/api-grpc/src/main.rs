//! Standalone gRPC server binary.
//!
//! Runs the `tmr.v1.Tmr` service on its own. The workspace's main `tmr-run` binary runs both
//! gRPC and REST concurrently.

use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{pb::tmr_server::TmrServer, ApiKeyInterceptor, TmrService};
use api_shared::{ApiConfig, FILE_DESCRIPTOR_SET};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_grpc=info".parse()?)
                .add_directive("tmr=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ApiConfig::from_env()?;
    let addr = cfg.grpc_addr();

    if cfg.api_key().is_none() {
        tracing::warn!("API_KEY is not set; every gRPC call will be rejected");
    }

    tracing::info!("-- Starting TMR gRPC on {}", addr);

    let interceptor = ApiKeyInterceptor::new(cfg.api_key());
    let mut server_builder =
        Server::builder().add_service(TmrServer::with_interceptor(TmrService::default(), interceptor));

    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        server_builder = server_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    } else {
        tracing::info!("gRPC server reflection disabled");
    }

    server_builder.serve(addr).await?;

    Ok(())
}
