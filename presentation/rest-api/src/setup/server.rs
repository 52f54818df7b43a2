use poem::{
    EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(
        server: ServerConfig,
        cors: Cors,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        let addr = server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.auth_api,
                container.product_api,
            ),
            "Catalog Backend API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                },
                None,
            )
            .await?;
        Ok(())
    }
}
