use std::net::SocketAddr;

use anyhow::Context;
use axum::{routing::*, Router};
use http::StatusCode;
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{app_state::AppState, nearest_address::nearest_address_handler};
use crate::domain::ports::geocoding::{AddressProvider, IpLocator, PostalCodeProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub port: u16,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new<L, A, F>(config: HttpServerConfig, state: AppState<L, A, F>) -> anyhow::Result<Self>
    where
        L: IpLocator,
        A: AddressProvider,
        F: PostalCodeProvider,
    {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            });

        let router = router(state)
            .layer(trace_layer)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 0], config.port));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::debug!("listening on {}", addr);
        }
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

pub fn router<L, A, F>(state: AppState<L, A, F>) -> Router
where
    L: IpLocator,
    A: AddressProvider,
    F: PostalCodeProvider,
{
    Router::new()
        .route("/health", get(health_route))
        .route("/nearest-address", get(nearest_address_handler::<L, A, F>))
        .with_state(state)
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
