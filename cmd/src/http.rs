use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use color_eyre::eyre::Result;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use super::api;

pub fn router() -> Router {
    Router::new()
        .route("/api/v1/render", post(api::render))
        .route("/api/v1/params", get(api::params))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn server(addr: SocketAddr) -> Result<()> {
    tracing::info!("start http server: {:?}", addr);
    axum::Server::bind(&addr)
        .serve(router().into_make_service())
        .await?;
    Ok(())
}
