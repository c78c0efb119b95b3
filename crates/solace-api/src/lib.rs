//! solace-api
//!
//! JSON surface over the scoring engine and the wellness aggregator.
//! Stateless apart from the read-only instrument catalog; persistence and
//! authentication belong to the surrounding platform.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{key}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{key}/score",
            post(routes::instruments::score_answers),
        )
        .route(
            "/instruments/{key}/change",
            post(routes::instruments::detect_change),
        )
        .route(
            "/instruments/{key}/latest-change",
            post(routes::instruments::latest_change),
        )
        .route("/wellness/stats", post(routes::wellness::stats))
        .route("/wellness/chart", post(routes::wellness::chart))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
