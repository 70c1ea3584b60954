use std::env;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("VITALIS_BUCKET").unwrap_or_else(|_| "vitalis".to_string());
    let predict_base_url =
        env::var("PREDICT_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    let s3 = vitalis_storage::client::build_client().await;
    let predict = vitalis_predict::client::PredictionClient::new(predict_base_url)
        .map_err(|e| eyre::eyre!(e))?;

    let state = AppState {
        s3,
        bucket,
        predict,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Assessment profiles (no auth — public schema data)
        .route("/profiles", get(routes::profiles::list_profiles))
        .route("/profiles/{id}", get(routes::profiles::get_profile_detail))
        // Protected routes
        .merge(
            Router::new()
                .route("/assessments", get(routes::assessments::list_assessments))
                .route("/assessments", post(routes::assessments::create_assessment))
                .route(
                    "/assessments/{id}",
                    delete(routes::assessments::delete_assessment),
                )
                .route_layer(axum_mw::from_fn(middleware::auth::require_auth)),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
