//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod graphql;
pub mod health;

use crate::config::Settings;
use crate::graphql::{build_schema, WikiSchema};
use crate::middleware::request_logging_middleware;
use crate::services::WikiActions;
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub schema: WikiSchema,
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    // Create action service and schema
    let actions = WikiActions::new(settings.clone())?;
    let schema = build_schema(actions);

    // Create application state
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        schema,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(request_logging_middleware));

    // Create routes
    let router = Router::new()
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(middleware_stack);

    Ok(router)
}
