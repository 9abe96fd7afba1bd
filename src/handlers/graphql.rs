//! GraphQL endpoint handlers
//!
//! POST /graphql executes queries; GET /graphql serves the GraphiQL IDE

use crate::handlers::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

/// Execute a GraphQL request against the schema
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// Serve the GraphiQL IDE for manual exploration
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
