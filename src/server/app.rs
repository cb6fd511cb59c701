use anyhow::{anyhow, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[cfg(feature = "graphql")]
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
#[cfg(feature = "graphql")]
use axum::{extract::State, response::IntoResponse};
#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLSchema};

use super::handlers::{health, hello};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        #[cfg(feature = "graphql")]
        graphql_schema: build_schema(db.clone()),
        db,
    };

    let allow_origin: AllowOrigin = match cors_origin {
        Some(origin) => origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?
            .into(),
        None => Any.into(),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    let mut app = Router::new()
        .route("/health", get(health::health_check))
        .route("/hello", post(hello::hello));

    #[cfg(feature = "graphql")]
    {
        app = app.route("/graphql", get(graphql_playground).post(graphql_handler));
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

#[cfg(feature = "graphql")]
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    tracing::debug!("GraphQL request completed");
    response.into()
}

#[cfg(feature = "graphql")]
async fn graphql_playground() -> impl IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
