use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    extract::{Extension, FromRequest, Query, Request, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use juniper::http::graphiql::graphiql_source;
use juniper_axum::{extract::JuniperRequest, graphiql, playground, response::JuniperResponse};
use tracing::debug;

use crate::schema::Schema;
use crate::state::{AppData, AppState};

async fn execute(
    state: &AppState,
    schema: &Schema<'static>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    debug!("handling graphql request");
    let app_data: &AppData = state;
    JuniperResponse(request.execute(schema, app_data).await)
}

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<Arc<Schema<'static>>>,
    request: JuniperRequest,
) -> JuniperResponse {
    execute(&state, &schema, request).await
}

/// A GET without a `query` parameter is a browser visit, so it gets GraphiQL.
async fn graphql_or_landing(
    State(state): State<AppState>,
    Extension(schema): Extension<Arc<Schema<'static>>>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
) -> Response {
    if !params.contains_key("query") {
        return Html(graphiql_source("/", None)).into_response();
    }
    match <JuniperRequest>::from_request(request, &state).await {
        Ok(request) => execute(&state, &schema, request).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

pub fn build_router(state: AppState, schema: Schema<'static>) -> Router {
    Router::new()
        .route("/", get(graphql_or_landing).post(graphql))
        .route("/graphiql", get(graphiql("/", None)))
        .route("/playground", get(playground("/", None)))
        .with_state(state)
        .layer(Extension(Arc::new(schema)))
}
