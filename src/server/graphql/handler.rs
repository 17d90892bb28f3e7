use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Extension,
};

use crate::server::{middleware::auth::CurrentUser, state::AppState};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Serves the GraphiQL explorer.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Executes a GraphQL request with the caller's identity in the request data.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state
        .schema
        .execute(request.into_inner().data(current_user))
        .await
        .into()
}
