use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::timecards::use_cases::manage_timesheets::inbound::http as manage_http;
use crate::modules::timecards::use_cases::record_lines::inbound::http as lines_http;
use crate::modules::timecards::use_cases::transition_timesheet::inbound::http as transition_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/timesheets", get(manage_http::list).post(manage_http::create))
        .route(
            "/timesheets/{id}",
            get(manage_http::get_one).delete(manage_http::delete),
        )
        .route(
            "/timesheets/{id}/lines",
            get(lines_http::list).post(lines_http::add),
        )
        .route(
            "/timesheets/{id}/lines/{line_id}",
            get(lines_http::get_one)
                .post(lines_http::replace)
                .patch(lines_http::patch),
        )
        .route("/timesheets/{id}/transitions", get(transition_http::history))
        .route(
            "/timesheets/{id}/submittal",
            get(transition_http::get_submittal).post(transition_http::submit),
        )
        .route(
            "/timesheets/{id}/cancellation",
            get(transition_http::get_cancellation).post(transition_http::cancel),
        )
        .route(
            "/timesheets/{id}/rejection",
            get(transition_http::get_rejection).post(transition_http::reject),
        )
        .route(
            "/timesheets/{id}/approval",
            get(transition_http::get_approval).post(transition_http::approve),
        )
        .route(
            "/timesheets/{id}/Draft",
            get(transition_http::get_draft).post(transition_http::reopen),
        )
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
