use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{NewQuote, Quote},
};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod quotes;

pub use quotes::{PAGINATION_COUNT_HEADER, PAGINATION_PAGE_HEADER, PAGINATION_SIZE_HEADER};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        quotes::get_quotes,
        quotes::add_quote,
        quotes::set_quotes,
        quotes::random_quote
    ),
    components(schemas(Quote, NewQuote))
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    cors.allow_methods([Method::GET]).expose_headers([
        PAGINATION_PAGE_HEADER,
        PAGINATION_SIZE_HEADER,
        PAGINATION_COUNT_HEADER,
    ])
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/healthz", get(healthz))
        .merge(quotes::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
