use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use quotes_core::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use quotes_core::quotes::{self as core_quotes, Pagination};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::Authorized,
    error::ApiResult,
    main_lib::AppState,
    models::{NewQuote, Quote},
};

pub const PAGINATION_PAGE_HEADER: HeaderName = HeaderName::from_static("x-pagination-page");
pub const PAGINATION_SIZE_HEADER: HeaderName = HeaderName::from_static("x-pagination-size");
pub const PAGINATION_COUNT_HEADER: HeaderName = HeaderName::from_static("x-pagination-count");

/// Raw pagination query. Values that do not parse fall back to the defaults.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    #[serde(rename = "pagination-page")]
    pub page: Option<String>,
    #[serde(rename = "pagination-size")]
    pub size: Option<String>,
}

impl PaginationQuery {
    /// Keeps the first value of each parameter and ignores everything else.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = PaginationQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "pagination-page" => &mut query.page,
                "pagination-size" => &mut query.size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn to_pagination(&self) -> Pagination {
        let page = parse_or(self.page.as_deref(), DEFAULT_PAGE);
        let size = parse_or(self.size.as_deref(), DEFAULT_PAGE_SIZE);
        Pagination::new(page, size)
    }
}

fn parse_or(raw: Option<&str>, default: u32) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(default))
}

fn pagination_headers(pagination: Pagination, total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(PAGINATION_PAGE_HEADER, HeaderValue::from(pagination.page()));
    headers.insert(PAGINATION_SIZE_HEADER, HeaderValue::from(pagination.size()));
    headers.insert(PAGINATION_COUNT_HEADER, HeaderValue::from(total));
    headers
}

#[utoipa::path(
    get,
    path = "/quotes",
    params(PaginationQuery),
    responses((status = 200, description = "One page of quotes", body = [Quote]))
)]
pub async fn get_quotes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<(HeaderMap, Json<Vec<Quote>>)> {
    let query = query
        .map(|Query(pairs)| PaginationQuery::from_pairs(pairs))
        .unwrap_or_default();
    let pagination = query.to_pagination();
    let page = state.quote_service.get_quotes(pagination).await?;
    Ok((
        pagination_headers(pagination, page.total),
        Json(page.quotes.into_iter().map(Quote::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/quotes",
    request_body = NewQuote,
    responses(
        (status = 201, description = "Quote created", body = Quote),
        (status = 400, description = "Empty text or malformed body"),
        (status = 401, description = "Missing or wrong authorization key"),
        (status = 409, description = "A quote with the same text exists")
    )
)]
pub async fn add_quote(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewQuote>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    let Json(new_quote) = payload?;
    let created = state
        .quote_service
        .add_quote(core_quotes::NewQuote::from(new_quote))
        .await?;
    Ok((StatusCode::CREATED, Json(Quote::from(created))))
}

#[utoipa::path(
    put,
    path = "/quotes",
    request_body = [NewQuote],
    responses(
        (status = 201, description = "Collection replaced", body = [Quote]),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or wrong authorization key")
    )
)]
pub async fn set_quotes(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<NewQuote>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<Quote>>)> {
    let Json(new_quotes) = payload?;
    let created = state
        .quote_service
        .set_quotes(new_quotes.into_iter().map(Into::into).collect())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(Quote::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/random-quote",
    responses(
        (status = 200, description = "A random quote", body = Quote),
        (status = 404, description = "The collection is empty")
    )
)]
pub async fn random_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.random_quote().await?;
    Ok(Json(Quote::from(quote)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/quotes",
            get(get_quotes).post(add_quote).put(set_quotes),
        )
        .route("/random-quote", get(random_quote))
}
