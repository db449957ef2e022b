use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use pfsearch_core::{SearchFilter, SearchResponse, SublocationsResponse};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SublocationsRequest {
    #[serde(default, deserialize_with = "pfsearch_core::filter::lookup_name")]
    pub main_location: String,
}

pub(super) async fn scrape(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SearchFilter>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(filter) = payload?;

    tracing::info!(
        request_id = %req_id.0,
        main_location = %filter.main_location,
        option = %filter.option,
        property_type = %filter.property_type,
        sub_location = filter.sub_location.as_deref(),
        "scrape requested"
    );

    let response = state.search.scrape(&filter).await?;
    Ok(Json(response))
}

pub(super) async fn sublocations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SublocationsRequest>, JsonRejection>,
) -> Result<Json<SublocationsResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %req_id.0,
        main_location = %request.main_location,
        "sub-locations requested"
    );

    let response = state
        .search
        .list_sublocations(&request.main_location)
        .await?;
    Ok(Json(response))
}
