use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::service::Service;

use super::dto::{CalculationDto, CreateCalculationRequest, TokenQuery};
use super::error::ApiError;

pub async fn create_calculation(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateCalculationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = svc.create_and_compute(req.into()).await?;
    let dto: CalculationDto = created.into();
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn get_history(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<CalculationDto>>, ApiError> {
    let items = svc.history(query.token.as_deref()).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn delete_history(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<CalculationDto>>, ApiError> {
    let removed = svc.delete_history(query.token.as_deref()).await?;
    Ok(Json(removed.into_iter().map(Into::into).collect()))
}
