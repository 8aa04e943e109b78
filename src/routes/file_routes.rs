use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::models::listing::{ListingPage, ListingQuery};
use crate::models::preview::Preview;
use crate::services::{file_service, listing_service, preview_service};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub path: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub path: Option<String>,
}

pub async fn list_directory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListingPage>, AppError> {
    let query = ListingQuery::from_raw(
        params.page.as_deref(),
        params.sort.as_deref(),
        params.order.as_deref(),
        params.filter.as_deref(),
        params.search.as_deref(),
    )?;
    let path = params
        .path
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| state.default_root.clone());

    let enumerator = Arc::clone(&state.enumerator);
    let page = tokio::task::spawn_blocking(move || {
        listing_service::list_directory(enumerator.as_ref(), &path, &query)
    })
    .await??;

    Ok(Json(page))
}

pub async fn delete_path(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::InvalidArgument(format!("invalid request body: {e}")))?;
    let path = request
        .path
        .ok_or_else(|| AppError::InvalidArgument("path is required".to_string()))?;

    let allow_protected = state.allow_protected_delete;
    let target = path.clone();
    let result =
        tokio::task::spawn_blocking(move || file_service::delete_path(&target, allow_protected))
            .await?;

    match result {
        Ok(removed) => {
            tracing::info!(path, removed, "deleted");
            Ok(Json(json!({ "status": "deleted" })))
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "delete failed");
            Err(e)
        }
    }
}

pub async fn preview_file(Query(params): Query<PreviewParams>) -> Response {
    let Some(path) = params.path.filter(|p| !p.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
    };

    let result = tokio::task::spawn_blocking(move || preview_service::preview(&path))
        .await
        .map_err(AppError::from)
        .and_then(|r| r);

    match result {
        Ok(Preview::Binary {
            media,
            content_type,
            bytes,
        }) => {
            tracing::debug!(%media, content_type, len = bytes.len(), "serving preview");
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Ok(Preview::Text(text)) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string())],
            text,
        )
            .into_response(),
        Ok(Preview::Unsupported) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Preview not supported yet",
        )
            .into_response(),
        Err(AppError::NotFound(_)) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(AppError::AccessDenied(_)) => {
            (StatusCode::FORBIDDEN, "Access Denied").into_response()
        }
        Err(AppError::InvalidArgument(_)) => {
            (StatusCode::BAD_REQUEST, "Invalid path").into_response()
        }
        Err(e @ AppError::Unknown(_)) => {
            tracing::error!(error = %e, "preview failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
