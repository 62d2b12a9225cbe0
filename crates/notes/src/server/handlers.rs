//! Request handlers: parse the request, call the store, shape the response.
//!
//! Handlers hold no logic of their own beyond defaults for query parameters.
//! Body, path and query rejections are caught as `Result` extractors so they
//! come back in the same `{"error": ...}` shape as store errors.

use super::error::ApiError;
use super::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notesapp::model::{NewNote, Note, NotePatch};
use notesapp::pagination::{Page, PageRequest};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Healthy",
        "app_name": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub async fn info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "description": state.config.description,
        "endpoints": {
            "notes": "/notes",
            "health": "/",
            "info": "/info",
        },
    }))
}

pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(new_note) = payload?;
    let note = state.store.create(new_note)?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn list_notes(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<Note>>, ApiError> {
    let Query(params) = params?;
    let request = PageRequest::new(
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(state.config.default_per_page),
    );
    Ok(Json(state.store.list(request)?))
}

pub async fn search_notes(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.store.search(&params.q)?))
}

pub async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.store.get(id)?))
}

pub async fn update_note(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NotePatch>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(state.store.update(id, patch)?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
