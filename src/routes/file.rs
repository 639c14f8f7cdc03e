use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::AppState;

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    match state.file_service.get_file_by_id(id).await? {
        Some(file) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            file.content,
        )
            .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
