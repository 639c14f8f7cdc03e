use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::views::{self, CandidateCreatePage, CandidateListPage, CandidateOnePage};
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Candidate with the specified identifier was not found";

pub async fn get_all(State(state): State<AppState>) -> Result<Response> {
    let candidates = state.candidate_service.find_all().await?;
    views::render(CandidateListPage { candidates })
}

pub async fn creation_page(State(state): State<AppState>) -> Result<Response> {
    let cities = state.city_service.find_all().await?;
    views::render(CandidateCreatePage { cities })
}

pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let (candidate, file) = parse_form(multipart).await?;
    match state.candidate_service.save(candidate, file).await {
        Ok(_) => Ok(Redirect::to("/candidates").into_response()),
        Err(e) => views::error_page(e.to_string()),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    let Some(candidate) = state.candidate_service.find_by_id(id).await? else {
        return views::error_page(NOT_FOUND_MESSAGE);
    };
    let cities = state.city_service.find_all().await?;
    views::render(CandidateOnePage { candidate, cities })
}

pub async fn update(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let (candidate, file) = parse_form(multipart).await?;
    match state.candidate_service.update(candidate, file).await {
        Ok(true) => Ok(Redirect::to("/candidates").into_response()),
        Ok(false) => views::error_page(NOT_FOUND_MESSAGE),
        Err(e) => views::error_page(e.to_string()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    if state.candidate_service.delete_by_id(id).await? {
        Ok(Redirect::to("/candidates").into_response())
    } else {
        views::error_page(NOT_FOUND_MESSAGE)
    }
}

/// The creation and edit forms post the same multipart shape; the id field
/// is only present on updates.
async fn parse_form(mut multipart: Multipart) -> Result<(Candidate, FileDto)> {
    let mut id = 0;
    let mut name = String::new();
    let mut description = String::new();
    let mut city_id = 0;
    let mut file = FileDto::new("", Bytes::new());

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "id" => id = field.text().await.unwrap_or_default().parse().unwrap_or(0),
            "name" => name = field.text().await.unwrap_or_default(),
            "description" => description = field.text().await.unwrap_or_default(),
            "city_id" => {
                city_id = field.text().await.unwrap_or_default().parse().unwrap_or(0);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await?;
                file = FileDto::new(file_name, content);
            }
            _ => {}
        }
    }

    Ok((Candidate::new(id, name, description, city_id), file))
}
