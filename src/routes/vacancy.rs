use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::views::{self, VacancyCreatePage, VacancyListPage, VacancyOnePage};
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Vacancy with the specified identifier was not found";

pub async fn get_all(State(state): State<AppState>) -> Result<Response> {
    let vacancies = state.vacancy_service.find_all().await?;
    views::render(VacancyListPage { vacancies })
}

pub async fn creation_page(State(state): State<AppState>) -> Result<Response> {
    let cities = state.city_service.find_all().await?;
    views::render(VacancyCreatePage { cities })
}

pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let (vacancy, file) = parse_form(multipart).await?;
    match state.vacancy_service.save(vacancy, file).await {
        Ok(_) => Ok(Redirect::to("/vacancies").into_response()),
        Err(e) => views::error_page(e.to_string()),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    let Some(vacancy) = state.vacancy_service.find_by_id(id).await? else {
        return views::error_page(NOT_FOUND_MESSAGE);
    };
    let cities = state.city_service.find_all().await?;
    views::render(VacancyOnePage { vacancy, cities })
}

pub async fn update(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let (vacancy, file) = parse_form(multipart).await?;
    match state.vacancy_service.update(vacancy, file).await {
        Ok(true) => Ok(Redirect::to("/vacancies").into_response()),
        Ok(false) => views::error_page(NOT_FOUND_MESSAGE),
        Err(e) => views::error_page(e.to_string()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    if state.vacancy_service.delete_by_id(id).await? {
        Ok(Redirect::to("/vacancies").into_response())
    } else {
        views::error_page(NOT_FOUND_MESSAGE)
    }
}

/// The visible checkbox posts "true" when ticked and is absent otherwise.
async fn parse_form(mut multipart: Multipart) -> Result<(Vacancy, FileDto)> {
    let mut id = 0;
    let mut title = String::new();
    let mut description = String::new();
    let mut visible = false;
    let mut city_id = 0;
    let mut file = FileDto::new("", Bytes::new());

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "id" => id = field.text().await.unwrap_or_default().parse().unwrap_or(0),
            "title" => title = field.text().await.unwrap_or_default(),
            "description" => description = field.text().await.unwrap_or_default(),
            "visible" => {
                visible = field
                    .text()
                    .await
                    .unwrap_or_default()
                    .parse()
                    .unwrap_or(false);
            }
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

    Ok((Vacancy::new(id, title, description, visible, city_id), file))
}
