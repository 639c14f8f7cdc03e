pub mod candidate;
pub mod file;
pub mod index;
pub mod user;
pub mod vacancy;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/candidates", get(candidate::get_all).post(candidate::create))
        .route("/candidates/create", get(candidate::creation_page))
        .route("/candidates/update", post(candidate::update))
        .route("/candidates/delete/:id", get(candidate::delete))
        .route("/candidates/:id", get(candidate::get_by_id))
        .route("/vacancies", get(vacancy::get_all).post(vacancy::create))
        .route("/vacancies/create", get(vacancy::creation_page))
        .route("/vacancies/update", post(vacancy::update))
        .route("/vacancies/delete/:id", get(vacancy::delete))
        .route("/vacancies/:id", get(vacancy::get_by_id))
        .route("/files/:id", get(file::get_by_id))
        .route(
            "/users/register",
            get(user::registration_page).post(user::register),
        )
        .route("/users/login", get(user::login_page).post(user::login))
        .route("/users/logout", get(user::logout))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
}
