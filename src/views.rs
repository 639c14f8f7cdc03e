use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::city::City;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;

pub fn render<T: Template>(template: T) -> Result<Response> {
    Ok(Html(template.render()?).into_response())
}

/// The generic error page every service-level failure is rendered through.
pub fn error_page(message: impl Into<String>) -> Result<Response> {
    render(ErrorPage {
        message: message.into(),
    })
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template)]
#[template(path = "candidates/list.html")]
pub struct CandidateListPage {
    pub candidates: Vec<Candidate>,
}

#[derive(Template)]
#[template(path = "candidates/create.html")]
pub struct CandidateCreatePage {
    pub cities: Vec<City>,
}

#[derive(Template)]
#[template(path = "candidates/one.html")]
pub struct CandidateOnePage {
    pub candidate: Candidate,
    pub cities: Vec<City>,
}

#[derive(Template)]
#[template(path = "vacancies/list.html")]
pub struct VacancyListPage {
    pub vacancies: Vec<Vacancy>,
}

#[derive(Template)]
#[template(path = "vacancies/create.html")]
pub struct VacancyCreatePage {
    pub cities: Vec<City>,
}

#[derive(Template)]
#[template(path = "vacancies/one.html")]
pub struct VacancyOnePage {
    pub vacancy: Vacancy,
    pub cities: Vec<City>,
}

#[derive(Template)]
#[template(path = "users/register.html")]
pub struct RegisterPage {
    pub user: User,
}

#[derive(Template)]
#[template(path = "users/login.html")]
pub struct LoginPage {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct ErrorPage {
    pub message: String,
}
