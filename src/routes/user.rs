use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;

use crate::dto::user_dto::{LoginForm, RegisterForm};
use crate::error::Result;
use crate::models::user::User;
use crate::views::{self, LoginPage, RegisterPage};
use crate::AppState;

const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";
const BAD_CREDENTIALS_MESSAGE: &str = "Email or password is incorrect";

pub async fn registration_page(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let (session, jar) = state.sessions.attach(jar);
    let user = session.user().unwrap_or_else(|| User {
        name: "Guest".to_string(),
        ..User::default()
    });
    let page = views::render(RegisterPage { user })?;
    Ok((jar, page).into_response())
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let (session, jar) = state.sessions.attach(jar);
    let user = User {
        id: 0,
        email: form.email,
        name: form.name,
        password: form.password,
    };
    match state.user_service.save(user).await? {
        Some(saved) => {
            session.set_user(saved);
            Ok((jar, Redirect::to("/vacancies")).into_response())
        }
        None => {
            let page = views::error_page(DUPLICATE_EMAIL_MESSAGE)?;
            Ok((jar, page).into_response())
        }
    }
}

pub async fn login_page() -> Result<Response> {
    views::render(LoginPage { error: None })
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let (session, jar) = state.sessions.attach(jar);
    match state
        .user_service
        .find_by_email_and_password(&form.email, &form.password)
        .await?
    {
        Some(user) => {
            session.set_user(user);
            Ok((jar, Redirect::to("/vacancies")).into_response())
        }
        None => {
            let page = views::render(LoginPage {
                error: Some(BAD_CREDENTIALS_MESSAGE.to_string()),
            })?;
            Ok((jar, page).into_response())
        }
    }
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let (session, jar) = state.sessions.attach(jar);
    session.invalidate();
    Ok((jar, Redirect::to("/users/login")).into_response())
}
