#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;
use uuid::Uuid;

use jobboard_backend::dto::file_dto::FileDto;
use jobboard_backend::error::{Error, Result};
use jobboard_backend::models::candidate::Candidate;
use jobboard_backend::models::city::City;
use jobboard_backend::models::file::StoredFile;
use jobboard_backend::models::user::User;
use jobboard_backend::models::vacancy::Vacancy;
use jobboard_backend::repository::candidate::CandidateRepository;
use jobboard_backend::repository::city::CityRepository;
use jobboard_backend::repository::user::UserRepository;
use jobboard_backend::repository::vacancy::VacancyRepository;
use jobboard_backend::routes;
use jobboard_backend::services::candidate_service::CandidateService;
use jobboard_backend::services::city_service::CityService;
use jobboard_backend::services::file_service::FileService;
use jobboard_backend::services::user_service::UserService;
use jobboard_backend::services::vacancy_service::VacancyService;
use jobboard_backend::session::{SessionStore, SESSION_COOKIE};
use jobboard_backend::AppState;

/// In-memory stand-ins for the SQL repositories and the disk file store,
/// wired into a real router. Write failures can be injected per repository
/// to exercise the error branches of the handlers.
pub struct TestApp {
    pub candidates: Arc<InMemoryCandidateRepository>,
    pub vacancies: Arc<InMemoryVacancyRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub files: Arc<InMemoryFileService>,
    pub sessions: SessionStore,
    pub router: Router,
}

pub fn test_app() -> TestApp {
    let candidates = Arc::new(InMemoryCandidateRepository::new());
    let vacancies = Arc::new(InMemoryVacancyRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let files = Arc::new(InMemoryFileService::new());
    let cities = Arc::new(InMemoryCityRepository::new(vec![
        City {
            id: 1,
            name: "Moscow".to_string(),
        },
        City {
            id: 2,
            name: "Saint Petersburg".to_string(),
        },
    ]));
    let sessions = SessionStore::new();

    let state = AppState {
        candidate_service: CandidateService::new(candidates.clone(), files.clone()),
        vacancy_service: VacancyService::new(vacancies.clone(), files.clone()),
        city_service: CityService::new(cities),
        user_service: UserService::new(users.clone()),
        file_service: files.clone(),
        sessions: sessions.clone(),
    };

    TestApp {
        candidates,
        vacancies,
        users,
        files,
        sessions,
        router: routes::app(state),
    }
}

fn check_fail(fail: &Mutex<Option<String>>) -> Result<()> {
    match fail.lock().unwrap().as_ref() {
        Some(message) => Err(Error::Storage(message.clone())),
        None => Ok(()),
    }
}

pub struct InMemoryCandidateRepository {
    rows: Mutex<Vec<Candidate>>,
    next_id: Mutex<i32>,
    fail: Mutex<Option<String>>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail: Mutex::new(None),
        }
    }

    pub fn seed(&self, candidate: Candidate) {
        self.rows.lock().unwrap().push(candidate);
    }

    pub fn fail_writes(&self, message: &str) {
        *self.fail.lock().unwrap() = Some(message.to_string());
    }

    pub fn all(&self) -> Vec<Candidate> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn save(&self, mut candidate: Candidate) -> Result<Candidate> {
        check_fail(&self.fail)?;
        let mut next = self.next_id.lock().unwrap();
        candidate.id = *next;
        *next += 1;
        self.rows.lock().unwrap().push(candidate.clone());
        Ok(candidate)
    }

    async fn update(&self, candidate: &Candidate) -> Result<bool> {
        check_fail(&self.fail)?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == candidate.id) {
            Some(row) => {
                *row = candidate.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        check_fail(&self.fail)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub struct InMemoryVacancyRepository {
    rows: Mutex<Vec<Vacancy>>,
    next_id: Mutex<i32>,
    fail: Mutex<Option<String>>,
}

impl InMemoryVacancyRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail: Mutex::new(None),
        }
    }

    pub fn seed(&self, vacancy: Vacancy) {
        self.rows.lock().unwrap().push(vacancy);
    }

    pub fn fail_writes(&self, message: &str) {
        *self.fail.lock().unwrap() = Some(message.to_string());
    }

    pub fn all(&self) -> Vec<Vacancy> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl VacancyRepository for InMemoryVacancyRepository {
    async fn save(&self, mut vacancy: Vacancy) -> Result<Vacancy> {
        check_fail(&self.fail)?;
        let mut next = self.next_id.lock().unwrap();
        vacancy.id = *next;
        *next += 1;
        self.rows.lock().unwrap().push(vacancy.clone());
        Ok(vacancy)
    }

    async fn update(&self, vacancy: &Vacancy) -> Result<bool> {
        check_fail(&self.fail)?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == vacancy.id) {
            Some(row) => {
                *row = vacancy.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        check_fail(&self.fail)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub struct InMemoryCityRepository {
    rows: Vec<City>,
}

impl InMemoryCityRepository {
    pub fn new(rows: Vec<City>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        Ok(self.rows.clone())
    }
}

pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn seed(&self, user: User) {
        self.rows.lock().unwrap().push(user);
    }

    pub fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<User> {
        let mut next = self.next_id.lock().unwrap();
        user.id = *next;
        *next += 1;
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }
}

pub struct InMemoryFileService {
    rows: Mutex<HashMap<i32, FileDto>>,
    next_id: Mutex<i32>,
}

impl InMemoryFileService {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn stored(&self, id: i32) -> Option<FileDto> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl FileService for InMemoryFileService {
    async fn save(&self, file: FileDto) -> Result<StoredFile> {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        self.rows.lock().unwrap().insert(id, file.clone());
        Ok(StoredFile {
            id,
            name: file.name,
            path: format!("mem://{id}"),
        })
    }

    async fn get_file_by_id(&self, id: i32) -> Result<Option<FileDto>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub async fn get(router: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get_with_session(router: &Router, uri: &str, session_id: Uuid) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("cookie", format!("{SESSION_COOKIE}={session_id}"))
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    body: &str,
    session_id: Option<Uuid>,
) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(id) = session_id {
        builder = builder.header("cookie", format!("{SESSION_COOKIE}={id}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

const BOUNDARY: &str = "test-boundary";

/// Builds a multipart form the way a browser posts the candidate and
/// vacancy forms: text fields first, then a single binary file field.
pub async fn post_multipart(
    router: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    file_name: &str,
    content: &[u8],
) -> Response {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}
