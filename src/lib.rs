pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod session;
pub mod views;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::candidate::SqlCandidateRepository;
use crate::repository::city::SqlCityRepository;
use crate::repository::file::SqlFileRepository;
use crate::repository::user::SqlUserRepository;
use crate::repository::vacancy::SqlVacancyRepository;
use crate::services::candidate_service::CandidateService;
use crate::services::city_service::CityService;
use crate::services::file_service::{DiskFileService, FileService};
use crate::services::user_service::UserService;
use crate::services::vacancy_service::VacancyService;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
    pub vacancy_service: VacancyService,
    pub city_service: CityService,
    pub user_service: UserService,
    pub file_service: Arc<dyn FileService>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(pool: PgPool, storage_dir: impl Into<PathBuf>) -> Self {
        let file_service: Arc<dyn FileService> = Arc::new(DiskFileService::new(
            Arc::new(SqlFileRepository::new(pool.clone())),
            storage_dir,
        ));

        Self {
            candidate_service: CandidateService::new(
                Arc::new(SqlCandidateRepository::new(pool.clone())),
                file_service.clone(),
            ),
            vacancy_service: VacancyService::new(
                Arc::new(SqlVacancyRepository::new(pool.clone())),
                file_service.clone(),
            ),
            city_service: CityService::new(Arc::new(SqlCityRepository::new(pool.clone()))),
            user_service: UserService::new(Arc::new(SqlUserRepository::new(pool))),
            file_service,
            sessions: SessionStore::new(),
        }
    }
}
