use sqlx::SqlitePool;
use std::sync::Arc;
use subrecon_api::AppState;
use subrecon_application::ports::{ScanRepository, ToolRunner};
use subrecon_application::use_cases::{EnumerateDomainUseCase, GetScanUseCase, ListScansUseCase};
use subrecon_domain::Config;
use subrecon_infrastructure::{CommandToolRunner, SqliteScanRepository};

pub struct Repositories {
    pub scans: Arc<dyn ScanRepository>,
    pub runner: Arc<dyn ToolRunner>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            scans: Arc::new(SqliteScanRepository::new(pool)),
            runner: Arc::new(CommandToolRunner::new()),
        }
    }
}

pub struct UseCases {
    pub enumerate_domain: Arc<EnumerateDomainUseCase>,
    pub get_scan: Arc<GetScanUseCase>,
    pub list_scans: Arc<ListScansUseCase>,
}

impl UseCases {
    pub fn new(repositories: &Repositories, config: &Config) -> Self {
        Self {
            enumerate_domain: Arc::new(EnumerateDomainUseCase::new(
                repositories.runner.clone(),
                repositories.scans.clone(),
                config.tools.clone(),
                &config.enumeration,
            )),
            get_scan: Arc::new(GetScanUseCase::new(repositories.scans.clone())),
            list_scans: Arc::new(ListScansUseCase::new(repositories.scans.clone())),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            enumerate_domain: self.enumerate_domain,
            get_scan: self.get_scan,
            list_scans: self.list_scans,
        }
    }
}
