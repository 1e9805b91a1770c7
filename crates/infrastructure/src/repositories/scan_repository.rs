use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use subrecon_application::ports::ScanRepository;
use subrecon_domain::{DomainError, ScanRecord};
use tracing::{error, instrument};

type ScanRow = (String, String, String);

pub struct SqliteScanRepository {
    pool: SqlitePool,
}

impl SqliteScanRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: ScanRow) -> Result<ScanRecord, DomainError> {
        let (domain, subdomains_json, created_at) = row;

        let subdomains: Vec<String> = serde_json::from_str(&subdomains_json).map_err(|e| {
            DomainError::StorageError(format!("corrupt subdomain list for '{domain}': {e}"))
        })?;

        Ok(ScanRecord {
            domain: Arc::from(domain.as_str()),
            subdomains,
            created_at: Some(created_at),
        })
    }
}

#[async_trait]
impl ScanRepository for SqliteScanRepository {
    #[instrument(skip(self))]
    async fn get(&self, domain: &str) -> Result<Option<ScanRecord>, DomainError> {
        let row = sqlx::query_as::<_, ScanRow>(
            "SELECT domain, subdomains, created_at FROM scans WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query scan by domain");
            DomainError::StorageError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self, record))]
    async fn put(&self, record: &ScanRecord) -> Result<(), DomainError> {
        let subdomains_json = serde_json::to_string(&record.subdomains)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let created_at = record
            .created_at
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());

        // Unconditional overwrite: concurrent writers for one domain race
        // with last-write-wins.
        sqlx::query(
            "INSERT OR REPLACE INTO scans (domain, subdomains, subdomain_count, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(record.domain.as_ref())
        .bind(&subdomains_json)
        .bind(record.subdomain_count() as i64)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store scan");
            DomainError::StorageError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<ScanRecord>, DomainError> {
        let rows = sqlx::query_as::<_, ScanRow>(
            "SELECT domain, subdomains, created_at FROM scans ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list scans");
            DomainError::StorageError(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_record).collect()
    }
}
