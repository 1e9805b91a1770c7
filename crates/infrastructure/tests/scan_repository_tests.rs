use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use subrecon_application::ports::ScanRepository;
use subrecon_domain::{DomainError, ScanRecord};
use subrecon_infrastructure::SqliteScanRepository;

// One connection: every in-memory SQLite connection is its own database.
async fn make_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::query(
        "CREATE TABLE scans (
            domain TEXT PRIMARY KEY,
            subdomains TEXT NOT NULL,
            subdomain_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("create schema");

    pool
}

fn record(domain: &str, subdomains: &[&str]) -> ScanRecord {
    ScanRecord::new(domain, subdomains.iter().map(|s| s.to_string()).collect())
}

#[tokio::test]
async fn test_get_unknown_domain_is_none_not_error() {
    let repo = SqliteScanRepository::new(make_pool().await);

    let result = repo.get("never-scanned.example.com").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_put_then_get_round_trips_exact_list() {
    let repo = SqliteScanRepository::new(make_pool().await);
    let stored = record("example.com", &["a.example.com", "b.example.com"]);

    repo.put(&stored).await.unwrap();
    let fetched = repo.get("example.com").await.unwrap().unwrap();

    assert_eq!(fetched.domain.as_ref(), "example.com");
    assert_eq!(fetched.subdomains, stored.subdomains);
    assert!(fetched.created_at.is_some());
}

#[tokio::test]
async fn test_put_overwrites_existing_record() {
    let repo = SqliteScanRepository::new(make_pool().await);

    repo.put(&record("example.com", &["old.example.com"]))
        .await
        .unwrap();
    repo.put(&record("example.com", &["new.example.com", "www.example.com"]))
        .await
        .unwrap();

    let fetched = repo.get("example.com").await.unwrap().unwrap();
    assert_eq!(fetched.subdomains, vec!["new.example.com", "www.example.com"]);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_all_returns_every_stored_scan() {
    let repo = SqliteScanRepository::new(make_pool().await);

    repo.put(&record("one.com", &["a.one.com"])).await.unwrap();
    repo.put(&record("two.com", &["a.two.com", "b.two.com"]))
        .await
        .unwrap();

    let all = repo.get_all().await.unwrap();

    assert_eq!(all.len(), 2);
    let counts: Vec<usize> = all.iter().map(|r| r.subdomain_count()).collect();
    assert!(counts.contains(&1));
    assert!(counts.contains(&2));
}

#[tokio::test]
async fn test_corrupt_stored_list_is_a_storage_error() {
    let pool = make_pool().await;
    sqlx::query(
        "INSERT INTO scans (domain, subdomains, subdomain_count, created_at)
         VALUES ('bad.com', 'not json', 0, '2025-01-01 00:00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let repo = SqliteScanRepository::new(pool);

    let result = repo.get("bad.com").await;

    assert!(matches!(result, Err(DomainError::StorageError(_))));
}

#[tokio::test]
async fn test_empty_subdomain_list_round_trips() {
    let repo = SqliteScanRepository::new(make_pool().await);

    repo.put(&record("empty.com", &[])).await.unwrap();
    let fetched = repo.get("empty.com").await.unwrap().unwrap();

    assert!(fetched.subdomains.is_empty());
    assert_eq!(fetched.subdomain_count(), 0);
}
