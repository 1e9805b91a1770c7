#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use subrecon_application::ports::{ScanRepository, ToolInvocation, ToolRunner};
use subrecon_domain::{DomainError, ScanRecord};
use tokio::sync::RwLock;

// ============================================================================
// Mock ToolRunner
// ============================================================================

#[derive(Clone, Default)]
pub struct MockToolRunner {
    outputs: Arc<RwLock<HashMap<String, Vec<String>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    invocations: Arc<RwLock<Vec<ToolInvocation>>>,
}

impl MockToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the lines a tool returns, keyed by tool name.
    pub async fn set_output(&self, tool: &str, lines: Vec<&str>) {
        self.outputs.write().await.insert(
            tool.to_string(),
            lines.into_iter().map(String::from).collect(),
        );
    }

    /// Makes a tool fail on every run.
    pub async fn set_failing(&self, tool: &str) {
        self.failing.write().await.insert(tool.to_string());
    }

    /// All invocations seen so far, in order.
    pub async fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.read().await.clone()
    }

    pub async fn invocation_count(&self) -> usize {
        self.invocations.read().await.len()
    }

    async fn run(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError> {
        self.invocations.write().await.push(invocation.clone());

        if self.failing.read().await.contains(&invocation.tool) {
            return Err(DomainError::ToolFailure {
                tool: invocation.tool.clone(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(self
            .outputs
            .read()
            .await
            .get(&invocation.tool)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ToolRunner for MockToolRunner {
    async fn run_filtered(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError> {
        self.run(invocation).await
    }

    async fn run_raw(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError> {
        self.run(invocation).await
    }
}

// ============================================================================
// Mock ScanRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockScanRepository {
    records: Arc<RwLock<HashMap<String, ScanRecord>>>,
    fail_get: Arc<RwLock<bool>>,
    fail_put: Arc<RwLock<bool>>,
}

impl MockScanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_record(self, record: ScanRecord) -> Self {
        self.records
            .write()
            .await
            .insert(record.domain.to_string(), record);
        self
    }

    pub async fn set_fail_get(&self, fail: bool) {
        *self.fail_get.write().await = fail;
    }

    pub async fn set_fail_put(&self, fail: bool) {
        *self.fail_put.write().await = fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn get_record(&self, domain: &str) -> Option<ScanRecord> {
        self.records.read().await.get(domain).cloned()
    }
}

#[async_trait]
impl ScanRepository for MockScanRepository {
    async fn get(&self, domain: &str) -> Result<Option<ScanRecord>, DomainError> {
        if *self.fail_get.read().await {
            return Err(DomainError::StorageError("mock get failure".to_string()));
        }
        Ok(self.records.read().await.get(domain).cloned())
    }

    async fn put(&self, record: &ScanRecord) -> Result<(), DomainError> {
        if *self.fail_put.read().await {
            return Err(DomainError::StorageError("mock put failure".to_string()));
        }
        self.records
            .write()
            .await
            .insert(record.domain.to_string(), record.clone());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<ScanRecord>, DomainError> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
