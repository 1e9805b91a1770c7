use std::sync::Arc;
use subrecon_domain::config::{EnumerationConfig, ToolsConfig};
use subrecon_domain::{validators, DomainError, ScanRecord};
use tokio::sync::Semaphore;
use tracing::{info, instrument, warn};

use crate::ports::{ScanRepository, ToolInvocation, ToolRunner};
use crate::services::output_filter::{filter_noisy_lines, merge_unique};

/// Runs the full enumeration flow for one domain: store lookup, concurrent
/// tool fan-out, output filtering, merge, persist.
pub struct EnumerateDomainUseCase {
    runner: Arc<dyn ToolRunner>,
    repository: Arc<dyn ScanRepository>,
    tools: ToolsConfig,
    fold_case: bool,
    scan_slots: Arc<Semaphore>,
}

impl EnumerateDomainUseCase {
    pub fn new(
        runner: Arc<dyn ToolRunner>,
        repository: Arc<dyn ScanRepository>,
        tools: ToolsConfig,
        enumeration: &EnumerationConfig,
    ) -> Self {
        Self {
            runner,
            repository,
            tools,
            fold_case: enumeration.fold_case,
            scan_slots: Arc::new(Semaphore::new(enumeration.max_concurrent_scans)),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        validators::validate_domain(domain).map_err(DomainError::InvalidDomainName)?;
        let domain = domain.trim();

        // A store failure on the lookup aborts the request, even though
        // enumeration might have succeeded without the cache.
        if let Some(record) = self.repository.get(domain).await? {
            info!(
                domain = %domain,
                count = record.subdomain_count(),
                "Returning stored scan"
            );
            return Ok(record.subdomains);
        }

        let subdomains = self.run_tools(domain).await?;

        if subdomains.is_empty() {
            info!(domain = %domain, "Enumeration finished with no results");
            return Err(DomainError::NoSubdomainsFound(domain.to_string()));
        }

        let count = subdomains.len();
        let record = ScanRecord::new(domain, subdomains);

        // The freshly computed list is still good if persisting fails; the
        // next request for this domain just enumerates again.
        if let Err(e) = self.repository.put(&record).await {
            warn!(domain = %domain, error = %e, "Failed to store scan result");
        }

        info!(domain = %domain, count = count, "Enumeration complete");
        Ok(record.subdomains)
    }

    /// Fans both tools out concurrently and joins the results before
    /// merging. Either failure fails the whole run; there is no
    /// best-effort mode with whichever tool succeeded.
    async fn run_tools(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        // Each enumeration spawns two children; the semaphore bounds how
        // many requests may be doing that at once.
        let _slot = self
            .scan_slots
            .acquire()
            .await
            .expect("scan semaphore is never closed");

        let subfinder = ToolInvocation::new(
            "subfinder",
            &self.tools.subfinder_bin,
            vec!["-d".to_string(), domain.to_string(), "-silent".to_string()],
        );

        let sublist3r = ToolInvocation::new(
            "sublist3r",
            &self.tools.sublist3r_python,
            vec![
                self.tools.sublist3r_script.clone(),
                "-d".to_string(),
                domain.to_string(),
            ],
        )
        .in_dir(&self.tools.sublist3r_dir);

        let (clean, raw) = tokio::join!(
            self.runner.run_filtered(&subfinder),
            self.runner.run_raw(&sublist3r),
        );
        let (clean, raw) = (clean?, raw?);

        let extracted = filter_noisy_lines(&raw);
        Ok(merge_unique(&[clean, extracted], self.fold_case))
    }
}
