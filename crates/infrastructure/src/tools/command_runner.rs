use async_trait::async_trait;
use std::process::Stdio;
use subrecon_application::ports::{ToolInvocation, ToolRunner};
use subrecon_domain::DomainError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, instrument};

/// Progress marker some tools print on stdout between results.
const BANNER_PREFIX: &str = "[+]";

/// Runs enumeration tools as child processes on the tokio runtime.
///
/// stdout is consumed line by line as the tool produces it, so long runs
/// never buffer their whole output in one blob. Children are spawned with
/// `kill_on_drop`: a request that goes away mid-scan (client disconnect,
/// timeout) takes its processes down with it instead of leaking them.
pub struct CommandToolRunner;

impl CommandToolRunner {
    pub fn new() -> Self {
        Self
    }

    async fn capture(
        invocation: &ToolInvocation,
        keep_line: fn(&str) -> Option<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .map_err(|e| tool_failure(invocation, format!("failed to start: {e}")))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| tool_failure(invocation, "failed to open stdout".to_string()))?;

        let mut lines = BufReader::new(stdout).lines();
        let mut results = Vec::new();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| tool_failure(invocation, format!("failed to read stdout: {e}")))?
        {
            if let Some(kept) = keep_line(&line) {
                results.push(kept);
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| tool_failure(invocation, format!("failed to wait: {e}")))?;

        // All-or-nothing: lines read from a run that exited dirty are dropped.
        if !status.success() {
            return Err(tool_failure(invocation, format!("exited with {status}")));
        }

        debug!(tool = %invocation.tool, lines = results.len(), "Tool run complete");
        Ok(results)
    }
}

impl Default for CommandToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_failure(invocation: &ToolInvocation, reason: String) -> DomainError {
    DomainError::ToolFailure {
        tool: invocation.tool.clone(),
        reason,
    }
}

#[async_trait]
impl ToolRunner for CommandToolRunner {
    #[instrument(skip(self))]
    async fn run_filtered(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError> {
        Self::capture(invocation, |line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with(BANNER_PREFIX) {
                None
            } else {
                Some(line.to_string())
            }
        })
        .await
    }

    #[instrument(skip(self))]
    async fn run_raw(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError> {
        Self::capture(invocation, |line| Some(line.to_string())).await
    }
}
