use async_trait::async_trait;
use std::path::PathBuf;
use subrecon_domain::DomainError;

/// A fully resolved invocation of one external enumeration tool.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    /// Short tool name used in logs and failure reports.
    pub tool: String,
    /// Program to execute; resolved via PATH when not absolute.
    pub program: String,
    pub args: Vec<String>,
    /// Working directory the child must run from, for tools that only work
    /// inside their own checkout.
    pub working_dir: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new(tool: &str, program: &str, args: Vec<String>) -> Self {
        Self {
            tool: tool.to_string(),
            program: program.to_string(),
            args,
            working_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

/// Runs an external tool and captures its standard output.
///
/// Implementations stream stdout line by line rather than buffering the
/// whole output, and must treat a spawn failure, a broken stdout pipe, or a
/// non-zero exit status as failure of the entire call: a run that did not
/// end cleanly returns no lines at all.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Returns trimmed, non-empty stdout lines with progress banners
    /// (lines starting with `[+]`) dropped.
    ///
    /// # Errors
    ///
    /// * `DomainError::ToolFailure` - If the child could not be started,
    ///   its stdout could not be read, or it exited with a non-zero status
    async fn run_filtered(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError>;

    /// Returns stdout lines exactly as the tool emitted them, decorations
    /// included. Callers are expected to filter the result themselves.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`ToolRunner::run_filtered`].
    async fn run_raw(&self, invocation: &ToolInvocation) -> Result<Vec<String>, DomainError>;
}
