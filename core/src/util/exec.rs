use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::error::UtilError;

/// A child process to run to completion.
#[derive(Debug, Clone, Default)]
pub struct ExecSpec {
    /// Working directory; `.` when unset.
    pub wd: Option<PathBuf>,
    /// File that receives stdout (created or truncated). Inherits the parent's
    /// stdout when unset.
    pub stdout_path: Option<PathBuf>,
    pub bin: String,
    pub args: Vec<String>,
}

impl ExecSpec {
    pub fn new(bin: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            bin: bin.into(),
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_wd(mut self, wd: impl Into<PathBuf>) -> Self {
        self.wd = Some(wd.into());
        self
    }

    pub fn with_stdout(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_path = Some(path.into());
        self
    }
}

/// Run `spec` in its own process group and wait for it to exit.
pub async fn exec(spec: &ExecSpec) -> Result<ExitStatus, UtilError> {
    let wd = spec.wd.clone().unwrap_or_else(|| PathBuf::from("."));

    let stdout = match &spec.stdout_path {
        Some(path) => Stdio::from(std::fs::File::create(path)?),
        None => Stdio::inherit(),
    };

    let mut cmd = Command::new(&spec.bin);
    cmd.args(&spec.args).current_dir(&wd).stdout(stdout);
    #[cfg(unix)]
    cmd.process_group(0);

    tracing::info!(
        target: "kitbag.exec",
        stage = "exec.spawn",
        bin = %spec.bin,
        args = ?spec.args,
        wd = %wd.display()
    );
    let status = cmd.status().await?;
    tracing::debug!(
        target: "kitbag.exec",
        stage = "exec.exit",
        bin = %spec.bin,
        status = %status
    );
    Ok(status)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exec_redirects_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let spec = ExecSpec::new("sh", ["-c", "pwd; echo hello"])
            .with_wd(dir.path())
            .with_stdout(&out);

        let status = exec(&spec).await.unwrap();
        assert!(status.success());

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.ends_with("hello\n"), "{text}");
    }

    #[tokio::test]
    async fn test_exec_reports_exit_code() {
        let spec = ExecSpec::new("sh", ["-c", "exit 3"]);
        let status = exec(&spec).await.unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[tokio::test]
    async fn test_exec_missing_binary() {
        let spec = ExecSpec::new("kitbag-no-such-binary", Vec::<String>::new());
        assert!(matches!(exec(&spec).await, Err(UtilError::Io(_))));
    }
}
