//! Check script probe for virtual addresses.
//!
//! Runs `<script> <vip>` through `/bin/sh` and treats exit status zero as
//! healthy. A failing or missing script is an ordinary answer, not an error.

use std::process::Output;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, error};

const SHELL: &str = "/bin/sh";

/// Result of one check script invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Address passed to the script
    pub vip: String,

    /// Whether the script exited with status zero
    pub success: bool,

    /// Exit code, `None` when killed by a signal or never started
    pub exit_code: Option<i32>,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Failure to run the shell at all
    pub error: Option<String>,

    /// Wall time of the invocation
    pub duration: Duration,
}

impl ScriptOutcome {
    fn completed(vip: &str, output: Output, duration: Duration) -> Self {
        Self {
            vip: vip.to_string(),
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            error: None,
            duration,
        }
    }

    fn failed(vip: &str, err: std::io::Error, duration: Duration) -> Self {
        Self {
            vip: vip.to_string(),
            success: false,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(err.to_string()),
            duration,
        }
    }
}

/// Runs the configured check script against virtual addresses.
#[derive(Debug, Clone)]
pub struct ScriptChecker {
    script_path: String,
    pub(crate) shell: String,
}

impl ScriptChecker {
    /// Create a checker for the given script command.
    pub fn new(script_path: impl Into<String>) -> Self {
        Self {
            script_path: script_path.into(),
            shell: SHELL.to_string(),
        }
    }

    /// Configured script command.
    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    /// Run the script and capture everything it produced.
    ///
    /// Waits for the script to exit; there is no timeout. Dropping the
    /// returned future kills the shell.
    pub async fn run(&self, vip: &str) -> ScriptOutcome {
        let start = Instant::now();
        let command = format!("{} {}", self.script_path, vip);

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&command)
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(output) => ScriptOutcome::completed(vip, output, start.elapsed()),
            Err(e) => ScriptOutcome::failed(vip, e, start.elapsed()),
        }
    }

    /// Check a virtual address, true iff the script exits with status zero.
    pub async fn check_script(&self, vip: &str) -> bool {
        let outcome = self.run(vip).await;

        if outcome.success {
            debug!(
                vip = %vip,
                duration_ms = outcome.duration.as_millis(),
                "Check script passed"
            );
        } else {
            error!(
                vip = %vip,
                exit_code = ?outcome.exit_code,
                stdout = %outcome.stdout,
                stderr = %outcome.stderr,
                error = outcome.error.as_deref().unwrap_or("none"),
                "Check script failed"
            );
        }

        outcome.success
    }
}
