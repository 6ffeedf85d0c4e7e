//! Rendering capability: navigate to a page and capture a PNG.
//!
//! A [`Renderer`] hands out one [`RenderSession`] per test case. Sessions own
//! whatever OS resources a capture needs and release them on drop, so a case
//! that errors half-way never leaks a browser process.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Viewport;

const DRIVER_SCRIPT: &str = include_str!("capture.js");

/// Browser launch and teardown overhead on top of the page waits.
const LAUNCH_GRACE: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const STDERR_TAIL_LINES: usize = 20;

/// What to capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub url: String,
    pub viewport: Viewport,
    /// Element to capture; `None` captures the full page.
    pub selector: Option<String>,
    /// Bound on the network-idle wait and on the selector wait.
    pub timeout_ms: u64,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("selector '{selector}' matched no element")]
    SelectorNotFound { selector: String },

    #[error("timed out after {timeout_ms} ms waiting for {url}")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{0}")]
    DriverNotFound(String),

    #[error("failed to prepare capture workspace: {0}")]
    Workspace(#[source] std::io::Error),

    #[error("failed to start renderer: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("renderer exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },

    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("invalid renderer report: {0}")]
    Report(String),
}

/// Source of render sessions.
pub trait Renderer: Sync {
    /// Acquire a rendering context for one test case.
    ///
    /// # Errors
    /// Returns an error if the rendering runtime is unavailable.
    fn acquire(&self) -> Result<Box<dyn RenderSession + '_>, RenderError>;
}

/// A scoped rendering context; dropping it releases the underlying resources.
pub trait RenderSession {
    /// Navigate, wait for the network to go idle, and capture.
    ///
    /// # Errors
    /// `SelectorNotFound` when the selector matches nothing, `Timeout` when the
    /// page or selector does not become ready in time, other variants when the
    /// renderer itself fails.
    fn capture(&mut self, request: &CaptureRequest) -> Result<Vec<u8>, RenderError>;
}

// ============================================================================
// Playwright driver
// ============================================================================

/// Runs an embedded Node.js Playwright script per capture.
#[derive(Debug, Clone)]
pub struct PlaywrightRenderer {
    node: String,
    project_dir: PathBuf,
}

impl PlaywrightRenderer {
    /// `node` is the runtime executable name or path, resolved through `PATH`.
    ///
    /// Playwright is resolved from the current directory's `node_modules`.
    pub fn new(node: impl Into<String>) -> Self {
        let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            node: node.into(),
            project_dir,
        }
    }

    /// Resolve Playwright from `dir` instead of the current directory.
    #[must_use]
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }
}

impl Renderer for PlaywrightRenderer {
    fn acquire(&self) -> Result<Box<dyn RenderSession + '_>, RenderError> {
        let node = which::which(&self.node).map_err(|_| {
            RenderError::DriverNotFound(format!(
                "Node.js executable '{}' not found; install Node.js and Playwright or set visual.node",
                self.node
            ))
        })?;

        let workspace = tempfile::Builder::new()
            .prefix("css-guard-capture-")
            .tempdir()
            .map_err(RenderError::Workspace)?;
        let script = workspace.path().join("capture.js");
        std::fs::write(&script, DRIVER_SCRIPT).map_err(RenderError::Workspace)?;

        Ok(Box::new(PlaywrightSession {
            node,
            script,
            project_dir: &self.project_dir,
            workspace,
        }))
    }
}

struct PlaywrightSession<'a> {
    node: PathBuf,
    script: PathBuf,
    // The driver runs here so the project's own Playwright install is found.
    project_dir: &'a Path,
    // Removed with the session.
    workspace: tempfile::TempDir,
}

#[derive(Serialize)]
struct DriverRequest<'a> {
    url: &'a str,
    viewport: Viewport,
    selector: Option<&'a str>,
    timeout_ms: u64,
    output: &'a Path,
    report: &'a Path,
}

#[derive(Debug, Deserialize)]
struct DriverReport {
    ok: bool,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl RenderSession for PlaywrightSession<'_> {
    fn capture(&mut self, request: &CaptureRequest) -> Result<Vec<u8>, RenderError> {
        let dir = self.workspace.path();
        let request_path = dir.join("request.json");
        let output = dir.join("capture.png");
        let report_path = dir.join("report.json");
        let stderr_path = dir.join("stderr.log");
        for stale in [&output, &report_path] {
            if stale.exists() {
                std::fs::remove_file(stale).map_err(RenderError::Workspace)?;
            }
        }

        let payload = DriverRequest {
            url: &request.url,
            viewport: request.viewport,
            selector: request.selector.as_deref(),
            timeout_ms: request.timeout_ms,
            output: &output,
            report: &report_path,
        };
        let json = serde_json::to_vec(&payload).map_err(|e| RenderError::Report(e.to_string()))?;
        std::fs::write(&request_path, json).map_err(RenderError::Workspace)?;

        // stderr goes to a file so a chatty driver cannot fill a pipe and stall.
        let stderr_file = File::create(&stderr_path).map_err(RenderError::Workspace)?;
        let child = Command::new(&self.node)
            .arg(&self.script)
            .arg(&request_path)
            .current_dir(self.project_dir)
            .env("NODE_PATH", self.project_dir.join("node_modules"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(stderr_file)
            .spawn()
            .map_err(RenderError::SpawnFailed)?;
        tracing::debug!(url = %request.url, pid = child.id(), "renderer started");

        let bound = Duration::from_millis(request.timeout_ms.saturating_mul(2)) + LAUNCH_GRACE;
        let status = wait_with_timeout(ChildGuard::new(child), bound).map_err(|e| match e {
            WaitError::TimedOut => RenderError::Timeout {
                url: request.url.clone(),
                timeout_ms: request.timeout_ms,
            },
            WaitError::Io(e) => RenderError::SpawnFailed(e),
        })?;

        if !status.success() {
            return Err(RenderError::ProcessFailed {
                exit_code: status.code().unwrap_or(-1),
                stderr: stderr_tail(&stderr_path),
            });
        }

        let report = std::fs::read_to_string(&report_path)
            .map_err(|e| RenderError::Report(format!("{}: {e}", report_path.display())))?;
        let report: DriverReport =
            serde_json::from_str(&report).map_err(|e| RenderError::Report(e.to_string()))?;
        interpret_report(report, request)?;

        std::fs::read(&output)
            .map_err(|e| RenderError::Report(format!("screenshot missing: {e}")))
    }
}

fn interpret_report(report: DriverReport, request: &CaptureRequest) -> Result<(), RenderError> {
    if report.ok {
        return Ok(());
    }
    let message = report.message.unwrap_or_default();
    Err(match report.kind.as_deref() {
        Some("selector_not_found") => RenderError::SelectorNotFound {
            selector: request.selector.clone().unwrap_or(message),
        },
        Some("timeout") => RenderError::Timeout {
            url: request.url.clone(),
            timeout_ms: request.timeout_ms,
        },
        Some("navigation") => RenderError::Navigation {
            url: request.url.clone(),
            message,
        },
        Some("driver") => RenderError::DriverNotFound(message),
        other => RenderError::Report(format!(
            "unknown failure kind {}: {message}",
            other.unwrap_or("<none>")
        )),
    })
}

fn stderr_tail(path: &Path) -> String {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

/// Kills and reaps the child if it is still running when dropped.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    const fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

#[derive(Debug)]
enum WaitError {
    TimedOut,
    Io(std::io::Error),
}

fn wait_with_timeout(mut guard: ChildGuard, timeout: Duration) -> Result<ExitStatus, WaitError> {
    let start = Instant::now();
    loop {
        match guard.child.try_wait() {
            Ok(Some(status)) => {
                guard.reaped = true;
                return Ok(status);
            }
            Ok(None) => {
                if start.elapsed() > timeout {
                    // Dropping the guard kills and reaps the child.
                    return Err(WaitError::TimedOut);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(WaitError::Io(e)),
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
