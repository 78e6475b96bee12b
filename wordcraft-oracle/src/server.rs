//! # Local model server
//!
//! Handle on the `ollama serve` process backing the generative oracle. The
//! process is spawned on the first `ensure_started` call, stopped at most once
//! by `stop`, and killed on drop if nobody stopped it.
//!
//! Spawning is attempted once. If it fails the handle assumes the server is
//! managed elsewhere and carries on; the first generation request will tell.

use crate::error::{Error, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Not started yet
    Idle,
    /// We spawned it and it is ours to stop
    Running,
    /// Spawning failed; someone else runs the server, or nobody does
    External,
    /// Stopped; will not be started again
    Stopped,
}

pub struct OllamaServer {
    program: String,
    args: Vec<String>,
    warmup: Duration,
    child: Option<Child>,
    state: ServerState,
}

impl OllamaServer {
    pub const DEFAULT_WARMUP: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with_command("ollama", ["serve"], Self::DEFAULT_WARMUP)
    }

    /// `warmup` is how long to wait after spawning before the server is assumed ready
    pub fn with_command<I, S>(program: impl Into<String>, args: I, warmup: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            warmup,
            child: None,
            state: ServerState::Idle,
        }
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Start the server unless this handle already tried.
    pub async fn ensure_started(&mut self) -> Result<()> {
        if self.state != ServerState::Idle {
            return Ok(());
        }

        tracing::info!(program = %self.program, "starting local model server");
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                self.child = Some(child);
                self.state = ServerState::Running;
                tokio::time::sleep(self.warmup).await;
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    program = %self.program,
                    "server binary not found, assuming it is managed externally"
                );
                self.state = ServerState::External;
                Ok(())
            }
            Err(e) => {
                self.state = ServerState::External;
                Err(Error::process_failed(&self.program, format!("spawn failed: {}", e))
                    .with_operation("server::ensure_started")
                    .set_source(e))
            }
        }
    }

    /// Stop the server if this handle started it. Returns whether a process was killed.
    pub async fn stop(&mut self) -> Result<bool> {
        self.state = ServerState::Stopped;
        let Some(mut child) = self.child.take() else {
            return Ok(false);
        };

        tracing::info!(program = %self.program, "stopping local model server");
        child.kill().await.map_err(|e| {
            Error::process_failed(&self.program, format!("kill failed: {}", e))
                .with_operation("server::stop")
                .set_source(e)
        })?;
        Ok(true)
    }
}

impl Default for OllamaServer {
    fn default() -> Self {
        Self::new()
    }
}
