// src/es/mod.rs
// Subprocess invoker for the Everything command-line client (es.exe)

pub mod args;

use crate::config::EsConfig;
use crate::error::{EsError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Captured outcome of one successful `es.exe` run.
#[derive(Debug, Clone)]
pub struct EsOutput {
    pub stdout: String,
    pub stderr: String,
    /// 0 = results found, 1 = zero results (Everything's convention).
    pub code: i32,
}

/// Runs `es.exe` invocations. Immutable after construction; share via `Arc`
/// across concurrent tool calls, each of which owns its own child process.
#[derive(Debug, Clone)]
pub struct EsClient {
    config: EsConfig,
}

impl EsClient {
    pub fn new(config: EsConfig) -> Self {
        Self { config }
    }

    pub fn es_path(&self) -> &Path {
        &self.config.es_path
    }

    /// Run one `es.exe` invocation to completion with the given argument
    /// vector (no shell interpretation) and capture both output streams.
    ///
    /// Exit code 0 or 1 resolves to [`EsOutput`]; any other code is an
    /// [`EsError::Exit`] carrying the captured stderr. The tokio child
    /// handle uses `kill_on_drop`, so an expired timeout (or a dropped
    /// future) terminates the child instead of orphaning it.
    pub async fn run(&self, cli_args: &[String]) -> Result<EsOutput> {
        let mut cmd = Command::new(&self.config.es_path);
        cmd.args(cli_args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::debug!(es = %self.config.es_path.display(), args = ?cli_args, "spawning es.exe");

        // output() resolves only after both streams are drained and the
        // child has exited, so the capture is never truncated.
        let output = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| EsError::Timeout {
                    secs: limit.as_secs(),
                })?,
            None => cmd.output().await,
        }
        .map_err(EsError::Launch)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // None means the child was killed by a signal; treat as failure.
        let code = output.status.code().unwrap_or(-1);

        match code {
            0 | 1 => Ok(EsOutput {
                stdout,
                stderr,
                code,
            }),
            _ => Err(EsError::Exit { code, stderr }),
        }
    }
}
