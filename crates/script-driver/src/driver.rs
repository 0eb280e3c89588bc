//! Scripted driver: replays a command list into an engine's stdin (async I/O)

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::process::ChildStdin;
use tracing::{debug, info, warn};

use crate::error::DriverError;
use crate::launch::LaunchCommand;
use crate::script::Script;

/// Allow the engine to print its banner before the first line
pub const STARTUP_DELAY: Duration = Duration::from_secs(1);

/// Allow the engine to process a move before the next line arrives
pub const LINE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub startup_delay: Duration,
    pub line_delay: Duration,
}

impl Pacing {
    /// No pauses at all
    pub const fn immediate() -> Self {
        Self {
            startup_delay: Duration::ZERO,
            line_delay: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            startup_delay: STARTUP_DELAY,
            line_delay: LINE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    Sending,
    Finished,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Lines written to the child's stdin
    pub lines_sent: usize,
    /// Exit status of the child
    pub status: ExitStatus,
}

/// Spawns the engine and feeds it a script, echoing each line to `echo`
pub struct ScriptedDriver<E> {
    launch: LaunchCommand,
    script: Script,
    pacing: Pacing,
    echo: E,
    state: DriverState,
}

impl<E> ScriptedDriver<E>
where
    E: AsyncWrite + Unpin,
{
    pub fn new(launch: LaunchCommand, script: Script, pacing: Pacing, echo: E) -> Self {
        Self {
            launch,
            script,
            pacing,
            echo,
            state: DriverState::NotStarted,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn echo(&self) -> &E {
        &self.echo
    }

    pub fn into_echo(self) -> E {
        self.echo
    }

    /// Spawn the engine, send every line, close stdin and wait for exit.
    ///
    /// The wait has no timeout: an engine that never exits blocks forever.
    pub async fn run(&mut self) -> Result<RunSummary, DriverError> {
        let command = self.launch.to_string();
        let mut child = self
            .launch
            .to_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| DriverError::Spawn {
                command: command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or(DriverError::StdinUnavailable)?;
        self.state = DriverState::Sending;
        info!(
            command = %command,
            pid = ?child.id(),
            lines = self.script.len(),
            "Engine spawned"
        );

        tokio::time::sleep(self.pacing.startup_delay).await;

        let mut lines_sent = 0;
        for (index, line) in self.script.lines().iter().enumerate() {
            echo_line(&mut self.echo, line).await?;

            if let Err(source) = send_line(&mut stdin, line).await {
                warn!(
                    line_no = index + 1,
                    line = %line,
                    error = %source,
                    "Write to engine failed, aborting"
                );
                drop(stdin);
                // Best effort: the engine has most likely exited already
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(DriverError::Write {
                    line_no: index + 1,
                    line: line.clone(),
                    source,
                });
            }
            lines_sent += 1;

            tokio::time::sleep(self.pacing.line_delay).await;
        }

        // EOF for the engine
        drop(stdin);

        let status = child.wait().await.map_err(DriverError::Wait)?;
        self.state = DriverState::Finished;

        if status.success() {
            info!(lines_sent, %status, "Engine exited");
        } else {
            warn!(lines_sent, %status, "Engine exited with failure status");
        }

        Ok(RunSummary { lines_sent, status })
    }
}

/// Show the line to the operator before it is sent
async fn echo_line<E>(echo: &mut E, line: &str) -> Result<(), DriverError>
where
    E: AsyncWrite + Unpin,
{
    echo.write_all(format!("{line}\n").as_bytes())
        .await
        .map_err(DriverError::Echo)?;
    echo.flush().await.map_err(DriverError::Echo)
}

/// Write one newline-terminated line and flush it through
async fn send_line(stdin: &mut ChildStdin, line: &str) -> std::io::Result<()> {
    debug!(line, "engine <");
    stdin.write_all(format!("{line}\n").as_bytes()).await?;
    stdin.flush().await
}
