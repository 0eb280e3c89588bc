//! Driver configuration from environment variables

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::driver::Pacing;
use crate::error::DriverError;
use crate::launch::LaunchCommand;

#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Literal command string that starts the engine
    pub engine_command: String,

    /// Shell used to interpret `engine_command` (`None` = exec directly)
    pub shell: Option<String>,

    /// Pause after spawn so the engine can print its banner
    pub startup_delay: Duration,

    /// Pause after each line so the engine can process the move
    pub line_delay: Duration,

    /// Script file replacing the built-in game
    pub script_path: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        let pacing = Pacing::default();
        Self {
            engine_command: "./chess".to_string(),
            shell: Some("bash".to_string()),
            startup_delay: pacing.startup_delay,
            line_delay: pacing.line_delay,
            script_path: None,
        }
    }
}

impl DriverConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, DriverError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(var: F) -> Result<Self, DriverError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let engine_command = var("CHESS_CMD").unwrap_or(defaults.engine_command);
        if engine_command.trim().is_empty() {
            return Err(DriverError::Config("CHESS_CMD is empty".into()));
        }

        // Empty CHESS_SHELL disables the shell wrapper
        let shell = match var("CHESS_SHELL") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(s),
            None => defaults.shell,
        };

        let startup_delay = var("STARTUP_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.startup_delay);

        let line_delay = var("LINE_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.line_delay);

        let script_path = var("SCRIPT_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if let Some(path) = &script_path {
            info!(path = %path.display(), "Using script file from SCRIPT_PATH");
        }

        Ok(Self {
            engine_command,
            shell,
            startup_delay,
            line_delay,
            script_path,
        })
    }

    /// Apply command-line overrides (currently `--script <path>`)
    pub fn apply_args<I>(&mut self, args: I) -> Result<(), DriverError>
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(path) = parse_script_arg(args)? {
            info!(path = %path.display(), "Using script file from --script");
            self.script_path = Some(path);
        }
        Ok(())
    }

    pub fn launch_command(&self) -> Result<LaunchCommand, DriverError> {
        match &self.shell {
            Some(shell) => Ok(LaunchCommand::shell(shell, &self.engine_command)),
            None => LaunchCommand::direct(&self.engine_command),
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            startup_delay: self.startup_delay,
            line_delay: self.line_delay,
        }
    }
}

/// Parse --script <path> from CLI args (program name excluded)
pub fn parse_script_arg<I>(args: I) -> Result<Option<PathBuf>, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut script = None;
    while let Some(arg) = args.next() {
        if arg == "--script" {
            match args.next() {
                Some(path) if !path.is_empty() && !path.starts_with("--") => {
                    script = Some(PathBuf::from(path));
                }
                _ => return Err(DriverError::Config("--script requires a path".into())),
            }
        }
    }
    Ok(script)
}
