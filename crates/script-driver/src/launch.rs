//! Engine launch command

use std::fmt;

use tokio::process::Command;

use crate::error::DriverError;

/// Executable plus arguments used to start the engine under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run a literal command string through `<shell> -c`
    pub fn shell(shell: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(shell, ["-c".to_string(), command.into()])
    }

    /// Split a command string on whitespace and exec it without a shell
    pub fn direct(command: &str) -> Result<Self, DriverError> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| DriverError::Config("engine command is empty".into()))?;
        Ok(Self::new(program, parts))
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
