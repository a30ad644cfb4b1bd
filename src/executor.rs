use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use log::info;

use crate::error::LaunchError;

pub trait Launcher {
    fn launch(&self, command: &str) -> Result<(), LaunchError>;
}

/// Hands commands to `<shell> -c` and forgets about them.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    shell: String,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }

    /// `<shell> -c command` with null stdio, in a process group of its own.
    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0);
        cmd
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new("/bin/sh")
    }
}

impl Launcher for ShellLauncher {
    fn launch(&self, command: &str) -> Result<(), LaunchError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        let child = self.command(command).spawn().map_err(|source| LaunchError::Spawn {
            shell: self.shell.clone(),
            command: command.to_string(),
            source,
        })?;

        // The child is not waited on; it outlives the launcher in its own process group.
        info!("Launched `{}` (pid {})", command, child.id());
        Ok(())
    }
}

/// Launches `command` through `/bin/sh` without waiting for it.
pub fn launch(command: &str) -> Result<(), LaunchError> {
    ShellLauncher::default().launch(command)
}
