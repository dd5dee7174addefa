//! Interactive child processes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::error::RunError;
use crate::config::ShellConfig;

/// Exit code reported when the platform gives neither a code nor a signal.
const UNKNOWN_EXIT: i32 = -1;

/// Offset shells add to a terminating signal number to form an exit code.
const SIGNAL_EXIT_BASE: i32 = 128;

/// A shell command that runs attached to the caller's terminal.
///
/// The child's stdin, stdout and stderr are the parent's own, so prompts,
/// pagers and editors behave exactly as if launched from an interactive
/// shell. [`Interactive::run`] blocks until the child exits.
///
/// ```no_run
/// use clikit::Interactive;
///
/// let code = Interactive::new("git commit").current_dir("/tmp/repo").run()?;
/// # Ok::<(), clikit::RunError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Interactive {
    command: String,
    cwd: Option<PathBuf>,
    env: Option<HashMap<String, String>>,
    shell: ShellConfig,
}

impl Interactive {
    /// Create a runner for `command`, interpreted by `/bin/sh -c`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            env: None,
            shell: ShellConfig::default(),
        }
    }

    /// Start the child in `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Replace the child's environment with exactly `vars`.
    ///
    /// Nothing from the parent's environment is merged in.
    pub fn env(mut self, vars: HashMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Use a different shell to interpret the command.
    pub fn shell(mut self, shell: ShellConfig) -> Self {
        self.shell = shell;
        self
    }

    /// The command line handed to the shell.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Directory the child starts in, if one was set.
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.shell.program);
        cmd.arg(&self.shell.flag)
            .arg(&self.command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        if let Some(vars) = &self.env {
            cmd.env_clear().envs(vars);
        }
        cmd
    }

    /// Run the command and return its exit code.
    ///
    /// A child killed by a signal yields `128 + signal`.
    pub fn run(&self) -> Result<i32, RunError> {
        tracing::debug!(
            command = %self.command,
            cwd = ?self.cwd,
            env_replaced = self.env.is_some(),
            "starting interactive command"
        );

        let mut child = self.build().spawn().map_err(|source| RunError::Spawn {
            shell: self.shell.program.clone(),
            source,
        })?;

        let status = child.wait().map_err(RunError::Wait)?;
        let code = exit_code(status);

        tracing::debug!(command = %self.command, code, "interactive command finished");
        Ok(code)
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    UNKNOWN_EXIT
}

/// Run `cmd` through the shell with the caller's stdio attached.
///
/// `cwd` defaults to the current directory. `env`, when given, replaces
/// the child's environment entirely; otherwise it is inherited.
pub fn exec_interactive(
    cmd: &str,
    cwd: Option<&Path>,
    env: Option<&HashMap<String, String>>,
) -> Result<i32, RunError> {
    let mut runner = Interactive::new(cmd);
    if let Some(dir) = cwd {
        runner = runner.current_dir(dir);
    }
    if let Some(vars) = env {
        runner = runner.env(vars.clone());
    }
    runner.run()
}
