//! Child process execution with a deadline.

use crate::error::{ApprovalError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing a child process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process exited with code 0.
    pub success: bool,

    /// Whether the process was killed because the deadline passed.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a result for a process that ran to completion.
    pub fn finished(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: exit_code == Some(0),
            timed_out: false,
        }
    }

    /// Create a result for a process that was killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: Vec<(String, String)>,

    /// Deadline after which the child is killed (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// Returns `Err` only when the process cannot be started. A non-zero exit
/// or an expired deadline is reported through [`CommandResult`].
pub fn run(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    debug!(command = %command_line, "spawning child process");

    let mut child = cmd.spawn().map_err(|e| ApprovalError::CommandFailed {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break Some(status);
        }
        if let Some(timeout) = options.timeout {
            if start.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
        }
        thread::sleep(POLL_INTERVAL);
    };

    let duration = start.elapsed();

    let Some(status) = status else {
        // Grandchildren may still hold the pipes open, so the readers are left detached.
        debug!(command = %command_line, ?duration, "child process timed out");
        return Ok(CommandResult::timed_out(duration));
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    debug!(command = %command_line, code = ?status.code(), ?duration, "child process exited");

    Ok(CommandResult::finished(
        status.code(),
        stdout,
        stderr,
        duration,
    ))
}

/// Render a command line for logs and error messages.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut bytes);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn run_successful_command() {
        let result = run("sh", &sh("echo hello"), &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert!(!result.timed_out);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn run_failing_command() {
        let result = run("sh", &sh("echo oops >&2; exit 3"), &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn run_with_env() {
        let options = CommandOptions {
            env: vec![("MY_VAR".to_string(), "my_value".to_string())],
            ..Default::default()
        };

        let result = run("sh", &sh("echo $MY_VAR"), &options).unwrap();

        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn run_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = run("sh", &sh("ls"), &options).unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn run_kills_child_at_deadline() {
        let options = CommandOptions {
            timeout: Some(Duration::from_millis(100)),
            ..Default::default()
        };

        let result = run("sh", &sh("sleep 5"), &options).unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert!(result.duration < Duration::from_secs(5));
    }

    #[test]
    fn run_missing_program_is_an_error() {
        let err = run(
            "definitely-not-a-real-program-xyz",
            &["--flag".to_string()],
            &CommandOptions::default(),
        )
        .unwrap_err();

        match err {
            ApprovalError::CommandFailed { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-program-xyz --flag");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_command_joins_arguments() {
        let args = vec!["clone".to_string(), "--depth".to_string(), "1".to_string()];
        assert_eq!(display_command("git", &args), "git clone --depth 1");
    }
}
