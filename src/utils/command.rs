use std::fmt;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, SysfactsError};

/// Program plus arguments, run without an intermediate shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of asynchronous field strategies.
pub trait CommandExecutor: Send + Sync {
    /// Returns captured stdout, or an error when the command is missing,
    /// exits abnormally or overruns the executor's deadline, if it has one.
    fn execute(&self, command: &CommandLine) -> Result<String>;
}

/// Runs commands to completion. With a timeout, a command still running at
/// the deadline is killed and reported as an execution error.
pub struct ShellExecutor {
    timeout: Option<Duration>,
}

impl ShellExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &CommandLine) -> Result<String> {
        let started = Instant::now();
        let result = run_command_with_timeout(command, self.timeout);
        match &result {
            Ok(output) => debug!(
                %command,
                bytes = output.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "command finished"
            ),
            Err(err) => debug!(%command, error = %err, "command failed"),
        }
        result
    }
}

fn run_command_with_timeout(command: &CommandLine, timeout: Option<Duration>) -> Result<String> {
    let label = command.to_string();
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| SysfactsError::execution(&label, err.to_string()))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| SysfactsError::execution(&label, "stdout was not captured"))?;
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut reader = io::BufReader::new(stdout);
        let mut output = String::new();
        let _ = reader.read_to_string(&mut output);
        let _ = tx.send(output);
    });
    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if let Some(timeout) = timeout
                    && start.elapsed() >= timeout
                {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SysfactsError::execution(
                        &label,
                        format!("timed out after {}ms", timeout.as_millis()),
                    ));
                }
            }
            Err(err) => return Err(SysfactsError::execution(&label, err.to_string())),
        }
        thread::sleep(Duration::from_millis(10));
    };

    let output = rx
        .recv()
        .map_err(|_| SysfactsError::execution(&label, "output reader stopped"))?;
    if status.success() {
        Ok(output)
    } else {
        Err(SysfactsError::command_failed(label, status.code()))
    }
}

/// Canned executor for probe tests: known command lines answer with their
/// output, everything else behaves like a missing program.
#[cfg(test)]
pub(crate) struct FakeExecutor {
    responses: std::collections::HashMap<String, String>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl FakeExecutor {
    pub(crate) fn new() -> Self {
        Self {
            responses: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond(mut self, command: &str, output: &str) -> Self {
        self.responses.insert(command.to_string(), output.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl CommandExecutor for FakeExecutor {
    fn execute(&self, command: &CommandLine) -> Result<String> {
        let label = command.to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(label.clone());
        }
        self.responses
            .get(&label)
            .cloned()
            .ok_or_else(|| SysfactsError::execution(label, "not found"))
    }
}
