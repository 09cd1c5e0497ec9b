//! Black-box scenario runner for the toolbelt binaries.
//!
//! Usage: `toolbelt-test-harness <scenario.yaml>...`, run from the workspace
//! root after building the binaries. Each scenario names a command, optional
//! text for its stdin, and what the exit status and output must contain.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{Read, Write};
use std::process::{exit, Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Scenario {
    description: String,
    command: Vec<String>,
    /// Written to the child's stdin, which is then closed
    #[serde(default)]
    stdin: Option<String>,
    #[serde(default)]
    assertions: Assertions,
    /// Present for servers: the child is killed after the startup window
    #[serde(default)]
    long_running: Option<LongRunning>,
}

#[derive(Debug, Deserialize)]
struct LongRunning {
    startup_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Default)]
struct Assertions {
    exit_code: Option<i32>,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_excludes: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
}

struct Outcome {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: toolbelt-test-harness <scenario.yaml>...");
        exit(2);
    }

    let mut failures = 0;
    for path in &paths {
        match run_scenario(path) {
            Ok(()) => println!("PASS {}", path),
            Err(e) => {
                failures += 1;
                println!("FAIL {}\n{:#}", path, e);
            }
        }
    }

    println!("{} passed, {} failed", paths.len() - failures, failures);
    if failures > 0 {
        exit(1);
    }
}

fn run_scenario(path: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file at '{}'", path))?;
    let scenario: Scenario = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from scenario file '{}'", path))?;

    println!("--- {} ---", scenario.description);

    let (executable, args) = scenario
        .command
        .split_first()
        .ok_or_else(|| anyhow!("Command in scenario file cannot be empty"))?;

    let mut child = Command::new(executable)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn command: {:?}", scenario.command))?;

    {
        // Dropping the handle closes stdin so readers see end of input
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Child stdin was not captured"))?;
        if let Some(text) = &scenario.stdin {
            stdin
                .write_all(text.as_bytes())
                .context("Failed to write scenario stdin")?;
        }
    }

    let outcome = match &scenario.long_running {
        Some(mode) => stop_after_startup(child, mode)?,
        None => {
            let output = child
                .wait_with_output()
                .context("Failed to wait for command")?;
            Outcome {
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
    };

    verify(&outcome, &scenario.assertions)
}

fn stop_after_startup(mut child: Child, mode: &LongRunning) -> Result<Outcome> {
    sleep(Duration::from_millis(mode.startup_timeout_ms));

    if let Some(status) = child.try_wait()? {
        let (stdout, stderr) = drain(&mut child)?;
        bail!(
            "Process exited prematurely with status: {}\n---\nSTDOUT:\n{}\n---\nSTDERR:\n{}",
            status,
            stdout,
            stderr
        );
    }

    child.kill().context("Failed to kill child process")?;
    let status = child.wait().context("Failed to wait for child process")?;
    let (stdout, stderr) = drain(&mut child)?;
    Ok(Outcome {
        status,
        stdout,
        stderr,
    })
}

fn drain(child: &mut Child) -> Result<(String, String)> {
    let mut stdout = Vec::new();
    if let Some(mut pipe) = child.stdout.take() {
        pipe.read_to_end(&mut stdout)?;
    }
    let mut stderr = Vec::new();
    if let Some(mut pipe) = child.stderr.take() {
        pipe.read_to_end(&mut stderr)?;
    }
    Ok((
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    ))
}

fn verify(outcome: &Outcome, assertions: &Assertions) -> Result<()> {
    let report = || {
        format!(
            "---\nSTDOUT:\n{}\n---\nSTDERR:\n{}",
            outcome.stdout, outcome.stderr
        )
    };

    if let Some(expected) = assertions.exit_code {
        if outcome.status.code() != Some(expected) {
            bail!(
                "Exit code mismatch. Expected: {}, actual: {:?}\n{}",
                expected,
                outcome.status.code(),
                report()
            );
        }
    }

    for expected in &assertions.stdout_contains {
        if !outcome.stdout.contains(expected.as_str()) {
            bail!("STDOUT did not contain '{}'\n{}", expected, report());
        }
    }

    for unexpected in &assertions.stdout_excludes {
        if outcome.stdout.contains(unexpected.as_str()) {
            bail!("STDOUT unexpectedly contained '{}'\n{}", unexpected, report());
        }
    }

    for expected in &assertions.stderr_contains {
        if !outcome.stderr.contains(expected.as_str()) {
            bail!("STDERR did not contain '{}'\n{}", expected, report());
        }
    }

    Ok(())
}
