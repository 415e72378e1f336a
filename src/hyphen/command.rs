//! External hyphenation program
//!
//! Runs a program that prints the delimited stream on stdout. The text is
//! passed either as the final argument or on stdin. Exit status, stderr and
//! timeouts are reported as errors.

use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::{HyphenateError, Hyphenator};

/// Default time allowed for one hyphenation run
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How lyric text reaches the external program
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextInput {
    /// Appended as the final command-line argument
    #[default]
    Argument,
    /// Written to the program's stdin
    Stdin,
}

/// Hyphenator backed by an external program
#[derive(Debug, Clone)]
pub struct CommandHyphenator {
    program: String,
    args: Vec<String>,
    input: TextInput,
    timeout: Duration,
}

impl CommandHyphenator {
    /// Creates a hyphenator running `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            input: TextInput::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn(&self, text: &str) -> Result<Child, HyphenateError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        match self.input {
            TextInput::Argument => {
                command.arg(text).stdin(Stdio::null());
            }
            TextInput::Stdin => {
                command.stdin(Stdio::piped());
            }
        }

        command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HyphenateError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Waits for the child, killing it once the timeout passes
    fn wait(&self, child: &mut Child) -> Result<std::process::ExitStatus, HyphenateError> {
        let start = Instant::now();

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            if start.elapsed() >= self.timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(HyphenateError::Timeout {
                    program: self.program.clone(),
                    timeout: self.timeout,
                });
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Hyphenator for CommandHyphenator {
    fn name(&self) -> &str {
        &self.program
    }

    fn segment(&self, text: &str) -> Result<String, HyphenateError> {
        let mut child = self.spawn(text)?;

        // Pipes are serviced on their own threads so the timeout always applies
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());
        let writer = feed(child.stdin.take(), text);

        let status = self.wait(&mut child)?;
        finish(writer)?;
        let status = self.wait(&mut child)?;
        let stdout = collect(stdout)?;
        let stderr = collect(stderr)?;

        if !status.success() {
            return Err(HyphenateError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        let output = String::from_utf8(stdout).map_err(|_| HyphenateError::InvalidOutput {
            program: self.program.clone(),
        })?;

        Ok(output.trim().to_string())
    }
}

type Drain = Option<JoinHandle<std::io::Result<Vec<u8>>>>;

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Drain {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

type Feed = Option<JoinHandle<std::io::Result<()>>>;

/// Writes the text to stdin; a program may exit without reading its input
fn feed<W: Write + Send + 'static>(pipe: Option<W>, text: &str) -> Feed {
    let text = text.to_string();
    pipe.map(|mut pipe| {
        thread::spawn(move || match pipe.write_all(text.as_bytes()) {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            result => result,
        })
    })
}

fn finish(handle: Feed) -> Result<(), HyphenateError> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| std::io::Error::other("pipe writer panicked"))?
            .map_err(HyphenateError::from),
        None => Ok(()),
    }
}

fn collect(handle: Drain) -> Result<Vec<u8>, HyphenateError> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| std::io::Error::other("pipe reader panicked"))?
            .map_err(HyphenateError::from),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let hyphenator = CommandHyphenator::new("python")
            .with_args(["voikk.py"])
            .with_input(TextInput::Stdin)
            .with_timeout(Duration::from_secs(3));

        assert_eq!(hyphenator.program(), "python");
        assert_eq!(hyphenator.args, vec!["voikk.py".to_string()]);
        assert_eq!(hyphenator.input, TextInput::Stdin);
        assert_eq!(hyphenator.timeout, Duration::from_secs(3));
        assert_eq!(hyphenator.name(), "python");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let hyphenator = CommandHyphenator::new("riimi-no-such-hyphenator");
        let result = hyphenator.segment("kissa");

        assert!(matches!(result, Err(HyphenateError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn text_as_argument() {
        let hyphenator = CommandHyphenator::new("echo");
        assert_eq!(hyphenator.segment("kis-sa;koi-ra").unwrap(), "kis-sa;koi-ra");
    }

    #[cfg(unix)]
    #[test]
    fn text_on_stdin() {
        let hyphenator = CommandHyphenator::new("cat").with_input(TextInput::Stdin);
        assert_eq!(hyphenator.segment("lin-tu\n").unwrap(), "lin-tu");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure_with_stderr() {
        let hyphenator = CommandHyphenator::new("sh")
            .with_args(["-c", "echo broken >&2; exit 3"])
            .with_input(TextInput::Stdin);

        match hyphenator.segment("kissa") {
            Err(HyphenateError::Failed { stderr, .. }) => assert_eq!(stderr, "broken"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn slow_program_times_out() {
        let hyphenator = CommandHyphenator::new("sleep")
            .with_args(["5"])
            .with_input(TextInput::Stdin)
            .with_timeout(Duration::from_millis(100));

        let result = hyphenator.segment("kissa");
        assert!(matches!(result, Err(HyphenateError::Timeout { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_applies_when_stdin_is_never_read() {
        let hyphenator = CommandHyphenator::new("sleep")
            .with_args(["3"])
            .with_input(TextInput::Stdin)
            .with_timeout(Duration::from_millis(100));

        // Larger than a pipe buffer, so writing would block
        let text = "kissa ".repeat(100_000);
        let start = Instant::now();
        let result = hyphenator.segment(&text);

        assert!(matches!(result, Err(HyphenateError::Timeout { .. })));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[cfg(unix)]
    #[test]
    fn large_stdin_is_fully_written() {
        let hyphenator = CommandHyphenator::new("wc")
            .with_args(["-c"])
            .with_input(TextInput::Stdin);

        let text = "kis-sa;".repeat(20_000);
        assert_eq!(hyphenator.segment(&text).unwrap(), "140000");
    }
}
