// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! Harness for driving the multicall `symcheck` binary from integration
//! tests and asserting on its exit code and captured output streams.

#![allow(dead_code)]

use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};
use std::rc::Rc;

use tempfile::TempDir;

/// Path to the multicall binary under test.
pub const TESTS_BINARY: &str = env!("CARGO_BIN_EXE_symcheck");

/// A scenario for invoking one checker, holding a unique temporary
/// working directory for the spawned process.
pub struct TestScenario {
    pub util_name: String,
    tmpd: Rc<TempDir>,
}

impl TestScenario {
    pub fn new(util_name: &str) -> Self {
        Self {
            util_name: util_name.to_string(),
            tmpd: Rc::new(TempDir::new().unwrap()),
        }
    }

    /// Returns a builder for invoking the checker under test.
    pub fn ucmd(&self) -> UCommand {
        UCommand::new(&self.util_name, Rc::clone(&self.tmpd))
    }
}

/// Builder for one invocation of the binary under test.
pub struct UCommand {
    util_name: String,
    args: Vec<OsString>,
    tmpd: Rc<TempDir>,
    has_run: bool,
}

impl UCommand {
    pub fn new(util_name: &str, tmpd: Rc<TempDir>) -> Self {
        Self {
            util_name: util_name.to_string(),
            args: Vec::new(),
            tmpd,
            has_run: false,
        }
    }

    pub fn arg<S: Into<OsString>>(&mut self, arg: S) -> &mut Self {
        assert!(!self.has_run, "No args can be added after the command has run");
        self.args.push(arg.into());
        self
    }

    pub fn args<S: AsRef<str>>(&mut self, args: &[S]) -> &mut Self {
        for arg in args {
            self.arg(arg.as_ref());
        }
        self
    }

    /// Spawns the command, waits for it and returns the result.
    pub fn run(&mut self) -> CmdResult {
        assert!(!self.has_run, "Command already run");
        self.has_run = true;

        let output = Command::new(TESTS_BINARY)
            .arg(&self.util_name)
            .args(&self.args)
            .current_dir(self.tmpd.path())
            .stdin(Stdio::null())
            .output()
            .unwrap_or_else(|e| panic!("Failed to run {TESTS_BINARY}: {e}"));

        CmdResult {
            exit_status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    /// Spawns the command and asserts a zero exit status.
    #[track_caller]
    pub fn succeeds(&mut self) -> CmdResult {
        let cmd_result = self.run();
        cmd_result.success();
        cmd_result
    }

    /// Spawns the command and asserts a non-zero exit status.
    #[track_caller]
    pub fn fails(&mut self) -> CmdResult {
        let cmd_result = self.run();
        cmd_result.failure();
        cmd_result
    }
}

/// Outcome of one finished invocation, with fluent assertion helpers.
pub struct CmdResult {
    exit_status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CmdResult {
    /// Returns the program's standard output as a string slice
    pub fn stdout_str(&self) -> &str {
        std::str::from_utf8(&self.stdout).unwrap()
    }

    /// Returns the program's standard error as a string slice
    pub fn stderr_str(&self) -> &str {
        std::str::from_utf8(&self.stderr).unwrap()
    }

    /// Returns the program's exit code
    pub fn code(&self) -> i32 {
        self.exit_status.code().unwrap()
    }

    /// Verify the exit code of the program
    #[track_caller]
    pub fn code_is(&self, expected_code: i32) -> &Self {
        if self.code() != expected_code {
            eprintln!(
                "stdout:\n{}\nstderr:\n{}",
                self.stdout_str(),
                self.stderr_str()
            );
        }
        assert_eq!(self.code(), expected_code);
        self
    }

    /// Returns whether the program succeeded
    pub fn succeeded(&self) -> bool {
        self.exit_status.success()
    }

    /// asserts that the command resulted in a success (zero) status code
    #[track_caller]
    pub fn success(&self) -> &Self {
        assert!(
            self.succeeded(),
            "Command was expected to succeed. code: {}\nstdout = {}\n stderr = {}",
            self.code(),
            self.stdout_str(),
            self.stderr_str()
        );
        self
    }

    /// asserts that the command resulted in a failure (non-zero) status code
    #[track_caller]
    pub fn failure(&self) -> &Self {
        assert!(
            !self.succeeded(),
            "Command was expected to fail.\nstdout = {}\n stderr = {}",
            self.stdout_str(),
            self.stderr_str()
        );
        self
    }

    /// asserts that the command resulted in empty stderr stream output
    #[track_caller]
    pub fn no_stderr(&self) -> &Self {
        assert!(
            self.stderr.is_empty(),
            "Expected stderr to be empty, but it's:\n{}",
            self.stderr_str()
        );
        self
    }

    /// asserts that the command resulted in empty stdout stream output
    #[track_caller]
    pub fn no_stdout(&self) -> &Self {
        assert!(
            self.stdout.is_empty(),
            "Expected stdout to be empty, but it's:\n{}",
            self.stdout_str()
        );
        self
    }

    /// asserts that the command's stdout equals the passed in value;
    /// trailing whitespace is kept to force strict comparison
    #[track_caller]
    pub fn stdout_is<T: AsRef<str>>(&self, msg: T) -> &Self {
        assert_eq!(self.stdout_str(), msg.as_ref());
        self
    }

    /// asserts that the command's stderr equals the passed in value
    #[track_caller]
    pub fn stderr_is<T: AsRef<str>>(&self, msg: T) -> &Self {
        assert_eq!(self.stderr_str(), msg.as_ref());
        self
    }

    /// like `stdout_is`, but also asserts stderr is empty
    #[track_caller]
    pub fn stdout_only<T: AsRef<str>>(&self, msg: T) -> &Self {
        self.no_stderr().stdout_is(msg)
    }

    /// like `stderr_is`, but also asserts stdout is empty
    #[track_caller]
    pub fn stderr_only<T: AsRef<str>>(&self, msg: T) -> &Self {
        self.no_stdout().stderr_is(msg)
    }

    /// asserts that the command's stdout contains the passed in value
    #[track_caller]
    pub fn stdout_contains<T: AsRef<str>>(&self, cmp: T) -> &Self {
        assert!(
            self.stdout_str().contains(cmp.as_ref()),
            "'{}' not found in stdout:\n{}",
            cmp.as_ref(),
            self.stdout_str()
        );
        self
    }

    /// asserts that the command's stderr contains the passed in value
    #[track_caller]
    pub fn stderr_contains<T: AsRef<str>>(&self, cmp: T) -> &Self {
        assert!(
            self.stderr_str().contains(cmp.as_ref()),
            "'{}' not found in stderr:\n{}",
            cmp.as_ref(),
            self.stderr_str()
        );
        self
    }
}
