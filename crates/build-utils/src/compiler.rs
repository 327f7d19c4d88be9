use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::Result;
use crate::format::OutputFormat;

/// Executable name looked up on PATH when no explicit path is given.
pub const DEFAULT_COMPILER: &str = "shadercross";

/// One `<compiler> <input> [flags] -o <output>` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub program: PathBuf,
    pub input: PathBuf,
    pub flags: Vec<String>,
    pub output: PathBuf,
}

impl CompilerInvocation {
    pub fn new(program: &Path, input: &Path, format: OutputFormat, output: PathBuf) -> Self {
        Self {
            program: program.to_path_buf(),
            input: input.to_path_buf(),
            flags: format.extra_flags().iter().map(|f| f.to_string()).collect(),
            output,
        }
    }

    /// Arguments passed to the program, excluding the program itself.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.flags.len() + 3);
        args.push(self.input.clone().into_os_string());
        args.extend(self.flags.iter().map(OsString::from));
        args.push(OsString::from("-o"));
        args.push(self.output.clone().into_os_string());
        args
    }

    /// The full command, space-joined, as it is logged.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(self.args())
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs compiler invocations to completion.
///
/// `Err` means the invocation could not be run at all; a compiler that ran and
/// reported failure is an `Ok` with a non-zero exit code.
pub trait CommandRunner {
    fn run(&self, invocation: &CompilerInvocation) -> Result<InvocationOutput>;
}

/// Spawns the compiler as a child process and waits for it, capturing
/// stdout and stderr instead of inheriting them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &CompilerInvocation) -> Result<InvocationOutput> {
        let output = Command::new(&invocation.program)
            .args(invocation.args())
            .output()
            .with_context(|| format!("Failed to run {}", invocation.program.display()))?;

        Ok(InvocationOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
