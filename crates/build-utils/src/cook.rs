use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Result;
use crate::compiler::{CommandRunner, CompilerInvocation, ProcessRunner};
use crate::format::OutputFormat;

/// One (input, format) pair that did not produce an output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookFailure {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub reason: String,
}

/// Outcome of a whole batch. Failed pairs do not stop the batch; callers
/// decide whether any failure is fatal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CookReport {
    pub attempted: usize,
    pub outputs: Vec<PathBuf>,
    pub failures: Vec<CookFailure>,
}

impl CookReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Compile every input into every format by spawning `compiler`.
///
/// Outputs go to `<output_root>/<format>/<stem>.<format>`.
pub fn cook(inputs: &[PathBuf], output_root: &Path, compiler: &Path) -> Result<CookReport> {
    cook_with(inputs, output_root, compiler, &ProcessRunner)
}

/// Same as [`cook`], with invocations executed by `runner`.
///
/// Formats are the outer loop and inputs the inner one. Each pair is attempted
/// exactly once. Only a failure to create an output directory returns `Err`.
pub fn cook_with(
    inputs: &[PathBuf],
    output_root: &Path,
    compiler: &Path,
    runner: &dyn CommandRunner,
) -> Result<CookReport> {
    let mut report = CookReport::default();

    for format in OutputFormat::ALL {
        let out_dir = format.output_dir(output_root);
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

        for input in inputs {
            report.attempted += 1;
            let name = display_name(input);

            let output = match format.output_path(output_root, input) {
                Ok(output) => output,
                Err(e) => {
                    log::error!("Error compiling {} to {}: {:#}", name, format, e);
                    report.failures.push(CookFailure {
                        input: input.clone(),
                        format,
                        reason: format!("{:#}", e),
                    });
                    continue;
                }
            };

            let invocation = CompilerInvocation::new(compiler, input, format, output);
            log::info!(
                "Compiling {} to {} ({})...",
                name,
                format,
                format.description()
            );
            log::info!("{}", invocation.command_line());

            let reason = match runner.run(&invocation) {
                Ok(result) if result.success() => {
                    log::info!("Successfully compiled to {}", invocation.output.display());
                    report.outputs.push(invocation.output);
                    continue;
                }
                Ok(result) => {
                    if !result.stdout.trim().is_empty() {
                        log::debug!("{} stdout:\n{}", name, result.stdout.trim_end());
                    }
                    let code = result
                        .exit_code
                        .map_or_else(|| "signal".to_string(), |c| c.to_string());
                    format!("exit code {}: {}", code, result.stderr.trim_end())
                }
                Err(e) => format!("{:#}", e),
            };

            log::error!("Error compiling {} to {}:\n{}", name, format, reason);
            report.failures.push(CookFailure {
                input: input.clone(),
                format,
                reason,
            });
        }
    }

    log::info!(
        "Cooked {} of {} shader outputs",
        report.outputs.len(),
        report.attempted
    );

    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
