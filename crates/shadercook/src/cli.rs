use std::path::PathBuf;

use anyhow::{Context, bail};
use build_utils::{DEFAULT_COMPILER, Result};

pub const USAGE: &str = "\
Build shaders for the sdl3gpu backend

Usage: shadercook [--shadercross-path <PATH>]

Options:
  --shadercross-path <PATH>  Path to shadercross executable
  -h, --help                 Print help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub shadercross_path: Option<PathBuf>,
    pub show_help: bool,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.show_help = true,
                "--shadercross-path" => {
                    let value = args
                        .next()
                        .context("--shadercross-path expects a path argument")?;
                    parsed.shadercross_path = Some(PathBuf::from(value));
                }
                other => match other.strip_prefix("--shadercross-path=") {
                    Some(value) => parsed.shadercross_path = Some(PathBuf::from(value)),
                    None => bail!("Unrecognized argument: {}\n\n{}", other, USAGE),
                },
            }
        }

        Ok(parsed)
    }

    /// Explicit path if given, otherwise the bare name resolved through PATH.
    pub fn compiler(&self) -> PathBuf {
        self.shadercross_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPILER))
    }
}
