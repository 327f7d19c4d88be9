//! Build-time helpers for cooking shader sources into per-backend binaries
//! with an external cross-compiler.

pub type Result<T> = anyhow::Result<T>;

pub mod compiler;
pub mod cook;
pub mod discover;
pub mod format;

#[cfg(test)]
mod test_support;

pub use compiler::{
    CommandRunner, CompilerInvocation, DEFAULT_COMPILER, InvocationOutput, ProcessRunner,
};
pub use cook::{CookFailure, CookReport, cook, cook_with};
pub use discover::{ShaderDiscoveryConfig, discover_shaders, discover_shaders_in};
pub use format::OutputFormat;
