use std::path::PathBuf;

use build_utils::{Result, ShaderDiscoveryConfig};

mod cli;

/// Shader sources live next to this crate's manifest.
///
/// The path is fixed when the binary is built, so a copied or installed
/// binary still cooks the shaders of the checkout it was built from.
fn shader_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("shadercook", log::LevelFilter::Info)
        .filter_module("build_utils", log::LevelFilter::Info)
        .init();

    let args = cli::CliArgs::parse(std::env::args().skip(1))?;
    if args.show_help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let shader_dir = shader_dir();
    let inputs = build_utils::discover_shaders(&ShaderDiscoveryConfig::new(&shader_dir))?;
    log::info!("{:?}", inputs);

    let report = build_utils::cook(&inputs, &shader_dir.join("compiled"), &args.compiler())?;

    // Failed invocations are reported but never change the exit status.
    if !report.is_success() {
        log::warn!(
            "{} of {} shader compilations failed",
            report.failure_count(),
            report.attempted
        );
    }

    Ok(())
}
