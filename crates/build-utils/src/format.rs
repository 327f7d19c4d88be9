use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Result;

/// Target representation produced by the cross-compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// DirectX Intermediate Language
    Dxil,
    /// SPIR-V (Vulkan)
    Spv,
    /// Metal Shading Language
    Msl,
}

impl OutputFormat {
    /// Every format, in the order they are cooked.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Dxil, OutputFormat::Spv, OutputFormat::Msl];

    /// Identifier used both as the output subdirectory and the file extension.
    pub fn id(self) -> &'static str {
        match self {
            OutputFormat::Dxil => "dxil",
            OutputFormat::Spv => "spv",
            OutputFormat::Msl => "msl",
        }
    }

    /// Extra compiler flags for this format. Empty for now.
    pub fn extra_flags(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Dxil | OutputFormat::Spv | OutputFormat::Msl => &[],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Dxil => "DirectX Intermediate Language",
            OutputFormat::Spv => "SPIR-V (Vulkan)",
            OutputFormat::Msl => "Metal Shading Language",
        }
    }

    /// Directory that holds every output of this format.
    pub fn output_dir(self, output_root: &Path) -> PathBuf {
        output_root.join(self.id())
    }

    /// `<output_root>/<id>/<input name minus its last extension>.<id>`
    ///
    /// `.hlsl` maps to `.<id>`, unlike `Path::file_stem`.
    pub fn output_path(self, output_root: &Path, input: &Path) -> Result<PathBuf> {
        let name = input
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Shader path has no UTF-8 file name: {}", input.display()))?;

        let base = name.rfind('.').map_or(name, |dot| &name[..dot]);

        Ok(self
            .output_dir(output_root)
            .join(format!("{}.{}", base, self.id())))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
