use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Result;

pub struct ShaderDiscoveryConfig {
    /// Directory to scan (not recursive)
    pub root_dir: PathBuf,
    /// Source extension without the leading dot (e.g. "hlsl")
    pub extension: String,
    /// Exact file names to skip, such as shared includes
    pub ignore_patterns: Vec<String>,
}

impl Default for ShaderDiscoveryConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("shaders"),
            extension: "hlsl".to_string(),
            ignore_patterns: vec!["shared.hlsl".to_string()],
        }
    }
}

impl ShaderDiscoveryConfig {
    pub fn new<P: Into<PathBuf>>(root_dir: P) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    fn accepts(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.extension);
        file_name.ends_with(&suffix) && !self.ignore_patterns.iter().any(|p| file_name == p)
    }
}

/// List the shader sources directly inside `config.root_dir`.
///
/// Returns absolute paths sorted by file name. An empty directory yields an
/// empty list.
pub fn discover_shaders(config: &ShaderDiscoveryConfig) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(&config.root_dir).with_context(|| {
        format!(
            "Failed to resolve shader directory {}",
            config.root_dir.display()
        )
    })?;

    let entries = fs::read_dir(&root)
        .with_context(|| format!("Failed to read shader directory {}", root.display()))?;

    let mut shaders = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read an entry in {}", root.display()))?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            log::warn!(
                "Skipping non UTF-8 file name in {}: {:?}",
                root.display(),
                file_name
            );
            continue;
        };

        if config.accepts(name) {
            shaders.push(root.join(name));
        }
    }

    shaders.sort();
    log::info!(
        "Discovered {} shader(s) in {}",
        shaders.len(),
        root.display()
    );

    Ok(shaders)
}

/// Discover shaders in `root_dir` with the default extension and exclusions.
pub fn discover_shaders_in(root_dir: &Path) -> Result<Vec<PathBuf>> {
    discover_shaders(&ShaderDiscoveryConfig::new(root_dir))
}
