// Run configuration resolved from the process environment at startup.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fully qualified destination of a container image (registry host,
/// repository path, tag). Carried verbatim from `IMAGE_URL`; never parsed
/// or normalized, only required to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            bail!("Image reference must not be empty");
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a run needs, resolved once in main and passed down
/// explicitly.
#[derive(Debug)]
pub struct Config {
    pub image: ImageReference,
    pub container_cli: String,
    pub build_context: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let image = env_var_non_empty("IMAGE_URL")
            .context("IMAGE_URL must be set to the fully qualified image reference")?;
        let image = ImageReference::new(image)?;

        // Use explicit value or default to "docker"
        let container_cli =
            env_var_non_empty("CONTAINER_CLI").unwrap_or_else(|| "docker".to_string());
        debug!("Using container CLI: {}", container_cli);

        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let build_context = build_context_for(&exe)?;
        validate_build_context(&build_context)?;

        Ok(Self {
            image,
            container_cli,
            build_context,
        })
    }
}

/// Read an environment variable, treating empty strings as if the variable
/// is not set.
///
/// This keeps `IMAGE_URL=""` and an unset `IMAGE_URL` on the same error
/// path instead of handing an empty reference to the container tool.
pub(crate) fn env_var_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|v| {
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    })
}

/// The build context is the parent of the directory holding the
/// executable, regardless of the caller's working directory. Pure path
/// math; `validate_build_context` checks the result exists.
pub(crate) fn build_context_for(exe: &Path) -> Result<PathBuf> {
    let bin_dir = exe.parent().with_context(|| {
        format!("Executable path '{}' has no parent directory", exe.display())
    })?;
    let context = bin_dir.parent().with_context(|| {
        format!(
            "Cannot resolve a build context above '{}'",
            bin_dir.display()
        )
    })?;
    Ok(context.to_path_buf())
}

/// The context must be an existing directory before any tool runs.
pub(crate) fn validate_build_context(context: &Path) -> Result<()> {
    if !context.exists() {
        bail!("Build context '{}' does not exist", context.display());
    }
    if !context.is_dir() {
        bail!("Build context '{}' is not a directory", context.display());
    }
    Ok(())
}
