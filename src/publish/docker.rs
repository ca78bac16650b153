// Docker/Podman image builds

use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use super::{PublishError, Step};
use crate::config::ImageReference;

/// Build an image from `context` and tag it with `image`.
pub(crate) fn build_image(
    container_cli: &str,
    image: &ImageReference,
    context: &Path,
) -> Result<(), PublishError> {
    info!("Building image with {}: {}", container_cli, image);

    let mut cmd = Command::new(container_cli);
    cmd.arg("build").arg("-t").arg(image.as_str()).arg(context);

    debug!("Executing command: {:?}", cmd);

    let status = cmd.status().map_err(|source| PublishError::Spawn {
        step: Step::Build,
        container_cli: container_cli.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(PublishError::ToolFailed {
            step: Step::Build,
            container_cli: container_cli.to_string(),
            status,
        });
    }

    Ok(())
}
