// Container registry operations (push)

use std::process::Command;
use tracing::{debug, info};

use super::{PublishError, Step};
use crate::config::ImageReference;

/// Push an already-built image to its registry.
pub(crate) fn push_image(
    container_cli: &str,
    image: &ImageReference,
) -> Result<(), PublishError> {
    info!("Pushing image to registry: {}", image);

    let mut cmd = Command::new(container_cli);
    cmd.arg("push").arg(image.as_str());

    debug!("Executing command: {:?}", cmd);

    let status = cmd.status().map_err(|source| PublishError::Spawn {
        step: Step::Push,
        container_cli: container_cli.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(PublishError::ToolFailed {
            step: Step::Push,
            container_cli: container_cli.to_string(),
            status,
        });
    }

    Ok(())
}
