// Image publishing - build the image, then push it to its registry.
//
// Exactly two sequential steps. The first non-zero exit from the container
// tool aborts the run; its status is carried in the error so the process
// can exit with the same code. No retries, no cleanup of a built image
// that never got pushed.

mod docker;
mod error;
mod registry;

pub use error::{PublishError, Step};

use tracing::info;

use crate::config::Config;

/// Build the image from the configured context and push it under its
/// reference. Prints one confirmation line only when both steps succeed.
pub fn publish_image(config: &Config) -> Result<(), PublishError> {
    docker::build_image(&config.container_cli, &config.image, &config.build_context)?;
    registry::push_image(&config.container_cli, &config.image)?;

    info!("✓ Successfully published image '{}'", config.image);
    Ok(())
}
