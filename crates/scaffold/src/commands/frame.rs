//! Print a frame document.

use std::path::Path;

use anyhow::Result;

/// Run the frame command.
pub async fn run(config_path: &Path, id: Option<String>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let frames = super::responder(&config)?;

    let step = frames.step(id.as_deref());
    tracing::debug!(
        step = %step.id,
        next = %step.next_id,
        terminal = step.is_terminal(),
        "Resolved frame step"
    );

    println!("{}", frames.respond(id.as_deref())?);

    Ok(())
}
