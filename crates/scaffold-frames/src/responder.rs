//! Frame step responder.

use crate::document::{BaseUrl, FrameDocument};
use crate::sequence::{FrameSequence, FrameStep};
use crate::templates::TemplateEngine;
use crate::DEFAULT_TITLE;

/// Route the frame sequence is served from.
pub const FRAME_ROUTE: &str = "/api";

/// Errors that can occur while building a frame document.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Maps a step identifier to a frame document.
///
/// Holds only read-only state; one instance serves every request.
pub struct FrameResponder {
    base_url: BaseUrl,
    sequence: FrameSequence,
    title: String,
    templates: TemplateEngine,
}

impl FrameResponder {
    /// Create a responder for the given origin and sequence.
    pub fn new(base_url: BaseUrl, sequence: FrameSequence) -> Result<Self, FrameError> {
        Ok(Self {
            base_url,
            sequence,
            title: DEFAULT_TITLE.to_string(),
            templates: TemplateEngine::new()?,
        })
    }

    /// Override the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Resolve a raw `id` parameter to a step.
    ///
    /// Malformed ids and ids past the end of the sequence restart at step 1.
    pub fn step(&self, raw_id: Option<&str>) -> FrameStep<'_> {
        match self.sequence.resolve(raw_id) {
            Ok(step) => step,
            Err(e) => {
                tracing::warn!(id = ?raw_id, error = %e, "Unknown frame step, serving step 1");
                self.sequence.first()
            }
        }
    }

    /// Build the document for a raw `id` parameter.
    pub fn document(&self, raw_id: Option<&str>) -> FrameDocument {
        let step = self.step(raw_id);
        FrameDocument::for_step(&step, &self.base_url, &self.title)
    }

    /// Render the HTML for a raw `id` parameter.
    pub fn respond(&self, raw_id: Option<&str>) -> Result<String, FrameError> {
        let doc = self.document(raw_id);
        tracing::debug!(id = ?raw_id, tags = doc.tags.len(), "Rendering frame");

        Ok(self.templates.render_frame(&doc.title, &doc.tags)?)
    }
}
