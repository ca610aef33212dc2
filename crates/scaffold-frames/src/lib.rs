//! Farcaster frame sequence for the Scaffold-ETH 2 site.
//!
//! Maps a step identifier to a static HTML document whose meta tags describe
//! the frame image and its buttons.

pub mod document;
pub mod meta;
pub mod responder;
pub mod sequence;
pub mod step;
pub mod templates;

pub use document::{BaseUrl, FrameDocument, MetaTag};
pub use meta::{PageMeta, DEFAULT_DESCRIPTION};
pub use responder::{FrameError, FrameResponder, FRAME_ROUTE};
pub use sequence::{
    FrameSequence, FrameStep, LinkButton, SequenceError, StepError, StepKind, StepSpec,
};
pub use step::{parse_step_id, InvalidStepId, StepId};
pub use templates::{PageLink, TemplateEngine};

/// Frame protocol version advertised in `fc:frame`.
pub const FRAME_VERSION: &str = "vNext";

/// Default document title.
pub const DEFAULT_TITLE: &str =
    "Scaffold-ETH 2 - Open source toolkit to build dApps on Ethereum";
