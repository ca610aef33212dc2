//! The linear frame sequence, expressed as data.

use serde::{Deserialize, Serialize};

use crate::step::{parse_step_id, InvalidStepId, StepId};

/// Maximum number of buttons a frame may carry.
pub const MAX_BUTTONS: usize = 4;

/// Label of the forward button in the default sequence.
pub const NEXT_LABEL: &str = "Next →";

/// An external link button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    /// Button text
    pub label: String,
    /// URL opened by the client
    pub target: String,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Scaffold-ETH 2 repository.
    pub fn github() -> Self {
        Self::new("🛠️ GitHub", "https://github.com/scaffold-eth/scaffold-eth-2")
    }

    /// Scaffold-ETH 2 documentation.
    pub fn docs() -> Self {
        Self::new("📃 Docs", "https://docs.scaffoldeth.io/")
    }

    /// Community Telegram group.
    pub fn telegram() -> Self {
        Self::new("💬 Telegram", "https://t.me/joinchat/KByvmRe5wkR-8F_zz6AjpA")
    }
}

/// What a step offers the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// A single button that posts back for the next step
    Forward { label: String },

    /// Link buttons out of the sequence; no callback
    Terminal { links: Vec<LinkButton> },
}

/// Metadata for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    /// Image path relative to the base URL (e.g. `frames/frame-1.png`)
    pub image: String,

    /// Forward or terminal
    pub kind: StepKind,
}

impl StepSpec {
    pub fn forward(image: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            kind: StepKind::Forward {
                label: label.into(),
            },
        }
    }

    pub fn terminal(image: impl Into<String>, links: Vec<LinkButton>) -> Self {
        Self {
            image: image.into(),
            kind: StepKind::Terminal { links },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::Terminal { .. })
    }
}

/// Errors from building a sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("frame sequence has no steps")]
    Empty,

    #[error("last step must be terminal")]
    MissingTerminal,

    #[error("step {0} is terminal but is not the last step")]
    EarlyTerminal(usize),

    #[error("terminal step needs between 1 and 4 links, got {0}")]
    LinkCount(usize),
}

/// Errors from resolving a request against the sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Invalid(#[from] InvalidStepId),

    #[error("step {id} is past the end of the sequence ({len} steps)")]
    OutOfRange { id: StepId, len: usize },
}

/// A step resolved for a single request.
#[derive(Debug, Clone, Copy)]
pub struct FrameStep<'a> {
    /// Current step
    pub id: StepId,
    /// `id + 1`, computed even for the terminal step
    pub next_id: StepId,
    /// Step metadata
    pub spec: &'a StepSpec,
}

impl FrameStep<'_> {
    pub fn is_terminal(&self) -> bool {
        self.spec.is_terminal()
    }
}

/// Ordered list of steps; step `n` lives at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    steps: Vec<StepSpec>,
}

impl FrameSequence {
    /// Build a sequence, checking that only the last step is terminal.
    pub fn new(steps: Vec<StepSpec>) -> Result<Self, SequenceError> {
        let Some(last) = steps.last() else {
            return Err(SequenceError::Empty);
        };

        match &last.kind {
            StepKind::Terminal { links } if links.is_empty() || links.len() > MAX_BUTTONS => {
                return Err(SequenceError::LinkCount(links.len()));
            }
            StepKind::Terminal { .. } => {}
            StepKind::Forward { .. } => return Err(SequenceError::MissingTerminal),
        }

        if let Some(pos) = steps[..steps.len() - 1]
            .iter()
            .position(StepSpec::is_terminal)
        {
            return Err(SequenceError::EarlyTerminal(pos + 1));
        }

        Ok(Self { steps })
    }

    /// The six-step tour of Scaffold-ETH 2.
    pub fn scaffold() -> Self {
        let mut steps: Vec<StepSpec> = (1..=5)
            .map(|n| StepSpec::forward(format!("frames/frame-{n}.png"), NEXT_LABEL))
            .collect();

        steps.push(StepSpec::terminal(
            "frames/buidlguidl.jpg",
            vec![
                LinkButton::github(),
                LinkButton::docs(),
                LinkButton::telegram(),
            ],
        ));

        Self { steps }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    /// Look up a step by id.
    pub fn step(&self, id: StepId) -> Option<FrameStep<'_>> {
        self.steps.get(id.index()).map(|spec| FrameStep {
            id,
            next_id: id.next(),
            spec,
        })
    }

    /// The initial step.
    pub fn first(&self) -> FrameStep<'_> {
        FrameStep {
            id: StepId::FIRST,
            next_id: StepId::FIRST.next(),
            spec: &self.steps[0],
        }
    }

    /// Parse a raw `id` parameter and look up the step.
    pub fn resolve(&self, raw: Option<&str>) -> Result<FrameStep<'_>, StepError> {
        let id = parse_step_id(raw)?;
        self.step(id).ok_or(StepError::OutOfRange {
            id,
            len: self.len(),
        })
    }
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self::scaffold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_sequence_is_valid() {
        let seq = FrameSequence::scaffold();
        assert_eq!(seq.len(), 6);
        assert_eq!(FrameSequence::new(seq.steps().to_vec()), Ok(seq));
    }

    #[test]
    fn only_step_six_is_terminal() {
        let seq = FrameSequence::scaffold();
        for n in 1..=6 {
            let step = seq.step(StepId::new(n).unwrap()).unwrap();
            assert_eq!(step.is_terminal(), n == 6, "step {n}");
            assert_eq!(step.next_id.get(), n + 1);
        }
    }

    #[test]
    fn resolve_defaults_to_first_step() {
        let seq = FrameSequence::scaffold();
        let step = seq.resolve(None).unwrap();
        assert_eq!(step.id, StepId::FIRST);
        assert_eq!(step.spec.image, "frames/frame-1.png");
    }

    #[test]
    fn resolve_reports_bad_ids() {
        let seq = FrameSequence::scaffold();

        assert!(matches!(
            seq.resolve(Some("abc")),
            Err(StepError::Invalid(InvalidStepId::NotANumber(_)))
        ));
        assert!(matches!(
            seq.resolve(Some("7")),
            Err(StepError::OutOfRange { len: 6, .. })
        ));
    }

    #[test]
    fn rejects_empty_sequence() {
        assert_eq!(FrameSequence::new(vec![]), Err(SequenceError::Empty));
    }

    #[test]
    fn rejects_sequence_without_terminal() {
        let steps = vec![StepSpec::forward("a.png", NEXT_LABEL)];
        assert_eq!(
            FrameSequence::new(steps),
            Err(SequenceError::MissingTerminal)
        );
    }

    #[test]
    fn rejects_terminal_in_the_middle() {
        let links = vec![LinkButton::new("Docs", "https://example.com")];
        let steps = vec![
            StepSpec::forward("a.png", NEXT_LABEL),
            StepSpec::terminal("b.png", links.clone()),
            StepSpec::terminal("c.png", links),
        ];
        assert_eq!(
            FrameSequence::new(steps),
            Err(SequenceError::EarlyTerminal(2))
        );
    }

    #[test]
    fn rejects_bad_link_counts() {
        let too_many = (0..5)
            .map(|i| LinkButton::new(format!("L{i}"), "https://example.com"))
            .collect();

        assert_eq!(
            FrameSequence::new(vec![StepSpec::terminal("a.png", too_many)]),
            Err(SequenceError::LinkCount(5))
        );
        assert_eq!(
            FrameSequence::new(vec![StepSpec::terminal("a.png", vec![])]),
            Err(SequenceError::LinkCount(0))
        );
    }
}
