//! Fenced Code Block Tracking
//!
//! Explicit two-state machine for fenced-code-block context.
//! One transition rule: a line whose trimmed content starts with the
//! fence marker flips the state.

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Whether the scan is currently inside a fenced code block.
///
/// An odd number of fence-marker lines seen so far means `Inside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

impl FenceState {
    /// Advance the state over one line (already trimmed).
    ///
    /// Returns the state in effect after the line: a fence-marker line
    /// flips the state, every other line leaves it alone. The marker may
    /// carry a language tag (e.g. ```` ```rust ````).
    pub fn observe(self, trimmed: &str) -> FenceState {
        if trimmed.starts_with(FENCE_MARKER) {
            self.flipped()
        } else {
            self
        }
    }

    fn flipped(self) -> FenceState {
        match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        }
    }

    /// True between an opening fence line and its closing counterpart.
    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }
}
