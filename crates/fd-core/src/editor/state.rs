use serde::{Deserialize, Serialize};

/// Editor lifecycle state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and transition validation logic. Network timing and refresh
/// behavior are handled by the application layer (fd-app).
///
/// State transitions:
/// ```text
///   Clean
///    │ first pending add/remove
///    ▼
///   Dirty ◄──────────────────────────────┐
///    │ commit issued                     │
///    ▼                                   │
///   Saving ── commit failed/rejected ────┘
///    │
///    │ commit fully succeeded
///    ▼
///   Clean
///
/// Global:
///   Dirty + last pending edit withdrawn ──► Clean
///   Clean|Dirty + discard               ──► Clean
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorState {
    /// No pending edits; the table mirrors server truth
    Clean,

    /// At least one pending add or remove
    Dirty,

    /// Commit in flight; edits are locked until the response arrives
    Saving,
}

impl EditorState {
    /// Check if local edits are currently allowed
    pub fn can_edit(self) -> bool {
        !matches!(self, Self::Saving)
    }

    pub fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty)
    }

    pub fn is_saving(self) -> bool {
        matches!(self, Self::Saving)
    }

    /// Next state after a pending add or remove lands
    pub fn on_edit(self) -> Self {
        match self {
            Self::Clean | Self::Dirty => Self::Dirty,
            Self::Saving => self,
        }
    }

    /// Next state after the last pending edit is withdrawn
    pub fn on_emptied(self) -> Self {
        match self {
            Self::Dirty => Self::Clean,
            _ => self,
        }
    }

    /// Next state when a commit is issued
    pub fn on_commit_started(self) -> Option<Self> {
        match self {
            Self::Dirty => Some(Self::Saving),
            _ => None,
        }
    }

    /// Next state when the commit response arrives
    pub fn on_commit_finished(self, success: bool) -> Self {
        match self {
            Self::Saving if success => Self::Clean,
            Self::Saving => Self::Dirty,
            _ => self,
        }
    }

    /// Next state after an explicit discard
    pub fn on_discard(self) -> Self {
        match self {
            Self::Clean | Self::Dirty => Self::Clean,
            Self::Saving => self,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::Clean
    }
}
