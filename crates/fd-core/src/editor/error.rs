use thiserror::Error;

use crate::ids::OrderId;

/// Precondition violations of the editor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("order {0} is not a visible row")]
    NotVisible(OrderId),

    #[error("order {0} is a staged addition; unstage it instead of removing")]
    StagedRow(OrderId),

    #[error("nothing staged to commit")]
    NothingStaged,

    #[error("a commit is already in flight")]
    CommitInFlight,
}
