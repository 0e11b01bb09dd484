//! The staged collection editor, pure and IO-free.
//!
//! Tracks the operator's intended edits to a shipment's order membership
//! before a single commit. The application layer (fd-app) owns preconditions
//! that need the rendered table, network calls, and refresh timing; this
//! module owns the delta itself and the editor lifecycle.

mod delta;
mod error;
mod state;

pub use delta::{DeltaRequest, StageOutcome, StagedDelta};
pub use error::EditorError;
pub use state::EditorState;
