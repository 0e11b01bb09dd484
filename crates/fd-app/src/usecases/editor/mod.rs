//! The shipment editor workflow.
//!
//! ```text
//! Operator input (tracking text, row actions)
//!   ↓
//! ShipmentEditorSession (orchestration, network timing)
//!   ↓
//! StagedDelta + EditorState (pure transitions, fd-core)
//!   ↓
//! Resolver / Committer ports (one REST round trip each)
//! ```

mod session;
mod tracking_input;

pub use session::{CommitOutcome, LookupTicket, SessionError, ShipmentEditorSession};
pub use tracking_input::parse_tracking_input;
