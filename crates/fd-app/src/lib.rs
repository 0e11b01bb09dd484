//! FreightDesk Application Orchestration Layer
//!
//! This crate contains the console's use cases and the shipment editor
//! session orchestration.

pub mod deps;
pub mod models;
pub mod usecases;

pub use deps::ConsoleDeps;
pub use usecases::editor::{CommitOutcome, SessionError, ShipmentEditorSession};
