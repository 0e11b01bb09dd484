use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, TrackingNumber};
use crate::order::ShipmentOrder;

/// Result of trying to stage a resolved order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The order was appended to the staged additions
    Staged,

    /// An addition with the same tracking number is already staged
    Duplicate,
}

/// The pending edits to a shipment's order membership.
///
/// Two disjoint sets:
/// - `removed`: ids of server-known rows marked for removal
/// - `added`: resolved orders not yet committed, insertion-ordered,
///   deduplicated by tracking number
///
/// The two deletion paths are structurally disjoint: staged additions leave
/// through [`StagedDelta::unstage`], never through
/// [`StagedDelta::mark_removed`], so a commit request can never carry the
/// same id as both removed and added.
///
/// Lifecycle: created empty when the editor opens, mutated only by operator
/// actions, cleared on full commit success or explicit discard. Never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct StagedDelta {
    removed: BTreeSet<OrderId>,
    added: Vec<ShipmentOrder>,
}

impl StagedDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a server-known row for removal. Idempotent.
    ///
    /// Returns whether the set changed.
    pub fn mark_removed(&mut self, order_id: OrderId) -> bool {
        let changed = self.removed.insert(order_id);
        #[cfg(feature = "tracing")]
        if !changed {
            tracing::debug!(order_id = order_id.value(), "removal already staged");
        }
        changed
    }

    pub fn is_removed(&self, order_id: OrderId) -> bool {
        self.removed.contains(&order_id)
    }

    /// Append a resolved order unless its tracking number is already staged.
    pub fn stage(&mut self, order: ShipmentOrder) -> StageOutcome {
        if self.contains_tracking(&order.tracking_number) {
            #[cfg(feature = "tracing")]
            tracing::debug!(tracking = %order.tracking_number, "duplicate addition skipped");
            return StageOutcome::Duplicate;
        }
        self.added.push(order);
        StageOutcome::Staged
    }

    /// Drop a staged addition. The immediate deletion path for rows that
    /// exist only client-side; does not touch the removed set.
    ///
    /// Returns whether anything was dropped.
    pub fn unstage(&mut self, tracking: &TrackingNumber) -> bool {
        let before = self.added.len();
        self.added.retain(|order| order.tracking_number != *tracking);
        self.added.len() != before
    }

    pub fn contains_tracking(&self, tracking: &TrackingNumber) -> bool {
        self.added
            .iter()
            .any(|order| order.tracking_number == *tracking)
    }

    pub fn staged_addition(&self, order_id: OrderId) -> Option<&ShipmentOrder> {
        self.added.iter().find(|order| order.id == order_id)
    }

    pub fn removed_ids(&self) -> &BTreeSet<OrderId> {
        &self.removed
    }

    pub fn added(&self) -> &[ShipmentOrder] {
        &self.added
    }

    pub fn added_ids(&self) -> Vec<OrderId> {
        self.added.iter().map(|order| order.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    pub fn clear(&mut self) {
        self.removed.clear();
        self.added.clear();
    }

    /// Snapshot the full delta for a single commit request.
    pub fn as_request(&self) -> DeltaRequest {
        DeltaRequest {
            removed_order_ids: self.removed.iter().copied().collect(),
            added_order_ids: self.added_ids(),
        }
    }
}

/// The complete delta sent to the committer in one request.
///
/// Never split across requests; the server applies it as one logical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaRequest {
    pub removed_order_ids: Vec<OrderId>,
    pub added_order_ids: Vec<OrderId>,
}
