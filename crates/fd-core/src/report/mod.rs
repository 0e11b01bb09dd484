//! Per-item bulk outcome reports.
//!
//! Both the tracking-number resolver and the reconciliation committer answer
//! in this shape. Reports are transient: rendered once, then discarded.

use serde::{Deserialize, Serialize};

use crate::ids::TrackingNumber;
use crate::order::ShipmentOrder;

/// One row of a bulk outcome report.
///
/// `name` is the display label the server keys results by (the tracking
/// number for order operations, the employee id for assignments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkItem {
    pub name: String,
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub result: Option<ShipmentOrder>,
}

impl BulkItem {
    /// A successful resolution carrying the resolved order.
    pub fn resolved(order: ShipmentOrder) -> Self {
        Self {
            name: order.tracking_number.as_str().to_string(),
            success: true,
            message: String::new(),
            result: Some(order),
        }
    }

    /// A per-item business rejection reported by the server.
    pub fn rejected(tracking: &TrackingNumber, message: impl Into<String>) -> Self {
        Self {
            name: tracking.as_str().to_string(),
            success: false,
            message: message.into(),
            result: None,
        }
    }

    /// Client-local warning: the tracking number is already staged.
    /// Never the result of a network call.
    pub fn duplicate(tracking: &TrackingNumber) -> Self {
        Self {
            name: tracking.as_str().to_string(),
            success: false,
            message: "already staged in this editor".to_string(),
            result: None,
        }
    }
}

/// A complete bulk outcome report: summary counts plus per-item rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkReport {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub total_imported: u32,
    pub total_failed: u32,
    pub results: Vec<BulkItem>,
}

impl BulkReport {
    /// Build a client-side report from per-item outcomes (resolution batches).
    pub fn from_items(results: Vec<BulkItem>) -> Self {
        let total_imported = results.iter().filter(|item| item.success).count() as u32;
        let total_failed = results.len() as u32 - total_imported;
        Self {
            success: total_failed == 0,
            message: String::new(),
            total_imported,
            total_failed,
            results,
        }
    }

    /// Whether every item in the batch was applied.
    ///
    /// Only a full success permits clearing staged state; anything else
    /// preserves it for explicit operator retry.
    pub fn is_full_success(&self) -> bool {
        self.success && self.total_failed == 0
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
