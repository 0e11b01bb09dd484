use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, TrackingNumber};
use crate::order::{OrderStatus, PayerRole, PaymentStatus};

/// One order's membership in a shipment, as last reported by the server.
///
/// Invariant (server-enforced): an order belongs to at most one active
/// shipment at a time. The console never checks this locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentOrder {
    pub id: OrderId,
    pub tracking_number: TrackingNumber,
    pub status: OrderStatus,

    /// Parcel weight in grams
    pub weight_grams: u32,

    /// Cash-on-delivery amount in minor currency units
    pub cod_amount: i64,

    pub payer: PayerRole,
    pub payment_status: PaymentStatus,

    pub recipient: RecipientSnapshot,
    pub destination: OfficeSnapshot,

    pub created_at: DateTime<Utc>,
}

/// Recipient details frozen at order creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientSnapshot {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Destination office frozen at order creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeSnapshot {
    pub id: i64,
    pub name: String,
}

impl ShipmentOrder {
    pub fn tracking(&self) -> &TrackingNumber {
        &self.tracking_number
    }
}
