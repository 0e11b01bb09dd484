//! Strict mirrors of the backend's JSON shapes.
//!
//! Parse, don't assume: required fields must be present and well-typed or the
//! whole response fails with a decode error. The only defaults are the
//! fields the backend genuinely omits (`message`, empty `results`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fd_core::api::{ApiEnvelope, Page};
use fd_core::editor::DeltaRequest;
use fd_core::ids::{OrderId, TrackingNumber};
use fd_core::order::{
    OfficeSnapshot, OrderStatus, PayerRole, PaymentStatus, RecipientSnapshot, ShipmentOrder,
};
use fd_core::report::{BulkItem, BulkReport};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEnvelope<T> {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub data: Option<T>,
}

impl<T> From<WireEnvelope<T>> for ApiEnvelope<T> {
    fn from(wire: WireEnvelope<T>) -> Self {
        ApiEnvelope {
            success: wire.success,
            message: wire.message,
            data: wire.data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl WirePage<WireOrder> {
    pub fn into_page(self) -> Page<ShipmentOrder> {
        Page {
            items: self.items.into_iter().map(WireOrder::into_order).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireOrder {
    pub id: i64,
    pub tracking_number: String,
    pub status: OrderStatus,
    pub weight_grams: u32,
    pub cod_amount: i64,
    pub payer_role: PayerRole,
    pub payment_status: PaymentStatus,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub destination_office_id: i64,
    pub destination_office_name: String,
    pub created_at: DateTime<Utc>,
}

impl WireOrder {
    pub fn into_order(self) -> ShipmentOrder {
        ShipmentOrder {
            id: OrderId::new(self.id),
            tracking_number: TrackingNumber::from(self.tracking_number),
            status: self.status,
            weight_grams: self.weight_grams,
            cod_amount: self.cod_amount,
            payer: self.payer_role,
            payment_status: self.payment_status,
            recipient: RecipientSnapshot {
                name: self.recipient_name,
                phone: self.recipient_phone,
                address: self.recipient_address,
            },
            destination: OfficeSnapshot {
                id: self.destination_office_id,
                name: self.destination_office_name,
            },
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBulkItem {
    pub name: String,
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub result: Option<WireOrder>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBulkResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub total_imported: u32,
    pub total_failed: u32,

    #[serde(default)]
    pub results: Vec<WireBulkItem>,
}

impl WireBulkResponse {
    pub fn into_report(self) -> BulkReport {
        BulkReport {
            success: self.success,
            message: self.message,
            total_imported: self.total_imported,
            total_failed: self.total_failed,
            results: self
                .results
                .into_iter()
                .map(|item| BulkItem {
                    name: item.name,
                    success: item.success,
                    message: item.message,
                    result: item.result.map(WireOrder::into_order),
                })
                .collect(),
        }
    }
}

/// Request body of `save-orders`, exactly as the backend spells it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireDeltaRequest {
    pub removed_order_ids: Vec<i64>,
    pub added_order_ids: Vec<i64>,
}

impl From<&DeltaRequest> for WireDeltaRequest {
    fn from(delta: &DeltaRequest) -> Self {
        Self {
            removed_order_ids: delta.removed_order_ids.iter().map(|id| id.value()).collect(),
            added_order_ids: delta.added_order_ids.iter().map(|id| id.value()).collect(),
        }
    }
}
