use async_trait::async_trait;

use crate::api::ApiError;
use crate::ids::{ShipmentId, TrackingNumber};
use crate::report::BulkItem;

/// Validates one tracking number against the backend's business rules
/// (order exists, not already in a shipment, compatible status).
///
/// One round trip per call. A business rejection comes back as an
/// `Ok(BulkItem { success: false, .. })`; an `Err` means the server never
/// evaluated the request (transport, status, schema). No retries.
#[async_trait]
pub trait OrderResolverPort: Send + Sync {
    async fn resolve(
        &self,
        shipment: ShipmentId,
        tracking: &TrackingNumber,
    ) -> Result<BulkItem, ApiError>;
}
