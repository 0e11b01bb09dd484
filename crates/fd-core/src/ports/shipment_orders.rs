use async_trait::async_trait;

use crate::api::{ApiError, Page, PageRequest};
use crate::ids::ShipmentId;
use crate::order::ShipmentOrder;

/// Paged listing of a shipment's current order membership.
#[async_trait]
pub trait ShipmentOrdersQueryPort: Send + Sync {
    async fn list_orders(
        &self,
        shipment: ShipmentId,
        page: PageRequest,
    ) -> Result<Page<ShipmentOrder>, ApiError>;
}
