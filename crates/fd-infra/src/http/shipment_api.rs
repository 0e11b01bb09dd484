use async_trait::async_trait;
use tracing::instrument;

use fd_core::api::{ApiEnvelope, ApiError, Page, PageRequest};
use fd_core::editor::DeltaRequest;
use fd_core::ids::{EmployeeId, ShipmentId, TrackingNumber};
use fd_core::order::ShipmentOrder;
use fd_core::ports::{
    OrderResolverPort, ReconciliationCommitPort, ShipmentOrdersQueryPort, ShipperAssignmentPort,
};
use fd_core::report::{BulkItem, BulkReport};

use crate::http::wire::{WireBulkResponse, WireDeltaRequest, WireEnvelope, WireOrder, WirePage};
use crate::http::ConsoleHttpClient;

/// All four shipment-console ports over one HTTP client.
pub struct HttpShipmentApi {
    client: ConsoleHttpClient,
}

impl HttpShipmentApi {
    pub fn new(client: ConsoleHttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShipmentOrdersQueryPort for HttpShipmentApi {
    #[instrument(skip(self), fields(shipment = shipment.value(), page = page.page))]
    async fn list_orders(
        &self,
        shipment: ShipmentId,
        page: PageRequest,
    ) -> Result<Page<ShipmentOrder>, ApiError> {
        let envelope: WireEnvelope<WirePage<WireOrder>> = self
            .client
            .get_json(
                &format!("manager/shipments/{}", shipment.value()),
                &[
                    ("page", page.page.to_string()),
                    ("pageSize", page.page_size.to_string()),
                ],
            )
            .await?;
        let page = ApiEnvelope::from(envelope).into_data()?;
        Ok(page.into_page())
    }
}

#[async_trait]
impl OrderResolverPort for HttpShipmentApi {
    #[instrument(skip(self), fields(shipment = shipment.value(), tracking = tracking.as_str()))]
    async fn resolve(
        &self,
        shipment: ShipmentId,
        tracking: &TrackingNumber,
    ) -> Result<BulkItem, ApiError> {
        let response: WireBulkResponse = self
            .client
            .get_json(
                &format!("manager/shipment-orders/{}/check", shipment.value()),
                &[("trackingNumber", tracking.as_str().to_string())],
            )
            .await?;
        let mut report = response.into_report();
        if report.results.is_empty() {
            return Err(ApiError::Decode(
                "check response carried no result entry".to_string(),
            ));
        }
        Ok(report.results.remove(0))
    }
}

#[async_trait]
impl ReconciliationCommitPort for HttpShipmentApi {
    #[instrument(skip(self, delta), fields(shipment = shipment.value()))]
    async fn commit(
        &self,
        shipment: ShipmentId,
        delta: &DeltaRequest,
    ) -> Result<BulkReport, ApiError> {
        let response: WireBulkResponse = self
            .client
            .post_json(
                &format!("manager/shipment-orders/{}/save-orders", shipment.value()),
                &WireDeltaRequest::from(delta),
            )
            .await?;
        Ok(response.into_report())
    }
}

#[async_trait]
impl ShipperAssignmentPort for HttpShipmentApi {
    #[instrument(skip(self, employees), fields(shipment = shipment.value()))]
    async fn assign(
        &self,
        shipment: ShipmentId,
        employees: &[EmployeeId],
    ) -> Result<BulkReport, ApiError> {
        let ids: Vec<&str> = employees.iter().map(|id| id.as_str()).collect();
        let response: WireBulkResponse = self
            .client
            .post_json(
                &format!("manager/shipment-orders/{}", shipment.value()),
                &ids,
            )
            .await?;
        Ok(response.into_report())
    }
}
