use async_trait::async_trait;

use crate::api::ApiError;
use crate::editor::DeltaRequest;
use crate::ids::ShipmentId;
use crate::report::BulkReport;

/// Applies the full staged delta in one request.
///
/// Transactionality is the server's; the client's obligation is to never
/// split a delta across requests. A report with `success == false` and
/// per-item rows is a partial failure, distinct from a transport `Err`.
#[async_trait]
pub trait ReconciliationCommitPort: Send + Sync {
    async fn commit(
        &self,
        shipment: ShipmentId,
        delta: &DeltaRequest,
    ) -> Result<BulkReport, ApiError>;
}
