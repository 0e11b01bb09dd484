use async_trait::async_trait;

use crate::api::ApiError;
use crate::ids::{EmployeeId, ShipmentId};
use crate::report::BulkReport;

/// Bulk assignment of drivers/employees to a shipment.
///
/// Same report shape and reconciliation family as the order committer;
/// there is no client-side state to roll back, so the report is final.
#[async_trait]
pub trait ShipperAssignmentPort: Send + Sync {
    async fn assign(
        &self,
        shipment: ShipmentId,
        employees: &[EmployeeId],
    ) -> Result<BulkReport, ApiError>;
}
