use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use fd_core::ids::{EmployeeId, ShipmentId};
use fd_core::ports::ShipperAssignmentPort;
use fd_core::report::BulkReport;

/// Assign a batch of drivers/employees to a shipment.
///
/// Same reconciliation family as the order committer: one request, per-item
/// report. There is no staged client state here, so the report is final and
/// nothing is rolled back on partial failure.
pub struct AssignShippersUseCase {
    assignment: Arc<dyn ShipperAssignmentPort>,
}

impl AssignShippersUseCase {
    pub fn new(assignment: Arc<dyn ShipperAssignmentPort>) -> Self {
        Self { assignment }
    }

    pub async fn execute(
        &self,
        shipment: ShipmentId,
        employees: &[EmployeeId],
    ) -> Result<BulkReport> {
        // Repeats in one submission are operator noise, not intent
        let mut seen = std::collections::HashSet::new();
        let unique: Vec<EmployeeId> = employees
            .iter()
            .filter(|id| seen.insert(id.as_str().to_string()))
            .cloned()
            .collect();

        info!(
            shipment = shipment.value(),
            count = unique.len(),
            "assigning shippers"
        );
        self.assignment
            .assign(shipment, &unique)
            .await
            .context("shipper assignment request failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use fd_core::api::ApiError;
    use fd_core::report::BulkItem;

    struct RecordingAssignment {
        batches: Mutex<Vec<Vec<EmployeeId>>>,
    }

    #[async_trait]
    impl ShipperAssignmentPort for RecordingAssignment {
        async fn assign(
            &self,
            _shipment: ShipmentId,
            employees: &[EmployeeId],
        ) -> Result<BulkReport, ApiError> {
            self.batches.lock().unwrap().push(employees.to_vec());
            Ok(BulkReport::from_items(
                employees
                    .iter()
                    .map(|id| BulkItem {
                        name: id.as_str().to_string(),
                        success: true,
                        message: String::new(),
                        result: None,
                    })
                    .collect(),
            ))
        }
    }

    #[tokio::test]
    async fn execute_dedups_repeats_and_keeps_order() {
        let port = Arc::new(RecordingAssignment {
            batches: Mutex::new(Vec::new()),
        });
        let uc = AssignShippersUseCase::new(port.clone());

        let report = uc
            .execute(
                ShipmentId::new(3),
                &[
                    EmployeeId::from("EMP-2"),
                    EmployeeId::from("EMP-1"),
                    EmployeeId::from("EMP-2"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(report.total_imported, 2);
        assert_eq!(
            port.batches.lock().unwrap()[0],
            vec![EmployeeId::from("EMP-2"), EmployeeId::from("EMP-1")]
        );
    }
}
