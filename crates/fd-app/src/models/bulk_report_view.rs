use std::fmt::{Display, Formatter};

use serde::Serialize;

use fd_core::report::BulkReport;

/// Outcome tag of one report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Ok,
    Failed,
}

impl RowOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Failed => "FAILED",
        }
    }
}

/// One display row: tracking label, outcome tag, message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkReportRow {
    pub label: String,
    pub outcome: RowOutcome,
    pub message: String,
}

/// Pure projection of a [`BulkReport`] for rendering.
///
/// Three-number summary plus ordered rows. No state, no side effects;
/// discarded when the operator dismisses it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkReportView {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub rows: Vec<BulkReportRow>,
}

impl BulkReportView {
    pub fn project(report: &BulkReport) -> Self {
        let rows: Vec<BulkReportRow> = report
            .results
            .iter()
            .map(|item| BulkReportRow {
                label: item.name.clone(),
                outcome: if item.success {
                    RowOutcome::Ok
                } else {
                    RowOutcome::Failed
                },
                message: item.message.clone(),
            })
            .collect();
        let succeeded = rows.iter().filter(|row| row.outcome == RowOutcome::Ok).count();
        Self {
            total: rows.len(),
            succeeded,
            failed: rows.len() - succeeded,
            rows,
        }
    }
}

impl From<&BulkReport> for BulkReportView {
    fn from(report: &BulkReport) -> Self {
        Self::project(report)
    }
}

impl Display for BulkReportView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "total {} / ok {} / failed {}",
            self.total, self.succeeded, self.failed
        )?;
        for row in &self.rows {
            writeln!(f, "{:<20} {:<8} {}", row.label, row.outcome.label(), row.message)?;
        }
        Ok(())
    }
}
