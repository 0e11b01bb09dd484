//! Read models projected for rendering.

mod bulk_report_view;
mod order_row;

pub use bulk_report_view::{BulkReportRow, BulkReportView, RowOutcome};
pub use order_row::{OrderRow, RowSource};
