use serde::Serialize;

use fd_core::order::ShipmentOrder;

/// Where a rendered row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSource {
    /// Server-known membership (subject to `mark_removed`)
    Server,

    /// Staged addition, client-side only (subject to `unstage`)
    Staged,
}

/// One row of the editor table: `(server rows − removed) + staged additions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub source: RowSource,
    pub order: ShipmentOrder,
}

impl OrderRow {
    pub fn is_staged(&self) -> bool {
        self.source == RowSource::Staged
    }
}
