//! Console dependency grouping.
//!
//! This is NOT a Builder pattern:
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping
//!
//! The struct literal IS the dependency manifest: all ports are required.

use std::sync::Arc;

use fd_core::ports::{
    OrderResolverPort, ReconciliationCommitPort, ShipmentOrdersQueryPort, ShipperAssignmentPort,
};

/// Everything the console's use cases need, grouped for construction.
#[derive(Clone)]
pub struct ConsoleDeps {
    pub orders: Arc<dyn ShipmentOrdersQueryPort>,
    pub resolver: Arc<dyn OrderResolverPort>,
    pub committer: Arc<dyn ReconciliationCommitPort>,
    pub assignment: Arc<dyn ShipperAssignmentPort>,
}
