use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use fd_core::api::{ApiError, Page, PageRequest};
use fd_core::editor::{EditorError, EditorState, StageOutcome, StagedDelta};
use fd_core::ids::{OrderId, ShipmentId, TrackingNumber};
use fd_core::order::ShipmentOrder;
use fd_core::ports::{OrderResolverPort, ReconciliationCommitPort, ShipmentOrdersQueryPort};
use fd_core::report::{BulkItem, BulkReport};

use crate::deps::ConsoleDeps;
use crate::models::{OrderRow, RowSource};

/// Anything a session operation can fail with.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Issued per resolution batch; only the latest issued ticket may mutate
/// the staged delta when its results arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
}

/// What a commit did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Every item applied; delta cleared, table refreshed from page 1
    Applied(BulkReport),

    /// The server rejected some or all items; delta preserved untouched.
    /// The caller shows the report, then calls
    /// [`ShipmentEditorSession::acknowledge_rejection`] to re-render from
    /// server truth.
    Rejected(BulkReport),
}

/// Page-level orchestrator for one shipment's order membership.
///
/// Owned exclusively by the editor instance that created it; never shared.
/// Server truth lives in `current`; operator intent lives in `delta` as a
/// speculative overlay reconciled only at commit time.
pub struct ShipmentEditorSession {
    shipment: ShipmentId,
    session_id: Uuid,

    orders: Arc<dyn ShipmentOrdersQueryPort>,
    resolver: Arc<dyn OrderResolverPort>,
    committer: Arc<dyn ReconciliationCommitPort>,

    page_size: u32,
    current: Page<ShipmentOrder>,
    delta: StagedDelta,
    state: EditorState,

    /// Monotonic counter of issued lookup batches; only the latest may stage
    issued_lookups: u64,
}

impl ShipmentEditorSession {
    /// Open the editor: fetch page 1 and start Clean with an empty delta.
    pub async fn open(
        deps: &ConsoleDeps,
        shipment: ShipmentId,
        page_size: u32,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            shipment,
            session_id: Uuid::new_v4(),
            orders: deps.orders.clone(),
            resolver: deps.resolver.clone(),
            committer: deps.committer.clone(),
            page_size,
            current: Page::empty(page_size),
            delta: StagedDelta::new(),
            state: EditorState::Clean,
            issued_lookups: 0,
        };
        session.fetch_page(1).await?;
        info!(
            session = %session.session_id,
            shipment = shipment.value(),
            rows = session.current.len(),
            "editor session opened"
        );
        Ok(session)
    }

    pub fn shipment(&self) -> ShipmentId {
        self.shipment
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn delta(&self) -> &StagedDelta {
        &self.delta
    }

    pub fn current_page(&self) -> &Page<ShipmentOrder> {
        &self.current
    }

    /// The rendered table: `(server rows − removed) + staged additions`.
    pub fn visible_rows(&self) -> Vec<OrderRow> {
        let mut rows: Vec<OrderRow> = self
            .current
            .items
            .iter()
            .filter(|order| !self.delta.is_removed(order.id))
            .map(|order| OrderRow {
                source: RowSource::Server,
                order: order.clone(),
            })
            .collect();
        rows.extend(self.delta.added().iter().map(|order| OrderRow {
            source: RowSource::Staged,
            order: order.clone(),
        }));
        rows
    }

    /// Fetch a page of server truth. The staged overlay is untouched.
    pub async fn load_page(&mut self, page: u32) -> Result<(), SessionError> {
        self.fetch_page(page).await
    }

    /// Mark a visible server row for removal. Optimistic and idempotent:
    /// the row vanishes from [`Self::visible_rows`] immediately, no network
    /// call is made.
    pub fn mark_removed(&mut self, order_id: OrderId) -> Result<(), SessionError> {
        if !self.state.can_edit() {
            return Err(EditorError::CommitInFlight.into());
        }
        // Already marked: no-op, same observable effect as the first call
        if self.delta.is_removed(order_id) {
            return Ok(());
        }
        // Staged rows leave through unstage, never through the removed set
        if self.delta.staged_addition(order_id).is_some() {
            return Err(EditorError::StagedRow(order_id).into());
        }
        if !self.current.items.iter().any(|order| order.id == order_id) {
            return Err(EditorError::NotVisible(order_id).into());
        }

        self.delta.mark_removed(order_id);
        self.state = self.state.on_edit();
        debug!(session = %self.session_id, order = order_id.value(), "removal staged");
        Ok(())
    }

    /// Drop a staged addition (the immediate deletion path for client-only
    /// rows). Returns whether anything was dropped.
    pub fn unstage(&mut self, tracking: &TrackingNumber) -> Result<bool, SessionError> {
        if !self.state.can_edit() {
            return Err(EditorError::CommitInFlight.into());
        }
        let dropped = self.delta.unstage(tracking);
        if dropped && self.delta.is_empty() {
            self.state = self.state.on_emptied();
        }
        Ok(dropped)
    }

    /// Issue a lookup ticket. Results applied under an older ticket are
    /// reported but never staged, superseding stale in-flight responses.
    pub fn begin_lookup(&mut self) -> LookupTicket {
        self.issued_lookups += 1;
        LookupTicket {
            seq: self.issued_lookups,
        }
    }

    /// Resolve a batch of already-split tracking numbers and stage the
    /// successes.
    ///
    /// Per candidate: the duplicate-in-staging check runs first and produces
    /// a client-local warning row without a network call; otherwise one
    /// resolver round trip decides the item. Every attempt appears in the
    /// returned report whether or not it changed state. A transport `Err`
    /// aborts the batch with the delta untouched.
    pub async fn resolve_and_stage(
        &mut self,
        candidates: &[TrackingNumber],
    ) -> Result<BulkReport, SessionError> {
        if !self.state.can_edit() {
            return Err(EditorError::CommitInFlight.into());
        }
        let ticket = self.begin_lookup();
        let mut items = Vec::with_capacity(candidates.len());
        for tracking in candidates {
            if self.delta.contains_tracking(tracking) {
                items.push(BulkItem::duplicate(tracking));
                continue;
            }
            let item = self.resolver.resolve(self.shipment, tracking).await?;
            items.push(item);
        }
        Ok(self.apply_lookup(ticket, items))
    }

    /// Apply a finished batch under its ticket.
    ///
    /// Successful resolutions are staged unless a newer batch was issued in
    /// the meantime, or the tracking number got staged while this batch was
    /// in flight (the dedup-at-append check closes that race).
    pub fn apply_lookup(&mut self, ticket: LookupTicket, items: Vec<BulkItem>) -> BulkReport {
        let fresh = ticket.seq == self.issued_lookups;
        if !fresh {
            warn!(
                session = %self.session_id,
                stale_seq = ticket.seq,
                latest_seq = self.issued_lookups,
                "superseded lookup batch; results reported, nothing staged"
            );
            return BulkReport::from_items(items);
        }

        let mut reported = Vec::with_capacity(items.len());
        let mut staged_any = false;
        for item in items {
            let item = if !item.success {
                item
            } else if let Some(order) = item.result {
                match self.delta.stage(order.clone()) {
                    StageOutcome::Staged => {
                        staged_any = true;
                        BulkItem::resolved(order)
                    }
                    StageOutcome::Duplicate => BulkItem::duplicate(&order.tracking_number),
                }
            } else {
                // A success row without an order is a resolver contract
                // violation; surface it as a failed row rather than staging air
                BulkItem {
                    name: item.name,
                    success: false,
                    message: "resolver returned no order record".to_string(),
                    result: None,
                }
            };
            reported.push(item);
        }
        if staged_any {
            self.state = self.state.on_edit();
        }
        BulkReport::from_items(reported)
    }

    /// Send the full delta to the committer in one request.
    ///
    /// Full success clears the delta and refreshes from page 1. A reported
    /// failure preserves the delta untouched and performs no silent refresh;
    /// the operator inspects the report first. A transport `Err` also
    /// preserves the delta.
    pub async fn commit(&mut self) -> Result<CommitOutcome, SessionError> {
        if self.state.is_saving() {
            return Err(EditorError::CommitInFlight.into());
        }
        if self.delta.is_empty() {
            return Err(EditorError::NothingStaged.into());
        }
        // Dirty is guaranteed by the two guards above
        self.state = self
            .state
            .on_commit_started()
            .ok_or(EditorError::NothingStaged)?;

        let request = self.delta.as_request();
        info!(
            session = %self.session_id,
            shipment = self.shipment.value(),
            removed = request.removed_order_ids.len(),
            added = request.added_order_ids.len(),
            "committing staged delta"
        );

        let report = match self.committer.commit(self.shipment, &request).await {
            Ok(report) => report,
            Err(err) => {
                self.state = self.state.on_commit_finished(false);
                return Err(err.into());
            }
        };

        if report.is_full_success() {
            self.delta.clear();
            self.state = self.state.on_commit_finished(true);
            self.fetch_page(1).await?;
            Ok(CommitOutcome::Applied(report))
        } else {
            warn!(
                session = %self.session_id,
                failed = report.total_failed,
                "commit rejected; staged delta preserved"
            );
            self.state = self.state.on_commit_finished(false);
            Ok(CommitOutcome::Rejected(report))
        }
    }

    /// After the operator has inspected a rejection report: re-render from
    /// the server's authoritative list. The delta stays as it was so the
    /// operator can adjust and retry.
    pub async fn acknowledge_rejection(&mut self) -> Result<(), SessionError> {
        self.fetch_page(1).await
    }

    /// Throw away all pending edits and reload page 1.
    pub async fn discard(&mut self) -> Result<(), SessionError> {
        if self.state.is_saving() {
            return Err(EditorError::CommitInFlight.into());
        }
        self.delta.clear();
        self.state = self.state.on_discard();
        self.fetch_page(1).await
    }

    async fn fetch_page(&mut self, page: u32) -> Result<(), SessionError> {
        let request = PageRequest::new(page, self.page_size);
        self.current = self.orders.list_orders(self.shipment, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use fd_core::editor::DeltaRequest;
    use fd_core::ids::EmployeeId;
    use fd_core::order::{
        OfficeSnapshot, OrderStatus, PayerRole, PaymentStatus, RecipientSnapshot,
    };
    use fd_core::ports::ShipperAssignmentPort;

    fn order(id: i64, tracking: &str) -> ShipmentOrder {
        ShipmentOrder {
            id: OrderId::new(id),
            tracking_number: TrackingNumber::from(tracking),
            status: OrderStatus::PickedUp,
            weight_grams: 500,
            cod_amount: 150_000,
            payer: PayerRole::Recipient,
            payment_status: PaymentStatus::Unpaid,
            recipient: RecipientSnapshot {
                name: "Quang Le".to_string(),
                phone: "0912000000".to_string(),
                address: "45 Le Loi".to_string(),
            },
            destination: OfficeSnapshot {
                id: 7,
                name: "Hai Chau office".to_string(),
            },
            created_at: chrono::Utc.with_ymd_and_hms(2025, 4, 2, 9, 30, 0).unwrap(),
        }
    }

    fn page_of(orders: Vec<ShipmentOrder>) -> Page<ShipmentOrder> {
        let total = orders.len() as u64;
        Page {
            items: orders,
            page: 1,
            page_size: 20,
            total_items: total,
            total_pages: 1,
        }
    }

    struct MockOrders {
        page: Mutex<Page<ShipmentOrder>>,
        fetched_pages: Mutex<Vec<u32>>,
    }

    impl MockOrders {
        fn with(orders: Vec<ShipmentOrder>) -> Arc<Self> {
            Arc::new(Self {
                page: Mutex::new(page_of(orders)),
                fetched_pages: Mutex::new(Vec::new()),
            })
        }

        fn set_page(&self, orders: Vec<ShipmentOrder>) {
            *self.page.lock().unwrap() = page_of(orders);
        }

        fn fetched(&self) -> Vec<u32> {
            self.fetched_pages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShipmentOrdersQueryPort for MockOrders {
        async fn list_orders(
            &self,
            _shipment: ShipmentId,
            page: PageRequest,
        ) -> Result<Page<ShipmentOrder>, ApiError> {
            self.fetched_pages.lock().unwrap().push(page.page);
            Ok(self.page.lock().unwrap().clone())
        }
    }

    struct MockResolver {
        responses: Mutex<HashMap<String, Result<BulkItem, ApiError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockResolver {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn resolve_to(&self, tracking: &str, item: BulkItem) {
            self.responses
                .lock()
                .unwrap()
                .insert(tracking.to_string(), Ok(item));
        }

        fn fail_with(&self, tracking: &str, err: ApiError) {
            self.responses
                .lock()
                .unwrap()
                .insert(tracking.to_string(), Err(err));
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OrderResolverPort for MockResolver {
        async fn resolve(
            &self,
            _shipment: ShipmentId,
            tracking: &TrackingNumber,
        ) -> Result<BulkItem, ApiError> {
            self.calls.lock().unwrap().push(tracking.as_str().to_string());
            self.responses
                .lock()
                .unwrap()
                .get(tracking.as_str())
                .cloned()
                .unwrap_or_else(|| Ok(BulkItem::rejected(tracking, "tracking number not found")))
        }
    }

    struct MockCommitter {
        response: Mutex<Result<BulkReport, ApiError>>,
        requests: Mutex<Vec<DeltaRequest>>,
    }

    impl MockCommitter {
        fn responding(response: Result<BulkReport, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(response),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<DeltaRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReconciliationCommitPort for MockCommitter {
        async fn commit(
            &self,
            _shipment: ShipmentId,
            delta: &DeltaRequest,
        ) -> Result<BulkReport, ApiError> {
            self.requests.lock().unwrap().push(delta.clone());
            self.response.lock().unwrap().clone()
        }
    }

    struct NoopAssignment;

    #[async_trait]
    impl ShipperAssignmentPort for NoopAssignment {
        async fn assign(
            &self,
            _shipment: ShipmentId,
            _employees: &[EmployeeId],
        ) -> Result<BulkReport, ApiError> {
            Ok(BulkReport::from_items(vec![]))
        }
    }

    fn deps(
        orders: Arc<MockOrders>,
        resolver: Arc<MockResolver>,
        committer: Arc<MockCommitter>,
    ) -> ConsoleDeps {
        ConsoleDeps {
            orders,
            resolver,
            committer,
            assignment: Arc::new(NoopAssignment),
        }
    }

    fn full_success_report() -> BulkReport {
        BulkReport {
            success: true,
            message: String::new(),
            total_imported: 1,
            total_failed: 0,
            results: vec![],
        }
    }

    fn rejected_report() -> BulkReport {
        BulkReport {
            success: false,
            message: "some orders could not be applied".to_string(),
            total_imported: 0,
            total_failed: 1,
            results: vec![BulkItem::rejected(
                &TrackingNumber::from("UTE002"),
                "already assigned",
            )],
        }
    }

    async fn open_session(
        orders: Arc<MockOrders>,
        resolver: Arc<MockResolver>,
        committer: Arc<MockCommitter>,
    ) -> ShipmentEditorSession {
        ShipmentEditorSession::open(
            &deps(orders, resolver, committer),
            ShipmentId::new(11),
            20,
        )
        .await
        .unwrap()
    }

    // =========================================================================
    // Opening and the rendered overlay
    // =========================================================================

    #[tokio::test]
    async fn open_fetches_page_one_and_starts_clean() {
        let orders = MockOrders::with(vec![order(1, "A"), order(2, "B")]);
        let session = open_session(
            orders.clone(),
            MockResolver::new(),
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        assert_eq!(orders.fetched(), vec![1]);
        assert_eq!(session.state(), EditorState::Clean);
        assert!(session.delta().is_empty());
        assert_eq!(session.visible_rows().len(), 2);
    }

    #[tokio::test]
    async fn visible_rows_overlay_removals_and_additions() {
        let orders = MockOrders::with(vec![order(1, "A"), order(2, "B")]);
        let resolver = MockResolver::new();
        resolver.resolve_to("D", BulkItem::resolved(order(4, "D")));
        let mut session = open_session(
            orders,
            resolver,
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        session.mark_removed(OrderId::new(2)).unwrap();
        session
            .resolve_and_stage(&[TrackingNumber::from("D")])
            .await
            .unwrap();

        let rows = session.visible_rows();
        let trackings: Vec<&str> = rows
            .iter()
            .map(|row| row.order.tracking_number.as_str())
            .collect();
        assert_eq!(trackings, vec!["A", "D"]);
        assert_eq!(rows[0].source, RowSource::Server);
        assert_eq!(rows[1].source, RowSource::Staged);
    }

    // =========================================================================
    // Removal preconditions
    // =========================================================================

    #[tokio::test]
    async fn mark_removed_twice_equals_once() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let mut session = open_session(
            orders,
            MockResolver::new(),
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        session.mark_removed(OrderId::new(1)).unwrap();
        session.mark_removed(OrderId::new(1)).unwrap();

        assert_eq!(session.delta().removed_ids().len(), 1);
        assert!(session.visible_rows().is_empty());
        assert_eq!(session.state(), EditorState::Dirty);
    }

    #[tokio::test]
    async fn mark_removed_rejects_unknown_and_staged_rows() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let resolver = MockResolver::new();
        resolver.resolve_to("D", BulkItem::resolved(order(4, "D")));
        let mut session = open_session(
            orders,
            resolver,
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;
        session
            .resolve_and_stage(&[TrackingNumber::from("D")])
            .await
            .unwrap();

        assert!(matches!(
            session.mark_removed(OrderId::new(99)),
            Err(SessionError::Editor(EditorError::NotVisible(_)))
        ));
        assert!(matches!(
            session.mark_removed(OrderId::new(4)),
            Err(SessionError::Editor(EditorError::StagedRow(_)))
        ));
    }

    #[tokio::test]
    async fn unstage_drops_the_addition_and_can_return_to_clean() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let resolver = MockResolver::new();
        resolver.resolve_to("D", BulkItem::resolved(order(4, "D")));
        let mut session = open_session(
            orders,
            resolver,
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;
        session
            .resolve_and_stage(&[TrackingNumber::from("D")])
            .await
            .unwrap();
        assert_eq!(session.state(), EditorState::Dirty);

        assert!(session.unstage(&TrackingNumber::from("D")).unwrap());
        assert!(!session.unstage(&TrackingNumber::from("D")).unwrap());
        assert_eq!(session.state(), EditorState::Clean);
    }

    // =========================================================================
    // Resolution batches
    // =========================================================================

    #[tokio::test]
    async fn duplicate_candidates_warn_without_a_network_call() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let resolver = MockResolver::new();
        resolver.resolve_to("UTE777", BulkItem::resolved(order(4, "UTE777")));
        let mut session = open_session(
            orders,
            resolver.clone(),
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        session
            .resolve_and_stage(&[TrackingNumber::from("UTE777")])
            .await
            .unwrap();
        let report = session
            .resolve_and_stage(&[TrackingNumber::from("UTE777")])
            .await
            .unwrap();

        // Second attempt: one warning row naming the duplicate, no re-add
        assert_eq!(report.total_failed, 1);
        assert_eq!(report.results[0].name, "UTE777");
        assert_eq!(report.results[0].message, "already staged in this editor");
        assert_eq!(session.delta().added().len(), 1);
        // The resolver was only consulted by the first attempt
        assert_eq!(resolver.calls(), vec!["UTE777".to_string()]);
    }

    #[tokio::test]
    async fn transport_error_aborts_the_batch_without_staging() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let resolver = MockResolver::new();
        resolver.fail_with("X", ApiError::Transport("connection reset".to_string()));
        let mut session = open_session(
            orders,
            resolver,
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        let result = session
            .resolve_and_stage(&[TrackingNumber::from("X"), TrackingNumber::from("Y")])
            .await;

        assert!(matches!(
            result,
            Err(SessionError::Api(ApiError::Transport(_)))
        ));
        assert!(session.delta().is_empty());
        assert_eq!(session.state(), EditorState::Clean);
    }

    #[tokio::test]
    async fn superseded_lookup_is_reported_but_never_staged() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let mut session = open_session(
            orders,
            MockResolver::new(),
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        let stale = session.begin_lookup();
        let fresh = session.begin_lookup();

        let report = session.apply_lookup(stale, vec![BulkItem::resolved(order(4, "D"))]);
        assert_eq!(report.total_imported, 1);
        assert!(session.delta().is_empty());

        let report = session.apply_lookup(fresh, vec![BulkItem::resolved(order(4, "D"))]);
        assert_eq!(report.total_imported, 1);
        assert_eq!(session.delta().added().len(), 1);
    }

    // =========================================================================
    // Commit
    // =========================================================================

    #[tokio::test]
    async fn commit_requires_staged_work() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let mut session = open_session(
            orders,
            MockResolver::new(),
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;

        assert!(matches!(
            session.commit().await,
            Err(SessionError::Editor(EditorError::NothingStaged))
        ));
    }

    #[tokio::test]
    async fn full_success_clears_the_delta_and_refreshes_page_one() {
        let orders = MockOrders::with(vec![order(1, "A"), order(2, "B")]);
        let committer = MockCommitter::responding(Ok(full_success_report()));
        let mut session = open_session(orders.clone(), MockResolver::new(), committer.clone()).await;
        session.mark_removed(OrderId::new(2)).unwrap();

        // Server truth after the commit applied
        orders.set_page(vec![order(1, "A")]);
        let outcome = session.commit().await.unwrap();

        assert!(matches!(outcome, CommitOutcome::Applied(_)));
        assert!(session.delta().is_empty());
        assert_eq!(session.state(), EditorState::Clean);
        assert_eq!(orders.fetched(), vec![1, 1]);
        assert_eq!(
            committer.requests(),
            vec![DeltaRequest {
                removed_order_ids: vec![OrderId::new(2)],
                added_order_ids: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn rejected_commit_preserves_the_delta_and_skips_the_refresh() {
        let orders = MockOrders::with(vec![order(1, "A"), order(2, "B")]);
        let committer = MockCommitter::responding(Ok(rejected_report()));
        let mut session = open_session(orders.clone(), MockResolver::new(), committer).await;
        session.mark_removed(OrderId::new(2)).unwrap();

        let outcome = session.commit().await.unwrap();

        assert!(matches!(outcome, CommitOutcome::Rejected(_)));
        assert!(session.delta().is_removed(OrderId::new(2)));
        assert_eq!(session.state(), EditorState::Dirty);
        // No silent refresh: only the mount fetch happened
        assert_eq!(orders.fetched(), vec![1]);

        // After the operator inspected the report, re-render server truth
        session.acknowledge_rejection().await.unwrap();
        assert_eq!(orders.fetched(), vec![1, 1]);
        assert!(session.delta().is_removed(OrderId::new(2)));
    }

    #[tokio::test]
    async fn transport_failure_during_commit_preserves_the_delta() {
        let orders = MockOrders::with(vec![order(1, "A")]);
        let committer = MockCommitter::responding(Err(ApiError::Status(502)));
        let mut session = open_session(orders, MockResolver::new(), committer).await;
        session.mark_removed(OrderId::new(1)).unwrap();

        let result = session.commit().await;

        assert!(matches!(
            result,
            Err(SessionError::Api(ApiError::Status(502)))
        ));
        assert!(session.delta().is_removed(OrderId::new(1)));
        assert_eq!(session.state(), EditorState::Dirty);
    }

    // =========================================================================
    // Discard
    // =========================================================================

    #[tokio::test]
    async fn discard_resets_to_a_fresh_mount() {
        let orders = MockOrders::with(vec![order(1, "A"), order(2, "B")]);
        let resolver = MockResolver::new();
        resolver.resolve_to("D", BulkItem::resolved(order(4, "D")));
        let mut session = open_session(
            orders.clone(),
            resolver,
            MockCommitter::responding(Ok(full_success_report())),
        )
        .await;
        session.mark_removed(OrderId::new(2)).unwrap();
        session
            .resolve_and_stage(&[TrackingNumber::from("D")])
            .await
            .unwrap();

        session.discard().await.unwrap();

        assert!(session.delta().is_empty());
        assert_eq!(session.state(), EditorState::Clean);
        assert_eq!(orders.fetched(), vec![1, 1]);
        let rows = session.visible_rows();
        let trackings: Vec<&str> = rows
            .iter()
            .map(|row| row.order.tracking_number.as_str())
            .collect();
        assert_eq!(trackings, vec!["A", "B"]);
    }
}
