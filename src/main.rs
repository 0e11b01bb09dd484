use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fd_app::deps::ConsoleDeps;
use fd_app::models::RowSource;
use fd_app::ShipmentEditorSession;
use fd_core::auth::AuthContext;
use fd_core::ids::ShipmentId;
use fd_infra::{ConsoleConfig, ConsoleHttpClient, HttpShipmentApi};

/// One-shot console entry point: wire the REST adapters and render the
/// current membership of the shipment named by `FREIGHTDESK_SHIPMENT_ID`.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = ConsoleConfig::load(None)?;

    let operator =
        std::env::var("FREIGHTDESK_OPERATOR").unwrap_or_else(|_| "operator".to_string());
    let token = std::env::var("FREIGHTDESK_TOKEN").context("FREIGHTDESK_TOKEN is not set")?;
    let shipment: i64 = std::env::var("FREIGHTDESK_SHIPMENT_ID")
        .context("FREIGHTDESK_SHIPMENT_ID is not set")?
        .parse()
        .context("FREIGHTDESK_SHIPMENT_ID is not an integer")?;

    let auth = AuthContext::new(operator, token);
    let client = ConsoleHttpClient::new(
        cfg.backend.base_url.as_str(),
        Duration::from_secs(cfg.backend.timeout_secs),
        auth,
    )?;
    let api = Arc::new(HttpShipmentApi::new(client));

    let deps = ConsoleDeps {
        orders: api.clone(),
        resolver: api.clone(),
        committer: api.clone(),
        assignment: api,
    };

    let session = ShipmentEditorSession::open(&deps, ShipmentId::new(shipment), cfg.listing.page_size)
        .await
        .context("failed to open the shipment editor")?;

    let page = session.current_page();
    println!(
        "shipment {shipment}: page {}/{} ({} orders total)",
        page.page, page.total_pages, page.total_items
    );
    for row in session.visible_rows() {
        let tag = match row.source {
            RowSource::Server => " ",
            RowSource::Staged => "+",
        };
        println!(
            "{tag} {:<18} {:<12} {:<20} {}",
            row.order.tracking_number.as_str(),
            row.order.status.label(),
            row.order.recipient.name,
            row.order.destination.name
        );
    }

    Ok(())
}
