use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use stockroom_ai::LinearTrendPredictor;
use stockroom_core::{ItemId, SupplierId};
use stockroom_dashboard::{Dashboard, DashboardCommand, DashboardConfig};
use stockroom_inventory::ItemDraft;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DashboardConfig::from_env().context("failed to load dashboard config")?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut dashboard = Dashboard::with_sample_data(config, Arc::new(LinearTrendPredictor::default()));

    let draft = ItemDraft::new("Stapler", "Stationery", 3, 5).with_supplier(SupplierId::new(1));
    draft.validate().context("sample item rejected by form validation")?;
    let outcome = dashboard.dispatch(DashboardCommand::AddItem(draft));
    info!(?outcome, "sample item added");

    let blank = ItemDraft::new("  ", "Stationery", 1, 1);
    if let Err(err) = blank.validate() {
        warn!("blank item not submitted: {err}");
    }

    match dashboard.request_prediction(ItemId::new(1)) {
        Some(task) => task.await.context("prediction task panicked")?,
        None => warn!("prediction could not be scheduled"),
    }

    let totals = dashboard.totals();
    info!(
        total_items = totals.total_items,
        total_stock = totals.total_stock,
        low_stock = totals.low_stock_count,
        score = dashboard.score(),
        "dashboard ready"
    );

    let snapshot = serde_json::to_string_pretty(&dashboard.snapshot()).context("failed to serialize snapshot")?;
    println!("{snapshot}");

    let path = dashboard
        .export()
        .context("failed to build inventory export")?
        .save_to(&out_dir)
        .with_context(|| format!("failed to save export into {}", out_dir.display()))?;
    info!(path = %path.display(), "inventory export written");

    Ok(())
}
