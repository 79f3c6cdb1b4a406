use crate::delta::build_chart_data;
use crate::errors::RefreshError;
use crate::models::{ChartView, Selection};
use crate::upstream::HistoricalClient;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

/// Owns the (country, metric) selection and the one chart view built for it.
///
/// Every selection change starts its own fetch. Fetches are never cancelled,
/// so the view reflects whichever response arrived last.
#[derive(Clone)]
pub struct ChartController {
    selection: Arc<watch::Sender<Selection>>,
    view: Arc<RwLock<Option<ChartView>>>,
}

impl ChartController {
    /// Starts watching selections; must be called inside a tokio runtime.
    pub fn spawn(client: Arc<HistoricalClient>, initial: Selection) -> Self {
        let (sender, receiver) = watch::channel(initial);
        let view = Arc::new(RwLock::new(None));
        tokio::spawn(watch_selection(receiver, client, Arc::clone(&view)));
        Self {
            selection: Arc::new(sender),
            view,
        }
    }

    /// Returns `true` when the selection changed and a refresh was started.
    pub fn select(&self, next: Selection) -> bool {
        self.selection.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        })
    }

    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    pub async fn current(&self) -> Option<ChartView> {
        self.view.read().await.clone()
    }
}

/// Fetches and builds the view for one selection, without touching any state.
pub async fn load_view(
    client: &HistoricalClient,
    selection: &Selection,
) -> Result<ChartView, RefreshError> {
    let scope = selection.scope();
    let series = client.fetch(&scope).await?;
    let points = build_chart_data(&series, selection.metric, &scope)?;
    debug!(
        "built {} points for {} / {}",
        points.len(),
        selection.country,
        selection.metric
    );
    Ok(ChartView::build(selection, points))
}

async fn watch_selection(
    mut receiver: watch::Receiver<Selection>,
    client: Arc<HistoricalClient>,
    view: Arc<RwLock<Option<ChartView>>>,
) {
    loop {
        let selection = receiver.borrow_and_update().clone();
        tokio::spawn(refresh(Arc::clone(&client), Arc::clone(&view), selection));
        if receiver.changed().await.is_err() {
            debug!("selection channel closed");
            break;
        }
    }
}

async fn refresh(
    client: Arc<HistoricalClient>,
    view: Arc<RwLock<Option<ChartView>>>,
    selection: Selection,
) {
    match load_view(&client, &selection).await {
        Ok(next) => {
            info!(
                "chart updated for {} / {} ({} points)",
                selection.country,
                selection.metric,
                next.points.len()
            );
            *view.write().await = Some(next);
        }
        Err(err) => warn!(
            "keeping previous chart, refresh for {} / {} failed: {err}",
            selection.country, selection.metric
        ),
    }
}
