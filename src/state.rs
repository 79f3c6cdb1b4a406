use crate::controller::ChartController;
use crate::models::Selection;
use crate::upstream::HistoricalClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<HistoricalClient>,
    pub controller: ChartController,
}

impl AppState {
    /// Shares `client` with a controller started on `initial`.
    pub fn spawn(client: HistoricalClient, initial: Selection) -> Self {
        let client = Arc::new(client);
        let controller = ChartController::spawn(Arc::clone(&client), initial);
        Self { client, controller }
    }
}
