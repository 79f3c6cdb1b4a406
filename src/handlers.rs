use crate::controller::load_view;
use crate::errors::AppError;
use crate::models::{ChartResponse, ChartView, HistoryQuery, Metric, Selection, SelectionRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.controller.selection()))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    Json(ChartResponse {
        selection: state.controller.selection(),
        view: state.controller.current().await,
    })
}

pub async fn get_selection(State(state): State<AppState>) -> Json<Selection> {
    Json(state.controller.selection())
}

pub async fn update_selection(
    State(state): State<AppState>,
    Json(payload): Json<SelectionRequest>,
) -> Result<(StatusCode, Json<Selection>), AppError> {
    let current = state.controller.selection();
    let next = merge_selection(&current, payload.country, payload.metric)?;

    if state.controller.select(next.clone()) {
        info!("selection changed to {} / {}", next.country, next.metric);
    }
    Ok((StatusCode::ACCEPTED, Json(next)))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ChartView>, AppError> {
    let selection = merge_selection(&Selection::default(), query.country, query.metric)?;
    let view = load_view(&state.client, &selection).await?;
    Ok(Json(view))
}

/// Applies the provided fields on top of `base`; absent fields are kept.
fn merge_selection(
    base: &Selection,
    country: Option<String>,
    metric: Option<String>,
) -> Result<Selection, AppError> {
    let metric = match metric {
        Some(metric) => metric.parse::<Metric>()?,
        None => base.metric,
    };
    let country = country.unwrap_or_else(|| base.country.clone());
    Ok(Selection::new(country, metric)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_absent_fields() {
        let base = Selection::new("USA", Metric::Deaths).unwrap();
        let merged = merge_selection(&base, None, Some("recovered".into())).unwrap();
        assert_eq!(merged, Selection::new("USA", Metric::Recovered).unwrap());

        let merged = merge_selection(&base, Some("worldwide".into()), None).unwrap();
        assert_eq!(merged, Selection::new("worldwide", Metric::Deaths).unwrap());
    }

    #[test]
    fn merge_rejects_bad_input() {
        let base = Selection::default();
        let err = merge_selection(&base, None, Some("active".into())).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = merge_selection(&base, Some("   ".into()), None).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
