mod common;

use common::{MISSING_COUNTRY, SLOW_COUNTRY, UPSTREAM};
use covid_line_graph::models::{ChartView, Metric, Selection};
use covid_line_graph::{ChartController, HistoricalClient};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

fn controller(initial: Selection) -> ChartController {
    let client = Arc::new(HistoricalClient::new(&UPSTREAM, 90));
    ChartController::spawn(client, initial)
}

async fn wait_for_view(
    controller: &ChartController,
    matches: impl Fn(&ChartView) -> bool,
) -> ChartView {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(view) = controller.current().await {
            if matches(&view) {
                return view;
            }
        }
        if Instant::now() > deadline {
            panic!("chart view never matched");
        }
        sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn initial_selection_is_fetched() {
    let controller = controller(Selection::default());

    let view = wait_for_view(&controller, |view| view.country == "worldwide").await;
    assert_eq!(view.metric, Metric::Cases);
    let deltas: Vec<Option<i64>> = view.points.iter().map(|point| point.y).collect();
    assert_eq!(deltas, [Some(50), Some(-20)]);
}

#[tokio::test]
async fn selection_change_refetches() {
    let controller = controller(Selection::default());
    wait_for_view(&controller, |view| view.country == "worldwide").await;

    assert!(controller.select(Selection::new("USA", Metric::Recovered).unwrap()));
    let view = wait_for_view(&controller, |view| view.country == "USA").await;
    assert_eq!(view.metric, Metric::Recovered);
    let deltas: Vec<Option<i64>> = view.points.iter().map(|point| point.y).collect();
    assert_eq!(deltas, [Some(4), Some(1)]);
    assert_eq!(view.colors.line, "rgb(125, 215, 29)");
}

#[tokio::test]
async fn unchanged_selection_is_ignored() {
    let controller = controller(Selection::default());
    assert!(!controller.select(Selection::default()));
    assert!(controller.select(Selection::new("worldwide", Metric::Deaths).unwrap()));
    assert_eq!(controller.selection().metric, Metric::Deaths);
}

#[tokio::test]
async fn last_response_wins() {
    let controller = controller(Selection::default());
    wait_for_view(&controller, |view| view.country == "worldwide").await;

    controller.select(Selection::new(SLOW_COUNTRY, Metric::Cases).unwrap());
    sleep(Duration::from_millis(100)).await;
    controller.select(Selection::new("USA", Metric::Cases).unwrap());

    wait_for_view(&controller, |view| view.country == "USA").await;
    let view = wait_for_view(&controller, |view| view.country == SLOW_COUNTRY).await;
    assert_eq!(view.points.len(), 2);
    assert_eq!(controller.selection().country, "USA");
}

#[tokio::test]
async fn failed_fetch_keeps_previous_view() {
    let controller = controller(Selection::default());
    let before = wait_for_view(&controller, |view| view.country == "worldwide").await;

    assert!(controller.select(Selection::new(MISSING_COUNTRY, Metric::Cases).unwrap()));
    sleep(Duration::from_millis(300)).await;

    assert_eq!(controller.current().await, Some(before));
    assert_eq!(controller.selection().country, MISSING_COUNTRY);
}
