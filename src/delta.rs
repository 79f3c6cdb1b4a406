use crate::errors::SeriesError;
use crate::models::{ChartPoint, ChartSeries, HistoricalSeries, Metric, MetricTable, Scope};
use serde_json::Value;

/// Turns cumulative counts into day-over-day deltas for `metric`.
///
/// Dates always come from the `cases` mapping, values from the `metric`
/// mapping. The first date only seeds the running value, so `N` dates give
/// `N - 1` points. A missing or non-integer value, or a difference that
/// overflows `i64`, yields a `None` delta rather than an error.
pub fn build_chart_data(
    series: &HistoricalSeries,
    metric: Metric,
    scope: &Scope,
) -> Result<ChartSeries, SeriesError> {
    let table = metric_table(series, scope)?;
    let dates = table
        .cases
        .as_ref()
        .ok_or_else(|| SeriesError::MissingCases(scope.label().to_string()))?;
    let values = table.get(metric);

    let mut points = Vec::with_capacity(dates.len().saturating_sub(1));
    let mut previous: Option<Option<i64>> = None;
    for date in dates.keys() {
        let current = values.and_then(|counts| counts.get(date)).and_then(Value::as_i64);
        if let Some(last) = previous {
            points.push(ChartPoint {
                x: date.clone(),
                y: difference(last, current),
            });
        }
        previous = Some(current);
    }

    Ok(points)
}

fn metric_table<'a>(
    series: &'a HistoricalSeries,
    scope: &Scope,
) -> Result<&'a MetricTable, SeriesError> {
    match scope {
        Scope::Worldwide => Ok(&series.totals),
        Scope::Country(country) => series
            .timeline
            .as_ref()
            .ok_or_else(|| SeriesError::MissingTimeline(country.clone())),
    }
}

fn difference(previous: Option<i64>, current: Option<i64>) -> Option<i64> {
    current?.checked_sub(previous?)
}
