use crate::format::{abbreviate, axis_date, signed_thousands, tooltip_date};
use crate::models::{
    AxisTick, ChartColors, ChartOptions, ChartPoint, ChartSeries, ChartView, Metric, PointLabel,
    Selection, TimeAxis,
};

const TARGET_TICKS: i64 = 4;

impl ChartColors {
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Cases => Self {
                fill: "rgba(168, 50, 153, 0.4)",
                line: "rgb(168, 50, 153)",
            },
            Metric::Recovered => Self {
                fill: "rgba(125, 215, 29, 0.4)",
                line: "rgb(125, 215, 29)",
            },
            Metric::Deaths => Self {
                fill: "rgba(251, 68, 67, 0.4)",
                line: "rgb(251, 68, 67)",
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend: false,
            point_radius: 0,
            maintain_aspect_ratio: false,
            tooltip_mode: "index",
            tooltip_intersect: false,
            x_axis: TimeAxis {
                format: "MM/DD/YY",
                tooltip_format: "ll",
            },
            y_grid_lines: false,
            y_tick_format: "0a",
            tooltip_value_format: "+0,0",
        }
    }
}

impl ChartView {
    pub fn build(selection: &Selection, points: ChartSeries) -> Self {
        let labels = points.iter().map(point_label).collect();
        let y_ticks = y_ticks(&points);
        Self {
            country: selection.country.clone(),
            metric: selection.metric,
            colors: ChartColors::for_metric(selection.metric),
            options: ChartOptions::default(),
            points,
            labels,
            y_ticks,
        }
    }
}

fn point_label(point: &ChartPoint) -> PointLabel {
    PointLabel {
        date: tooltip_date(&point.x),
        axis_date: axis_date(&point.x),
        value: point.y.map(signed_thousands),
    }
}

/// Evenly spaced ticks on a 1/2/5 x 10^k step covering every numeric `y`.
pub fn y_ticks(points: &[ChartPoint]) -> Vec<AxisTick> {
    let mut values = points.iter().filter_map(|point| point.y);
    let Some(first) = values.next() else {
        return Vec::new();
    };
    let (min, max) = values.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));

    let span = max.saturating_sub(min);
    if span == 0 {
        return vec![tick(min)];
    }

    let step = nice_step(span.saturating_add(TARGET_TICKS - 1) / TARGET_TICKS);
    // Near the ends of i64 the rounded start or the next step may not exist.
    let mut value = min.div_euclid(step).checked_mul(step).unwrap_or(min);
    let mut ticks = vec![tick(value)];
    while value < max {
        let Some(next) = value.checked_add(step) else {
            break;
        };
        value = next;
        ticks.push(tick(value));
    }
    ticks
}

fn nice_step(raw: i64) -> i64 {
    let mut magnitude = 1i64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|factor| magnitude.saturating_mul(factor))
        .find(|step| *step >= raw)
        .unwrap_or(raw)
}

fn tick(value: i64) -> AxisTick {
    AxisTick {
        value,
        label: abbreviate(value),
    }
}
