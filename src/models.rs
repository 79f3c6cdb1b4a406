use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::ParseSelectionError;

pub const WORLDWIDE: &str = "worldwide";

/// Date (`M/D/YY`) to cumulative count, in upstream document order.
pub type DateCounts = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Recovered, Metric::Deaths];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Recovered => "recovered",
            Metric::Deaths => "deaths",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseSelectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "cases" => Ok(Metric::Cases),
            "recovered" => Ok(Metric::Recovered),
            "deaths" => Ok(Metric::Deaths),
            other => Err(ParseSelectionError::UnknownMetric(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Worldwide,
    Country(String),
}

impl Scope {
    pub fn from_country(country: &str) -> Self {
        if country == WORLDWIDE {
            Scope::Worldwide
        } else {
            Scope::Country(country.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Scope::Worldwide => WORLDWIDE,
            Scope::Country(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub metric: Metric,
}

impl Selection {
    pub fn new(country: impl Into<String>, metric: Metric) -> Result<Self, ParseSelectionError> {
        let country: String = country.into();
        let country = country.trim().to_string();
        if country.is_empty() {
            return Err(ParseSelectionError::EmptyCountry);
        }
        Ok(Self { country, metric })
    }

    pub fn scope(&self) -> Scope {
        Scope::from_country(&self.country)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            country: WORLDWIDE.to_string(),
            metric: Metric::default(),
        }
    }
}

/// The three per-metric date mappings. Any of them may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<DateCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovered: Option<DateCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<DateCounts>,
}

impl MetricTable {
    pub fn get(&self, metric: Metric) -> Option<&DateCounts> {
        match metric {
            Metric::Cases => self.cases.as_ref(),
            Metric::Recovered => self.recovered.as_ref(),
            Metric::Deaths => self.deaths.as_ref(),
        }
    }
}

/// Body of `/v3/covid-19/historical/...`.
///
/// Worldwide answers carry the metric mappings at the top level; per-country
/// answers nest them under `timeline` next to `country` and `province`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    #[serde(flatten)]
    pub totals: MetricTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<MetricTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    /// `None` when either side of the difference is not a number.
    pub y: Option<i64>,
}

pub type ChartSeries = Vec<ChartPoint>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartColors {
    pub fill: &'static str,
    pub line: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeAxis {
    pub format: &'static str,
    pub tooltip_format: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub legend: bool,
    pub point_radius: u8,
    pub maintain_aspect_ratio: bool,
    pub tooltip_mode: &'static str,
    pub tooltip_intersect: bool,
    pub x_axis: TimeAxis,
    pub y_grid_lines: bool,
    pub y_tick_format: &'static str,
    pub tooltip_value_format: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointLabel {
    pub date: String,
    pub axis_date: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub country: String,
    pub metric: Metric,
    pub colors: ChartColors,
    pub options: ChartOptions,
    pub points: ChartSeries,
    pub labels: Vec<PointLabel>,
    pub y_ticks: Vec<AxisTick>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub country: Option<String>,
    pub metric: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub country: Option<String>,
    pub metric: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub selection: Selection,
    pub view: Option<ChartView>,
}
