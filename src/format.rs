//! Label formatting for the chart: signed tooltip values, abbreviated axis
//! ticks, and the two date renderings used by the time axis.

use chrono::NaiveDate;

const API_DATE: &str = "%m/%d/%y";
const AXIS_DATE: &str = "%m/%d/%y";
const TOOLTIP_DATE: &str = "%b %-d, %Y";

const UNITS: [(u64, &str); 4] = [
    (1_000_000_000_000, "t"),
    (1_000_000_000, "b"),
    (1_000_000, "m"),
    (1_000, "k"),
];

/// `1234` -> `+1,234`, `-20` -> `-20`.
pub fn signed_thousands(value: i64) -> String {
    let sign = if value < 0 { '-' } else { '+' };
    format!("{sign}{}", group_thousands(value.unsigned_abs()))
}

/// `1500` -> `2k`, `2_400_000` -> `2m`. Rounds half up in integer space, so
/// counts above 2^53 keep their exact value.
pub fn abbreviate(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();

    let mut scaled = abs;
    let mut suffix = "";
    for (index, (unit, name)) in UNITS.iter().enumerate() {
        if abs < *unit {
            continue;
        }
        scaled = round_div(abs, *unit);
        suffix = *name;
        // 999_500 rounds to 1000k; show it as 1m instead.
        if scaled >= 1000 && index > 0 {
            let (bigger, bigger_name) = UNITS[index - 1];
            scaled = round_div(abs, bigger);
            suffix = bigger_name;
        }
        break;
    }

    format!("{sign}{scaled}{suffix}")
}

fn round_div(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit - unit / 2)
}

pub fn parse_api_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, API_DATE).ok()
}

/// `1/2/21` -> `Jan 2, 2021`.
pub fn tooltip_date(date: &str) -> String {
    parse_api_date(date)
        .map(|parsed| parsed.format(TOOLTIP_DATE).to_string())
        .unwrap_or_else(|| date.to_string())
}

/// `1/2/21` -> `01/02/21`.
pub fn axis_date(date: &str) -> String {
    parse_api_date(date)
        .map(|parsed| parsed.format(AXIS_DATE).to_string())
        .unwrap_or_else(|| date.to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
