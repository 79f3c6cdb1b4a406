use crate::errors::ConfigError;
use crate::models::{Metric, Selection, WORLDWIDE};
use crate::upstream::{DEFAULT_API_BASE, DEFAULT_LAST_DAYS};
use std::env;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_base: String,
    pub last_days: u32,
    pub initial: Selection,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_base = lookup("HISTORICAL_API_BASE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let last_days = match lookup("HISTORICAL_LAST_DAYS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "HISTORICAL_LAST_DAYS",
                        value,
                    });
                }
            },
            None => DEFAULT_LAST_DAYS,
        };

        let metric = match lookup("DEFAULT_METRIC") {
            Some(value) => value
                .parse::<Metric>()
                .map_err(|source| ConfigError::InvalidSelection {
                    name: "DEFAULT_METRIC",
                    source,
                })?,
            None => Metric::default(),
        };
        let country = lookup("DEFAULT_COUNTRY").unwrap_or_else(|| WORLDWIDE.to_string());
        let initial =
            Selection::new(country, metric).map_err(|source| ConfigError::InvalidSelection {
                name: "DEFAULT_COUNTRY",
                source,
            })?;

        Ok(Self {
            port,
            api_base,
            last_days,
            initial,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, "https://disease.sh");
        assert_eq!(config.last_days, 90);
        assert_eq!(config.initial, Selection::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "3000"),
            ("HISTORICAL_API_BASE", "http://localhost:9999"),
            ("HISTORICAL_LAST_DAYS", "30"),
            ("DEFAULT_COUNTRY", "India"),
            ("DEFAULT_METRIC", "recovered"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_base, "http://localhost:9999");
        assert_eq!(config.last_days, 30);
        assert_eq!(config.initial, Selection::new("India", Metric::Recovered).unwrap());
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).unwrap().port, 8080);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            config(&[("HISTORICAL_LAST_DAYS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config(&[("DEFAULT_METRIC", "active")]),
            Err(ConfigError::InvalidSelection { name: "DEFAULT_METRIC", .. })
        ));
        assert!(matches!(
            config(&[("DEFAULT_COUNTRY", " ")]),
            Err(ConfigError::InvalidSelection { name: "DEFAULT_COUNTRY", .. })
        ));
    }
}
