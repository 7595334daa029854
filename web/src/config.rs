use std::sync::OnceLock;
use std::time::Duration;

use crate::seat_map::SeatingConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime settings for the mock backend, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Percentage applied to every simulated round trip. 0 disables the delay.
    pub latency_scale: u32,
    pub seating: SeatingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            latency_scale: 100,
            seating: SeatingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or malformed values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(scale) = lookup("SEATWELL_LATENCY_SCALE").and_then(|v| v.trim().parse().ok()) {
            config.latency_scale = scale;
        }

        if let Some(raw) = lookup("SEATWELL_PRE_BOOKED") {
            let ids: Option<Vec<i32>> = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| part.parse().ok())
                .collect();
            if let Some(ids) = ids {
                config.seating = SeatingConfig::with_pre_booked(ids);
            }
        }

        config
    }

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(AppConfig::from_env)
    }

    /// Installs `config` unless a config is already in place; returns the active one.
    pub fn install(config: AppConfig) -> &'static AppConfig {
        CONFIG.get_or_init(|| config)
    }

    pub fn latency(&self, base: Duration) -> Duration {
        base * self.latency_scale / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.latency(Duration::from_millis(2000)), Duration::from_millis(2000));
    }

    #[test]
    fn reads_scale_and_pre_booked_ids() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SEATWELL_LATENCY_SCALE", "50"),
            ("SEATWELL_PRE_BOOKED", "1, 3 ,7,"),
        ]));
        assert_eq!(config.latency(Duration::from_millis(1500)), Duration::from_millis(750));
        assert_eq!(
            config.seating.pre_booked.iter().copied().collect::<Vec<_>>(),
            vec![1, 3, 7]
        );
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SEATWELL_LATENCY_SCALE", "fast"),
            ("SEATWELL_PRE_BOOKED", "1,two,3"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_pre_booked_list_disables_simulated_sales() {
        let config = AppConfig::from_lookup(lookup(&[("SEATWELL_PRE_BOOKED", "")]));
        assert!(config.seating.pre_booked.is_empty());
    }
}
