use std::env;
use std::time::Duration;

use tracing::warn;

pub const LOG_ENV: &str = "SYSFACTS_LOG";
const TIMEOUT_ENV: &str = "SYSFACTS_COMMAND_TIMEOUT_MS";
const POLL_ENV: &str = "SYSFACTS_POLL_MS";

const MIN_TIMEOUT_MS: u64 = 100;
const MIN_POLL_MS: u64 = 10;
const MAX_POLL_MS: u64 = 1000;
const DEFAULT_POLL_MS: u64 = 50;

/// Runtime settings. There are no flags and no config file; the few knobs
/// come from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Deadline for one external command. Unset unless the environment asks
    /// for one, so slow commands run to completion.
    pub command_timeout: Option<Duration>,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_timeout: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let command_timeout = read_ms(&lookup, TIMEOUT_ENV)
            .map(normalize_timeout_ms)
            .map(Duration::from_millis);
        let poll_ms = read_ms(&lookup, POLL_ENV)
            .map(normalize_poll_ms)
            .unwrap_or(DEFAULT_POLL_MS);
        Self {
            command_timeout,
            poll_interval: Duration::from_millis(poll_ms),
        }
    }
}

fn read_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid setting");
            None
        }
    }
}

fn normalize_timeout_ms(value: u64) -> u64 {
    value.max(MIN_TIMEOUT_MS)
}

fn normalize_poll_ms(value: u64) -> u64 {
    value.clamp(MIN_POLL_MS, MAX_POLL_MS)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.command_timeout, None);
        assert_eq!(config.poll_interval, Duration::from_millis(DEFAULT_POLL_MS));
    }

    #[test]
    fn tiny_timeout_is_raised_to_minimum() {
        let config = config_from(&[(TIMEOUT_ENV, "5")]);
        assert_eq!(
            config.command_timeout,
            Some(Duration::from_millis(MIN_TIMEOUT_MS))
        );
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[(TIMEOUT_ENV, "750"), (POLL_ENV, " 20 ")]);
        assert_eq!(config.command_timeout, Some(Duration::from_millis(750)));
        assert_eq!(config.poll_interval, Duration::from_millis(20));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[(TIMEOUT_ENV, "soon"), (POLL_ENV, "-1")]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn normalize_clamps_ranges() {
        assert_eq!(normalize_timeout_ms(0), MIN_TIMEOUT_MS);
        assert_eq!(normalize_timeout_ms(MIN_TIMEOUT_MS + 5), MIN_TIMEOUT_MS + 5);
        assert_eq!(normalize_poll_ms(0), MIN_POLL_MS);
        assert_eq!(normalize_poll_ms(60_000), MAX_POLL_MS);
    }
}
