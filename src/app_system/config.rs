use std::str::FromStr;
use tracing::warn;

pub const CHANNEL_BUFFER_ENV: &str = "BOOKSTORE_CHANNEL_BUFFER";
pub const OUTDATED_AFTER_YEARS_ENV: &str = "BOOKSTORE_OUTDATED_AFTER_YEARS";

/// Runtime settings for [`BookstoreSystem`](super::BookstoreSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct BookstoreConfig {
    /// Capacity of the inventory service request channel.
    pub channel_buffer: usize,
    /// Books older than this many years are evicted by the maintenance pass.
    pub outdated_after_years: u32,
}

impl Default for BookstoreConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            outdated_after_years: 4,
        }
    }
}

impl BookstoreConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Values that do not parse
    /// are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut channel_buffer = parse_or(&lookup, CHANNEL_BUFFER_ENV, defaults.channel_buffer);
        if channel_buffer == 0 {
            warn!(key = CHANNEL_BUFFER_ENV, "Channel buffer must be positive, using default");
            channel_buffer = defaults.channel_buffer;
        }
        Self {
            channel_buffer,
            outdated_after_years: parse_or(&lookup, OUTDATED_AFTER_YEARS_ENV, defaults.outdated_after_years),
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
