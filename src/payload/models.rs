//! Payload model types.

use serde::{Deserialize, Serialize};

/// Envelope of the upstream monitors API response.
///
/// `monitors` stays optional: a payload without the collection is the
/// upstream's way of saying there is nothing to format, and the formatter
/// passes that signal through as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorPayload {
    #[serde(default)]
    pub monitors: Option<Vec<Monitor>>,
}

/// One monitored site as the upstream reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Monitor {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Monitor category; 1 is an HTTP-reachable monitor.
    #[serde(default, rename = "type")]
    pub monitor_type: Option<u8>,
    #[serde(default)]
    pub status: Option<u8>,
    /// Polling interval in seconds.
    #[serde(default)]
    pub interval: Option<u64>,
    /// Unix seconds at which monitoring began for this site.
    #[serde(default)]
    pub create_datetime: Option<i64>,
    /// Hyphen-separated per-day percentages with a trailing overall value.
    #[serde(default)]
    pub custom_uptime_ranges: Option<String>,
    #[serde(default)]
    pub logs: Logs,
}

/// The `logs` field of a monitor.
///
/// The upstream sends either a list of events or a bare string such as
/// "No records" when it has no data for the window. Anything else is kept
/// as-is and folds nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Logs {
    Events(Vec<LogEvent>),
    Text(String),
    Other(serde_json::Value),
}

impl Default for Logs {
    fn default() -> Self {
        Logs::Events(Vec::new())
    }
}

/// A single recorded incident.
///
/// Events of type 1 and 99 are downtime; other types are ignored by the
/// formatter. Events are echoed into the report, hence `Serialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(default, rename = "type")]
    pub event_type: u8,
    /// Unix seconds of the incident.
    #[serde(default)]
    pub datetime: i64,
    /// Seconds of downtime.
    #[serde(default)]
    pub duration: f64,
}
