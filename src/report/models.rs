//! Report model types.

use serde::Serialize;

use crate::payload::LogEvent;

// Upstream site status codes.
pub const STATUS_PAUSED: u8 = 0;
pub const STATUS_PENDING: u8 = 1;
pub const STATUS_UP: u8 = 2;
pub const STATUS_SEEMS_DOWN: u8 = 8;
pub const STATUS_DOWN: u8 = 9;

/// Monitor category for HTTP-reachable sites; their URL is always exposed.
pub const TYPE_HTTP: u8 = 1;

/// Log event types that count as downtime.
pub const DOWN_EVENT_TYPES: [u8; 2] = [1, 99];

/// Placeholder for sites without a friendly name.
pub const UNNAMED_SITE: &str = "Unnamed site";

/// Downtime aggregate for a single window day.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayDowntime {
    pub times: u32,
    /// Seconds of downtime on this day.
    pub duration: f64,
    /// The raw events that fell on this day, in encounter order.
    pub events: Vec<LogEvent>,
}

/// Site-wide downtime totals.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Downtime {
    pub times: u32,
    pub duration: f64,
}

/// Status of one site on one window day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    /// Unix seconds, midnight UTC of the day.
    pub date: i64,
    pub percent: f64,
    pub down: DayDowntime,
    /// True when the site did not yet exist on this day.
    pub not_monitored: bool,
}

/// Display-ready status of one site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteStatus {
    pub id: i64,
    pub name: String,
    /// Omitted from serialization entirely when link exposure is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: u8,
    #[serde(rename = "type")]
    pub monitor_type: u8,
    /// Polling interval in seconds.
    pub interval: u64,
    /// Overall uptime percentage for the site.
    pub percent: f64,
    /// Window days, most recent first.
    pub days: Vec<DayStatus>,
    pub down: Downtime,
}

/// Summary tally across all sites.
///
/// Codes outside the known set land in no bucket but still count in `count`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusTally {
    pub count: usize,
    pub ok: usize,
    pub error: usize,
    pub unknown: usize,
}

/// The full formatted report.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub status: StatusTally,
    pub data: Vec<SiteStatus>,
    /// Capture time, Unix milliseconds.
    pub timestamp: i64,
}
