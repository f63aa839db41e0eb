//! SitePulse - display-ready shaping of uptime monitor data.
//!
//! Takes the raw payload of an uptime-monitoring API (per-site downtime
//! logs plus a compact per-day uptime-percentage string) and a calendar-day
//! window, and produces per-site daily status plus a summary tally, ready
//! for serialization.

pub mod config;
pub mod numeric;
pub mod payload;
pub mod report;

pub use config::DisplayConfig;
pub use payload::{parse_payload, LogEvent, Logs, Monitor, MonitorPayload, PayloadError};
pub use report::{format_site_data, window_ending, ReportDay, SiteStatus, StatusReport};
