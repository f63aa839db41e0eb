//! Core formatter: raw monitor payload to display-ready report.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use crate::config::DisplayConfig;
use crate::payload::{Logs, Monitor, MonitorPayload, UptimeRanges};

use super::models::*;
use super::window::{day_key_of, ReportDay};

// Upstream substitutes this kind of string for the log list when it has no
// data for the site, e.g. "No records" or "no record".
static NO_RECORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)no\s*records?").expect("valid pattern"));

/// Format a raw monitor payload into a display-ready report.
///
/// `dates` is the reporting window in ascending order (oldest first); the
/// per-site `days` sequences come back reversed, most recent first.
///
/// Returns `None` when the payload carries no monitors collection at all,
/// which is the upstream's "nothing to format" signal. An empty collection
/// still formats to a report with zero sites.
pub fn format_site_data(
    payload: &MonitorPayload,
    dates: &[ReportDay],
    config: &DisplayConfig,
) -> Option<StatusReport> {
    let monitors = payload.monitors.as_ref()?;
    tracing::debug!("formatting {} monitors over {} days", monitors.len(), dates.len());

    let data: Vec<SiteStatus> = monitors
        .iter()
        .map(|site| format_site(site, dates, config))
        .collect();

    Some(StatusReport {
        status: tally(&data),
        data,
        timestamp: Utc::now().timestamp_millis(),
    })
}

/// A monitor with every contractual default applied.
struct NormalizedMonitor<'a> {
    id: i64,
    name: String,
    url: Option<&'a str>,
    status: u8,
    monitor_type: u8,
    interval: u64,
    create_datetime: Option<i64>,
    ranges: UptimeRanges,
    logs: &'a Logs,
}

fn normalize(site: &Monitor, day_count: usize) -> NormalizedMonitor<'_> {
    let name = site
        .friendly_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_SITE)
        .to_string();

    NormalizedMonitor {
        id: site.id,
        name,
        url: site.url.as_deref(),
        status: site.status.unwrap_or(STATUS_SEEMS_DOWN),
        monitor_type: site.monitor_type.unwrap_or(TYPE_HTTP),
        interval: site.interval.unwrap_or(0),
        create_datetime: site.create_datetime,
        ranges: UptimeRanges::parse(site.custom_uptime_ranges.as_deref(), day_count),
        logs: &site.logs,
    }
}

fn format_site(site: &Monitor, dates: &[ReportDay], config: &DisplayConfig) -> SiteStatus {
    let m = normalize(site, dates.len());

    let mut day_index = HashMap::with_capacity(dates.len());
    let mut days = Vec::with_capacity(dates.len());
    for (index, day) in dates.iter().enumerate() {
        day_index.insert(day.key(), index);
        // A site created after this day was not yet monitored on it.
        let not_monitored = m
            .create_datetime
            .map(|created| created > day.unix())
            .unwrap_or(false);
        days.push(DayStatus {
            date: day.unix(),
            percent: m.ranges.daily[index],
            down: DayDowntime::default(),
            not_monitored,
        });
    }

    let url = if config.show_links || m.monitor_type == TYPE_HTTP {
        m.url.map(str::to_string)
    } else {
        None
    };

    if let Logs::Text(text) = m.logs {
        if NO_RECORDS.is_match(text) {
            tracing::debug!("site {} has no log records, marking window unknown", m.id);
            // One synthetic incident per day, no duration, no event detail.
            for day in &mut days {
                day.percent = 0.0;
                day.down.times += 1;
            }
            let down = Downtime {
                times: days.len() as u32,
                duration: 0.0,
            };
            days.reverse();
            return SiteStatus {
                id: m.id,
                name: m.name,
                url,
                status: STATUS_PENDING,
                monitor_type: m.monitor_type,
                interval: m.interval,
                percent: 0.0,
                days,
                down,
            };
        }
    }

    let mut down = Downtime::default();
    if let Logs::Events(events) = m.logs {
        for event in events {
            if !DOWN_EVENT_TYPES.contains(&event.event_type) {
                continue;
            }
            match day_key_of(event.datetime).and_then(|key| day_index.get(&key)) {
                Some(&index) => {
                    let day = &mut days[index];
                    day.down.times += 1;
                    day.down.duration += event.duration;
                    day.down.events.push(event.clone());
                }
                None => {
                    tracing::trace!(
                        "site {} event at {} falls outside the window",
                        m.id,
                        event.datetime
                    );
                }
            }
            // Site totals include events that missed every day bucket.
            down.times += 1;
            down.duration += event.duration;
        }
    }

    days.reverse();
    SiteStatus {
        id: m.id,
        name: m.name,
        url,
        status: m.status,
        monitor_type: m.monitor_type,
        interval: m.interval,
        percent: m.ranges.overall,
        days,
        down,
    }
}

fn tally(sites: &[SiteStatus]) -> StatusTally {
    sites.iter().fold(
        StatusTally {
            count: sites.len(),
            ..Default::default()
        },
        |mut acc, site| {
            match site.status {
                STATUS_UP => acc.ok += 1,
                STATUS_SEEMS_DOWN | STATUS_DOWN => acc.error += 1,
                STATUS_PAUSED | STATUS_PENDING => acc.unknown += 1,
                _ => {}
            }
            acc
        },
    )
}
