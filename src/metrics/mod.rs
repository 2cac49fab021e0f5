//! Counters for the container's recompute activity.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    changes: u64,
    tracks_synthesized: u64,
    remaps: u64,
    wraps: u64,
    margin_updates: u64,
    spacing_refreshes: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_change(&mut self) {
        self.changes = self.changes.saturating_add(1);
    }

    pub fn record_synthesis(&mut self, gutter_count: usize) {
        self.tracks_synthesized = self.tracks_synthesized.saturating_add(gutter_count as u64);
    }

    pub fn record_remap(&mut self) {
        self.remaps = self.remaps.saturating_add(1);
    }

    pub fn record_wrap(&mut self) {
        self.wraps = self.wraps.saturating_add(1);
    }

    pub fn record_margin_updates(&mut self, count: usize) {
        if count > 0 {
            self.margin_updates = self.margin_updates.saturating_add(count as u64);
        }
    }

    pub fn record_spacing_refresh(&mut self, count: usize) {
        if count > 0 {
            self.spacing_refreshes = self.spacing_refreshes.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            changes: self.changes,
            tracks_synthesized: self.tracks_synthesized,
            remaps: self.remaps,
            wraps: self.wraps,
            margin_updates: self.margin_updates,
            spacing_refreshes: self.spacing_refreshes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub changes: u64,
    pub tracks_synthesized: u64,
    pub remaps: u64,
    pub wraps: u64,
    pub margin_updates: u64,
    pub spacing_refreshes: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("changes".to_string(), json!(self.changes));
        map.insert(
            "tracks_synthesized".to_string(),
            json!(self.tracks_synthesized),
        );
        map.insert("remaps".to_string(), json!(self.remaps));
        map.insert("wraps".to_string(), json!(self.wraps));
        map.insert("margin_updates".to_string(), json!(self.margin_updates));
        map.insert(
            "spacing_refreshes".to_string(),
            json!(self.spacing_refreshes),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        let mut event = LogEvent::new(LogLevel::Info, target, "layout_metrics");
        event.fields = self.as_fields();
        event
    }
}
