//! Timestamp formatting for the transport bar.

use std::time::Duration;

/// Format a playback timestamp as `m:ss` with seconds zero-padded to two
/// digits. An unknown duration (media metadata not yet loaded) renders as
/// `0:00` rather than failing.
pub fn format_timestamp(value: Option<Duration>) -> String {
    let Some(value) = value else {
        return "0:00".to_string();
    };
    let total = value.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}
