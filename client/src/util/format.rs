//! Display formatting for server-provided values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Prefix under which the host forwards store-relative media paths.
pub const MEDIA_PREFIX: &str = "/media/";

/// Resolve an image reference from the API into a URL the browser can load.
///
/// Absolute (`http(s)://`, protocol-relative, `data:`) references are used as
/// is; anything else is a path on the store origin reached through the host.
#[must_use]
pub fn resolve_image_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("//")
        || trimmed.starts_with("data:")
    {
        return Some(trimmed.to_owned());
    }
    Some(format!("{MEDIA_PREFIX}{}", trimmed.trim_start_matches('/')))
}

/// Render a server timestamp as `YYYY-MM-DD HH:MM` (UTC).
///
/// Accepts RFC 3339 and the SQL `YYYY-MM-DD HH:MM:SS` form; anything else is
/// shown unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M";
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.naive_utc().format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return parsed.format(OUT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    trimmed.to_owned()
}

/// `"1 item"` / `"3 items"`.
#[must_use]
pub fn item_count_label(count: u32) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}
