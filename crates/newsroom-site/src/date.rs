//! Lenient publication date handling.
//!
//! Entry dates come from hand-authored CMS fields. A date that fails to
//! parse renders as empty text rather than aborting the batch.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use tracing::warn;

/// Parse an entry date, leniently.
///
/// Accepts RFC 3339 timestamps (normalized to UTC) and bare `YYYY-MM-DD`
/// dates (taken as midnight UTC). Anything else is logged and dropped.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    warn!("Unparseable entry date '{raw}', rendering without a date");
    None
}

/// `YYYY-MM-DD` form used in visible dates and sitemap `lastmod`.
#[must_use]
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// RFC 3339 form used in JSON-LD `datePublished`/`dateModified`.
#[must_use]
pub fn rfc3339_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Today's `YYYY-MM-DD`, for sitemap `lastmod` at build time.
#[must_use]
pub fn today_short() -> String {
    short_date(Utc::now())
}
