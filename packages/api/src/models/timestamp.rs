//! Lenient timestamp decoding.
//!
//! Timezone-aware columns come back as RFC 3339 (`2024-03-01T09:00:00+00:00`)
//! from PostgreSQL but naive (`2024-03-01T09:00:00`) from SQLite. Both are read
//! as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            raw.parse::<NaiveDateTime>()
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
}
