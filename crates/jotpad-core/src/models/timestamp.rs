//! Serde helpers for the `updated` field.
//!
//! Stored notes carry `YYYY-MM-DDTHH:MM:SS.sssZ` strings. Any RFC 3339 value
//! is accepted when reading. Years past 9999 would serialize with a sign and
//! an extra digit that RFC 3339 readers reject, so stamps are clamped first.

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Current time truncated to the millisecond precision the document keeps.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// `9999-12-31T23:59:59.999Z`
const LATEST_STORABLE_MILLIS: i64 = 253_402_300_799_999;

/// Clamp `value` to the latest instant that still reads back.
pub fn clamp_storable(value: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(LATEST_STORABLE_MILLIS)
        .single()
        .map_or(value, |latest| value.min(latest))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(de::Error::custom)
}
