use chrono::{DateTime, NaiveDate, NaiveTime, ParseError, Utc};
use shared::{domain::TalkEntry, protocol::TalkListing};

use crate::catalog::DATE_FORMAT;

/// Talks split around a reference instant.
///
/// `upcoming` holds talks strictly after `now`, soonest first. `past` holds
/// talks at or before `now`, most recent first. Talks sharing a date keep
/// their authored order in both groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub upcoming: Vec<&'a TalkEntry>,
    pub past: Vec<&'a TalkEntry>,
}

impl Partition<'_> {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_listing(&self) -> TalkListing {
        TalkListing {
            upcoming: self.upcoming.iter().map(|entry| (*entry).clone()).collect(),
            past: self.past.iter().map(|entry| (*entry).clone()).collect(),
        }
    }
}

pub fn partition(entries: &[TalkEntry], now: DateTime<Utc>) -> Partition<'_> {
    let (mut upcoming, mut past): (Vec<&TalkEntry>, Vec<&TalkEntry>) =
        entries.iter().partition(|entry| entry.starts_at() > now);

    // slice sorts are stable
    upcoming.sort_by_key(|entry| entry.date);
    past.sort_by(|a, b| b.date.cmp(&a.date));

    Partition { upcoming, past }
}

/// Parses a reference instant given either as a bare date (midnight UTC) or
/// as an RFC 3339 timestamp.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    let raw = raw.trim();
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Ok(instant.with_timezone(&Utc)),
        Err(_) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|date| date.and_time(NaiveTime::MIN).and_utc()),
    }
}

#[cfg(test)]
#[path = "tests/partition_tests.rs"]
mod tests;
