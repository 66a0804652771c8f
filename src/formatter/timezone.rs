use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

/// Timezone used to turn device timestamps into calendar dates and times
///
/// Dumps only carry epoch milliseconds, so the zone has to be chosen by the caller.
/// `Local` renders in the zone of the machine running the backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl RenderZone {
    /// Wall-clock date and time of `timestamp` in this zone
    pub fn to_wall_clock(&self, timestamp: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            RenderZone::Local => timestamp.with_timezone(&Local).naive_local(),
            RenderZone::Utc => timestamp.naive_utc(),
            RenderZone::Fixed(offset) => timestamp.with_timezone(offset).naive_local(),
        }
    }
}

impl FromStr for RenderZone {
    type Err = anyhow::Error;

    /// Accepts `local`, `utc` (or `z`), and offsets such as `+02:00`, `-0530` or `+1`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(RenderZone::Local),
            "utc" | "z" => return Ok(RenderZone::Utc),
            _ => {}
        }

        let (sign, digits) = match s.chars().next() {
            Some('+') => (1, &s[1..]),
            Some('-') => (-1, &s[1..]),
            _ => bail!("Invalid timezone '{}': expected local, utc or an offset like +02:00", s),
        };

        let (hours, minutes) = match digits.split_once(':') {
            Some((h, m)) => (h, m),
            None if digits.len() == 4 => (digits.get(..2).unwrap_or(""), digits.get(2..).unwrap_or("")),
            None => (digits, "0"),
        };
        // `i32::parse` would otherwise accept a second sign
        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(hours) || !is_number(minutes) {
            bail!("Invalid timezone '{}': expected local, utc or an offset like +02:00", s);
        }
        let hours: i32 =
            hours.parse().with_context(|| format!("Invalid hours in timezone offset '{}'", s))?;
        let minutes: i32 =
            minutes.parse().with_context(|| format!("Invalid minutes in timezone offset '{}'", s))?;
        if hours > 23 || minutes > 59 {
            bail!("Timezone offset out of range: '{}'", s);
        }

        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .with_context(|| format!("Timezone offset out of range: '{}'", s))?;
        Ok(RenderZone::Fixed(offset))
    }
}

impl fmt::Display for RenderZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderZone::Local => write!(f, "local"),
            RenderZone::Utc => write!(f, "utc"),
            RenderZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}
