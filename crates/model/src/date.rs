//! Date codec for `<DATE>` content.
//!
//! Three textual forms are legal and nothing else:
//!
//! | Form | Example |
//! |------|---------|
//! | calendar date | `2009-07-23` |
//! | date-time in UTC | `2009-07-23T14:38:00Z` |
//! | date-time with fixed offset | `2009-07-23T14:38:00+06:00` |
//!
//! Fractional seconds, week dates, ordinal dates, basic (separator-less)
//! forms and offsets without minutes are all rejected. Formatting is
//! canonical: a zero offset is always written as `Z`.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Timelike, Utc,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ModelError, Result};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:T([0-9]{2}):([0-9]{2}):([0-9]{2})(Z|([+-])([0-9]{2}):([0-9]{2})))?$",
    )
    .expect("date pattern is valid")
});

const KIND: &str = "date";

/// A calendar date, or a date-time with a UTC or fixed offset.
///
/// Equality is structural: `14:38+06:00` and `08:38Z` describe the same
/// instant but are different values, because they are written differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValue {
    /// `YYYY-MM-DD`
    Date(NaiveDate),
    /// `YYYY-MM-DDThh:mm:ss` followed by `Z` or `±hh:mm`
    DateTime {
        local: NaiveDateTime,
        offset: FixedOffset,
    },
}

impl DateValue {
    /// Builds a calendar date, failing for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateValue::Date)
            .ok_or_else(|| ModelError::format(KIND, format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Builds a UTC date-time. Sub-second precision is rejected.
    pub fn utc(local: NaiveDateTime) -> Result<Self> {
        Self::with_offset(local, utc_offset())
    }

    /// Builds a date-time with an explicit offset. Sub-second precision is rejected.
    pub fn with_offset(local: NaiveDateTime, offset: FixedOffset) -> Result<Self> {
        if local.nanosecond() != 0 {
            return Err(ModelError::format(KIND, local.to_string()));
        }
        if offset.local_minus_utc() % 60 != 0 {
            return Err(ModelError::format(KIND, offset.to_string()));
        }
        Ok(DateValue::DateTime { local, offset })
    }

    /// Parses one of the three accepted forms.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ModelError::format(KIND, text);
        let caps = DATE_PATTERN.captures(text).ok_or_else(invalid)?;

        let field = |i: usize| -> Result<u32> {
            caps.get(i)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse::<u32>()
                .map_err(|_| invalid())
        };

        let year = field(1)? as i32;
        let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?).ok_or_else(invalid)?;

        if caps.get(4).is_none() {
            return Ok(DateValue::Date(date));
        }

        let time = NaiveTime::from_hms_opt(field(4)?, field(5)?, field(6)?).ok_or_else(invalid)?;
        let offset = if caps.get(8).is_none() {
            utc_offset()
        } else {
            let hours = field(9)?;
            let minutes = field(10)?;
            if hours > 23 || minutes > 59 {
                return Err(invalid());
            }
            let seconds = (hours * 3600 + minutes * 60) as i32;
            let signed = if &caps[8] == "-" { -seconds } else { seconds };
            FixedOffset::east_opt(signed).ok_or_else(invalid)?
        };

        Ok(DateValue::DateTime {
            local: NaiveDateTime::new(date, time),
            offset,
        })
    }

    pub fn year(&self) -> i32 {
        self.date().year()
    }

    pub fn month(&self) -> u32 {
        self.date().month()
    }

    pub fn day(&self) -> u32 {
        self.date().day()
    }

    /// The calendar date part.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateValue::Date(date) => *date,
            DateValue::DateTime { local, .. } => local.date(),
        }
    }

    /// The wall-clock time, absent for a calendar date.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            DateValue::Date(_) => None,
            DateValue::DateTime { local, .. } => Some(local.time()),
        }
    }

    /// The offset from UTC, absent for a calendar date.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            DateValue::Date(_) => None,
            DateValue::DateTime { offset, .. } => Some(*offset),
        }
    }

    /// True for a date-time whose offset is zero.
    pub fn is_utc(&self) -> bool {
        self.offset().is_some_and(|o| o.local_minus_utc() == 0)
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateValue::DateTime { local, offset } => {
                write!(f, "{}", local.format("%Y-%m-%dT%H:%M:%S"))?;
                let seconds = offset.local_minus_utc();
                if seconds == 0 {
                    return f.write_str("Z");
                }
                let sign = if seconds < 0 { '-' } else { '+' };
                let minutes = seconds.abs() / 60;
                write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
            }
        }
    }
}

impl FromStr for DateValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        DateValue::parse(s)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl TryFrom<DateTime<FixedOffset>> for DateValue {
    type Error = ModelError;

    fn try_from(value: DateTime<FixedOffset>) -> Result<Self> {
        DateValue::with_offset(value.naive_local(), *value.offset())
    }
}

impl TryFrom<DateTime<Utc>> for DateValue {
    type Error = ModelError;

    fn try_from(value: DateTime<Utc>) -> Result<Self> {
        DateValue::utc(value.naive_utc())
    }
}

impl serde::Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateValue::parse(&text).map_err(serde::de::Error::custom)
    }
}
