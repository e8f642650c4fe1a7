//! Calendar date and time-slot types for reservations.
//!
//! This module provides the value types all booking operations share. On the
//! wire, dates are `DD/MM/YYYY`, times are 24-hour `HH:mm`, and a slot is a
//! `"HH:mm - HH:mm"` pair joined by a literal `" - "` separator. Internally
//! the types wrap `chrono` values so comparisons are calendar-correct, and
//! database storage uses ISO `YYYY-MM-DD` text so SQL string ordering matches
//! chronological ordering.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reservation's calendar date.
///
/// Parsed from and displayed in the `DD/MM/YYYY` wire format, but ordered as
/// a calendar value: `"31/01/2025"` sorts before `"01/02/2025"` even though
/// the wire strings compare the other way around.
///
/// # Examples
///
/// ```
/// use huddle::ReservationDate;
///
/// let jan = ReservationDate::parse("31/01/2025").unwrap();
/// let feb = ReservationDate::parse("01/02/2025").unwrap();
/// assert!(jan < feb);
/// assert_eq!(format!("{jan}"), "31/01/2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    /// The wire format accepted from and produced for callers.
    pub const WIRE_FORMAT: &'static str = "%d/%m/%Y";

    /// The storage format persisted to the database.
    ///
    /// ISO `YYYY-MM-DD` text compares chronologically under SQL string
    /// ordering, which the sweep and overlap queries rely on.
    pub const STORAGE_FORMAT: &'static str = "%Y-%m-%d";

    /// Parses a date from the `DD/MM/YYYY` wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, malformed, or names a day
    /// that does not exist on the calendar.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::ReservationDate;
    ///
    /// assert!(ReservationDate::parse("06/05/2025").is_ok());
    /// assert!(ReservationDate::parse("31/02/2025").is_err());
    /// assert!(ReservationDate::parse("2025-05-06").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseDateError> {
        if s.trim().is_empty() {
            return Err(ParseDateError {
                value: s.to_string(),
                reason: "date must be non-empty".into(),
            });
        }
        NaiveDate::parse_from_str(s, Self::WIRE_FORMAT)
            .map(Self)
            .map_err(|e| ParseDateError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parses a date from the ISO storage format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn from_storage(s: &str) -> Result<Self, ParseDateError> {
        NaiveDate::parse_from_str(s, Self::STORAGE_FORMAT)
            .map(Self)
            .map_err(|e| ParseDateError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the ISO `YYYY-MM-DD` text persisted to the database.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.0.format(Self::STORAGE_FORMAT).to_string()
    }

    /// Returns the underlying calendar value.
    #[must_use]
    pub const fn value(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::WIRE_FORMAT))
    }
}

impl Serialize for ReservationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReservationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A time of day within a slot, in 24-hour `HH:mm` wire format.
///
/// # Examples
///
/// ```
/// use huddle::SlotTime;
///
/// let nine = SlotTime::parse("09:00").unwrap();
/// let ten = SlotTime::parse("10:00").unwrap();
/// assert!(nine < ten);
/// assert!(SlotTime::parse("25:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    /// The wire format, which doubles as the storage format.
    pub const WIRE_FORMAT: &'static str = "%H:%M";

    /// Parses a time from the `HH:mm` wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or not a valid 24-hour time.
    pub fn parse(s: &str) -> Result<Self, ParseTimeError> {
        if s.trim().is_empty() {
            return Err(ParseTimeError {
                value: s.to_string(),
                reason: "time must be non-empty".into(),
            });
        }
        NaiveTime::parse_from_str(s, Self::WIRE_FORMAT)
            .map(Self)
            .map_err(|e| ParseTimeError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the underlying time value.
    #[must_use]
    pub const fn value(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for SlotTime {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::WIRE_FORMAT))
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A contiguous start/end time range requested for one reservation.
///
/// Slots are half-open ranges: `[09:00, 10:00)` and `[10:00, 11:00)` touch
/// but do not overlap.
///
/// # Examples
///
/// ```
/// use huddle::Slot;
///
/// let morning = Slot::parse("09:00 - 10:00").unwrap();
/// let next = Slot::parse("10:00 - 11:00").unwrap();
/// assert!(!morning.overlaps(&next));
///
/// let clash = Slot::parse("09:30 - 10:30").unwrap();
/// assert!(morning.overlaps(&clash));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    start: SlotTime,
    end: SlotTime,
}

impl Slot {
    /// The literal separator between start and end in the wire format.
    pub const SEPARATOR: &'static str = " - ";

    /// Creates a slot from a start/end pair.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not strictly before `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::{Slot, SlotTime};
    ///
    /// let start = SlotTime::parse("09:00").unwrap();
    /// let end = SlotTime::parse("10:00").unwrap();
    /// assert!(Slot::new(start, end).is_ok());
    /// assert!(Slot::new(end, start).is_err());
    /// ```
    pub fn new(start: SlotTime, end: SlotTime) -> Result<Self, ParseSlotError> {
        if start >= end {
            return Err(ParseSlotError {
                value: format!("{start}{}{end}", Self::SEPARATOR),
                reason: "start must be strictly before end".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses a slot from the `"HH:mm - HH:mm"` wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is missing, either time is
    /// malformed, or the start is not strictly before the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::Slot;
    ///
    /// assert!(Slot::parse("09:00 - 10:00").is_ok());
    /// assert!(Slot::parse("09:00-10:00").is_err());
    /// assert!(Slot::parse("10:00 - 09:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseSlotError> {
        let Some((start_str, end_str)) = s.split_once(Self::SEPARATOR) else {
            return Err(ParseSlotError {
                value: s.to_string(),
                reason: format!("missing '{}' separator", Self::SEPARATOR),
            });
        };

        let start = SlotTime::parse(start_str).map_err(|e| ParseSlotError {
            value: s.to_string(),
            reason: format!("bad start time: {}", e.reason),
        })?;
        let end = SlotTime::parse(end_str).map_err(|e| ParseSlotError {
            value: s.to_string(),
            reason: format!("bad end time: {}", e.reason),
        })?;

        Self::new(start, end)
    }

    /// Returns the slot's start time.
    #[must_use]
    pub const fn start(&self) -> SlotTime {
        self.start
    }

    /// Returns the slot's end time.
    #[must_use]
    pub const fn end(&self) -> SlotTime {
        self.end
    }

    /// Returns `true` if this slot shares any instant with `other`.
    ///
    /// Both slots are treated as half-open ranges, so a slot ending exactly
    /// when the other begins does not overlap it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, Self::SEPARATOR, self.end)
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for unparseable reservation dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError {
    /// The unparseable date string.
    pub value: String,
    /// The reason the date is invalid.
    pub reason: String,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseDateError {}

/// Error type for unparseable slot times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError {
    /// The unparseable time string.
    pub value: String,
    /// The reason the time is invalid.
    pub reason: String,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseTimeError {}

/// Error type for unparseable or inverted slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSlotError {
    /// The unparseable slot string.
    pub value: String,
    /// The reason the slot is invalid.
    pub reason: String,
}

impl fmt::Display for ParseSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseSlotError {}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
