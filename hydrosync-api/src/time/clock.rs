use core::fmt;

use time::{Date, Duration, Month, PrimitiveDateTime, Time};

/// One editable component of a wall-clock tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// A calendar/time tuple in the frame of the selected UTC offset.
///
/// Out-of-range components roll forward into the next larger unit
/// (month 13 becomes January of the following year, day 32 rolls into
/// the next month), so individual field writes never fail on calendar
/// grounds. Values that would leave the representable year span are
/// dropped and the previous tuple is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFields(PrimitiveDateTime);

impl ClockFields {
    /// Builds a tuple from raw components with rolling normalization.
    pub fn from_components(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Option<Self> {
        let year = year.checked_add((month - 1).div_euclid(12))?;
        let month = (month - 1).rem_euclid(12) + 1;

        let year = i32::try_from(year).ok()?;
        let month = Month::try_from(month as u8).ok()?;
        let first = Date::from_calendar_date(year, month, 1).ok()?;
        let date = first.checked_add(Duration::days(day.checked_sub(1)?))?;

        let clock_seconds = hour
            .checked_mul(3600)?
            .checked_add(minute.checked_mul(60)?)?
            .checked_add(second)?;

        PrimitiveDateTime::new(date, Time::MIDNIGHT)
            .checked_add(Duration::seconds(clock_seconds))
            .map(Self)
    }

    /// Reinterprets a UTC instant in the frame of `offset_minutes`.
    pub fn from_utc(utc: PrimitiveDateTime, offset_minutes: i32) -> Option<Self> {
        utc.checked_add(Duration::minutes(offset_minutes.into()))
            .map(Self)
    }

    /// Shifts the tuple back to UTC using `offset_minutes`.
    pub fn to_utc(&self, offset_minutes: i32) -> Option<PrimitiveDateTime> {
        self.0.checked_sub(Duration::minutes(offset_minutes.into()))
    }

    /// Replaces a single field, leaving every other field untouched.
    ///
    /// Negative values are ignored; out-of-range values roll per the
    /// type-level rules above.
    pub fn with_field(self, field: ClockField, value: i64) -> Self {
        if value < 0 {
            return self;
        }

        let mut year = i64::from(self.year());
        let mut month = i64::from(self.month());
        let mut day = i64::from(self.day());
        let mut hour = i64::from(self.hour());
        let mut minute = i64::from(self.minute());
        let mut second = i64::from(self.second());

        match field {
            ClockField::Year => year = value,
            ClockField::Month => month = value,
            ClockField::Day => day = value,
            ClockField::Hour => hour = value,
            ClockField::Minute => minute = value,
            ClockField::Second => second = value,
        }

        Self::from_components(year, month, day, hour, minute, second).unwrap_or(self)
    }

    /// The tuple advanced by `seconds`, or itself when unrepresentable.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        self.0
            .checked_add(Duration::seconds(seconds))
            .map(Self)
            .unwrap_or(self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, January = 1.
    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    pub fn second(&self) -> u8 {
        self.0.second()
    }

    pub fn as_datetime(&self) -> PrimitiveDateTime {
        self.0
    }
}

impl fmt::Display for ClockFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
