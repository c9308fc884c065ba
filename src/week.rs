use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Monday-to-Sunday window of the week containing a reference time.
///
/// Both bounds keep the time of day of the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub from: String,
    pub to: String,
}

impl WeekRange {
    pub fn from_date(&self) -> NaiveDate {
        self.from.date()
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to.date()
    }

    pub fn to_response(&self) -> WeekResponse {
        WeekResponse {
            from: date_key(self.from_date()),
            to: date_key(self.to_date()),
        }
    }
}

pub fn current_week() -> WeekRange {
    week_containing(Local::now().naive_local())
}

pub fn week_containing(now: NaiveDateTime) -> WeekRange {
    let from = now + Duration::days(days_to_monday(now.date()));
    WeekRange {
        from,
        to: from + Duration::days(6),
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn days_to_monday(date: NaiveDate) -> i64 {
    match date.weekday().num_days_from_sunday() {
        0 => -6,
        dow => 1 - i64::from(dow),
    }
}
