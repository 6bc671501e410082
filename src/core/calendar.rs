use crate::domain::model::Birthday;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Any non-leap year works as long as every birthday shares it.
pub const REFERENCE_YEAR: i32 = 2001;

const YEAR_START: NaiveDate = match NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1) {
    Some(date) => date,
    None => panic!("reference year start is a valid date"),
};

impl Birthday {
    pub fn to_date(self) -> NaiveDate {
        YEAR_START + Days::new(u64::from(self.day_of_year()))
    }

    pub fn month(self) -> u32 {
        self.to_date().month()
    }

    pub fn day_of_month(self) -> u32 {
        self.to_date().day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_date().format("%b %-d"))
    }
}

pub fn format_group(group: &[Birthday]) -> String {
    group
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
