// Calendar day module
// Cells of the move-out month grid and the month they are displayed under

use chrono::{Datelike, NaiveDate};

/// Month names used for the month dropdown and header labels
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// One slot of the 42-cell month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day-of-month label (1-31)
    pub day_number: u32,
    /// True only for days inside the displayed year/month
    pub in_displayed_month: bool,
    /// The actual date this cell refers to (may be in an adjacent month)
    pub date: NaiveDate,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, in_displayed_month: bool) -> Self {
        Self {
            day_number: date.day(),
            in_displayed_month,
            date,
        }
    }
}

/// The (year, month) pair currently shown in the grid.
///
/// Months are 0-based (`0` = January) to match the picker's month list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayedMonth {
    year: i32,
    month0: u32,
}

impl DisplayedMonth {
    /// Checked constructor; `None` when `month0` is not in `0..12`
    /// or the year is outside chrono's supported range.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(Self::containing)
    }

    /// The month a given date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Day 1 of this month, used as the navigation anchor
    pub fn first_day(&self) -> NaiveDate {
        crate::services::calendar::first_of_month(self.year, self.month0)
    }

    /// This month moved by `delta` months, wrapping year boundaries
    pub fn shifted(&self, delta: i32) -> Self {
        Self::containing(crate::services::calendar::shift_month(self.first_day(), delta))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    /// Header label, e.g. "March 2025"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}
