//! Month grid arithmetic for the move-out date picker.
//!
//! The grid is always six Monday-first weeks: the tail of the previous month,
//! every day of the displayed month, then the head of the next month.

use crate::models::calendar_day::CalendarDay;
use chrono::{Datelike, Days, NaiveDate};

/// Number of cells in a month grid (6 weeks x 7 days)
pub const GRID_CELLS: usize = 42;

/// Day 1 of the given month.
///
/// # Panics
/// Panics if `month0` is not in `0..12`. Months come from a bounded picker,
/// so an out-of-range value is a caller bug.
pub fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .unwrap_or_else(|| panic!("month0 out of range: {year}-{month0}"))
}

/// Number of days in a month (`month0` is 0-based), taken as "day 0 of next month".
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Leading cells before day 1 with the week starting on Monday
/// (Monday -> 0, Sunday -> 6).
pub fn leading_offset(year: i32, month0: u32) -> u32 {
    let sunday_based = first_of_month(year, month0).weekday().num_days_from_sunday();
    (sunday_based + 6) % 7
}

/// Build the 42-cell grid for `year`/`month0`.
///
/// # Panics
/// Panics if `month0` is not in `0..12`.
pub fn build_month_grid(year: i32, month0: u32) -> Vec<CalendarDay> {
    let first = first_of_month(year, month0);
    let offset = leading_offset(year, month0);
    let month_len = days_in_month(year, month0);

    let mut grid = Vec::with_capacity(GRID_CELLS);

    // Tail of the previous month, walking back from day 1
    grid.extend(
        (1..=offset)
            .rev()
            .filter_map(|back| first.checked_sub_days(Days::new(u64::from(back))))
            .map(|date| CalendarDay::new(date, false)),
    );

    grid.extend(
        first
            .iter_days()
            .take(month_len as usize)
            .map(|date| CalendarDay::new(date, true)),
    );

    // Head of the next month fills the remaining cells
    let remaining = GRID_CELLS.saturating_sub(grid.len());
    if let Some(next_first) = first.checked_add_days(Days::new(u64::from(month_len))) {
        grid.extend(
            next_first
                .iter_days()
                .take(remaining)
                .map(|date| CalendarDay::new(date, false)),
        );
    }

    grid
}

/// Move `anchor` by `delta` months and return day 1 of the resulting month.
pub fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = anchor.year() * 12 + anchor.month0() as i32 + delta;
    let new_year = total_months.div_euclid(12);
    let new_month0 = total_months.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(new_year, new_month0 + 1, 1).unwrap_or(anchor)
}
