// Property-based tests for the month grid builder

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use property_portal::models::calendar_day::{CalendarDay, DisplayedMonth};
use property_portal::services::calendar::{
    build_month_grid, days_in_month, leading_offset, shift_month, GRID_CELLS,
};
use test_case::test_case;

proptest! {
    /// Property: every grid has exactly 42 cells
    #[test]
    fn prop_grid_always_has_42_cells(year in 1600..2600i32, month0 in 0..12u32) {
        prop_assert_eq!(build_month_grid(year, month0).len(), GRID_CELLS);
    }

    /// Property: in-month cells match the month's length
    #[test]
    fn prop_in_month_count_matches_month_length(year in 1600..2600i32, month0 in 0..12u32) {
        let grid = build_month_grid(year, month0);
        let in_month = grid.iter().filter(|d| d.in_displayed_month).count();
        prop_assert_eq!(in_month as u32, days_in_month(year, month0));
    }

    /// Property: the leading run is (sunday-based weekday + 6) % 7 long
    #[test]
    fn prop_leading_run_is_monday_first_offset(year in 1600..2600i32, month0 in 0..12u32) {
        let grid = build_month_grid(year, month0);
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let expected = (first.weekday().num_days_from_sunday() + 6) % 7;

        let leading = grid.iter().take_while(|d| !d.in_displayed_month).count();
        prop_assert_eq!(leading as u32, expected);
        prop_assert_eq!(leading_offset(year, month0), expected);
    }

    /// Property: cells are consecutive days, and membership is one contiguous run
    #[test]
    fn prop_cells_are_consecutive_days(year in 1600..2600i32, month0 in 0..12u32) {
        let grid = build_month_grid(year, month0);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }

        let displayed = DisplayedMonth::new(year, month0).unwrap();
        for day in &grid {
            prop_assert_eq!(day.in_displayed_month, displayed.contains(day.date));
            prop_assert_eq!(day.day_number, day.date.day());
        }

        let transitions = grid
            .windows(2)
            .filter(|pair| pair[0].in_displayed_month != pair[1].in_displayed_month)
            .count();
        prop_assert!(transitions <= 2);
    }

    /// Property: twelve single-month steps equal one year
    #[test]
    fn prop_twelve_steps_forward_is_one_year(year in 1600..2600i32, month0 in 0..12u32, day in 1..=28u32) {
        let start = NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap();
        let mut anchor = start;
        for _ in 0..12 {
            anchor = shift_month(anchor, 1);
            prop_assert_eq!(anchor.day(), 1);
        }
        prop_assert_eq!(anchor, NaiveDate::from_ymd_opt(year + 1, month0 + 1, 1).unwrap());
    }

    /// Property: forward then back returns to day 1 of the start month
    #[test]
    fn prop_shift_round_trip(year in 1600..2600i32, month0 in 0..12u32, delta in -240..240i32) {
        let start = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        prop_assert_eq!(shift_month(shift_month(start, delta), -delta), start);
    }
}

#[test]
fn test_march_2025_twelve_months_later_has_same_shape() {
    let mut month = DisplayedMonth::new(2025, 2).unwrap();
    for _ in 0..12 {
        month = month.shifted(1);
    }
    assert_eq!(month, DisplayedMonth::new(2026, 2).unwrap());

    let before = build_month_grid(2025, 2);
    let after = build_month_grid(month.year(), month.month0());
    assert_eq!(before.len(), after.len());

    let in_month = |grid: &[CalendarDay]| grid.iter().filter(|d| d.in_displayed_month).count();
    assert_eq!(in_month(&before), 31);
    assert_eq!(in_month(&after), 31);
    // Weekday alignment moves with the year
    assert_eq!(leading_offset(2025, 2), 5);
    assert_eq!(leading_offset(2026, 2), 6);
}

#[test_case(2023, 1, 28 ; "february 2023")]
#[test_case(2024, 1, 29 ; "february 2024")]
#[test_case(2025, 3, 30 ; "april 2025")]
#[test_case(2025, 0, 31 ; "january 2025")]
fn test_in_month_cells(year: i32, month0: u32, expected: usize) {
    let grid = build_month_grid(year, month0);
    assert_eq!(grid.iter().filter(|d| d.in_displayed_month).count(), expected);
}
