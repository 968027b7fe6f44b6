//! Local state of the move-out date picker.
//!
//! Everything the modal shows (displayed month, selection, which dropdown is
//! open) lives here so it can be driven and tested without a UI context.

use crate::models::calendar_day::{CalendarDay, DisplayedMonth};
use crate::models::settings::Settings;
use crate::services::calendar::build_month_grid;
use chrono::{Datelike, NaiveDate};

/// Receives the confirmed move-out date
pub trait MoveOutHandler {
    fn on_move_out(&mut self, date: NaiveDate);
}

/// Dropdowns in the modal header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerList {
    Month,
    Year,
}

pub struct MoveOutModalState {
    is_open: bool,
    displayed: DisplayedMonth,
    selected: Option<NaiveDate>,
    open_list: Option<PickerList>,
    /// Row to bring into view the first time an opened list is laid out
    scroll_target: Option<usize>,
    /// Year the modal was opened in; the year list is centered on it
    anchor_year: i32,
    years_before: u16,
    years_after: u16,
    grid: Vec<CalendarDay>,
}

impl MoveOutModalState {
    /// A closed modal showing the month of `today`
    pub fn new(today: NaiveDate, settings: &Settings) -> Self {
        let displayed = DisplayedMonth::containing(today);
        Self {
            is_open: false,
            displayed,
            selected: None,
            open_list: None,
            scroll_target: None,
            anchor_year: displayed.year(),
            years_before: settings.picker_years_before,
            years_after: settings.picker_years_after,
            grid: build_month_grid(displayed.year(), displayed.month0()),
        }
    }

    pub fn open(&mut self, today: NaiveDate) {
        log::debug!("Opening move-out picker at {}", today);
        self.is_open = true;
        self.selected = None;
        self.close_list();
        self.anchor_year = today.year();
        self.set_displayed(DisplayedMonth::containing(today));
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The 42 cells of the displayed month
    pub fn grid(&self) -> &[CalendarDay] {
        &self.grid
    }

    /// Calendar-day match against the current selection
    pub fn is_selected(&self, day: &CalendarDay) -> bool {
        self.selected == Some(day.date)
    }

    pub fn previous_month(&mut self) {
        self.set_displayed(self.displayed.shifted(-1));
    }

    pub fn next_month(&mut self) {
        self.set_displayed(self.displayed.shifted(1));
    }

    /// Select the cell's date; a cell from an adjacent month also
    /// brings that month into view.
    pub fn select_day(&mut self, day: &CalendarDay) {
        self.selected = Some(day.date);
        if !self.displayed.contains(day.date) {
            self.set_displayed(DisplayedMonth::containing(day.date));
        }
    }

    pub fn open_list(&self) -> Option<PickerList> {
        self.open_list
    }

    pub fn toggle_month_list(&mut self) {
        self.toggle_list(PickerList::Month);
    }

    pub fn toggle_year_list(&mut self) {
        self.toggle_list(PickerList::Year);
    }

    /// Hand out the pending scroll row once
    pub fn take_scroll_target(&mut self) -> Option<usize> {
        self.scroll_target.take()
    }

    /// Jump to `month0` of the displayed year
    pub fn choose_month(&mut self, month0: u32) {
        match DisplayedMonth::new(self.displayed.year(), month0) {
            Some(month) => self.set_displayed(month),
            None => log::warn!("Ignoring out-of-range month {}", month0),
        }
        self.close_list();
    }

    /// Jump to the displayed month of `year`
    pub fn choose_year(&mut self, year: i32) {
        match DisplayedMonth::new(year, self.displayed.month0()) {
            Some(month) => self.set_displayed(month),
            None => log::warn!("Ignoring out-of-range year {}", year),
        }
        self.close_list();
    }

    /// Years offered by the year list, always including the displayed year
    pub fn year_options(&self) -> Vec<i32> {
        let first = (self.anchor_year - i32::from(self.years_before)).min(self.displayed.year());
        let last = (self.anchor_year + i32::from(self.years_after)).max(self.displayed.year());
        (first..=last).collect()
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// Report the selected date to `handler` and close. Does nothing
    /// without a selection or once the modal is closed.
    pub fn confirm<H: MoveOutHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        let Some(date) = self.selected.filter(|_| self.is_open) else {
            return false;
        };
        log::debug!("Move-out confirmed for {}", date);
        handler.on_move_out(date);
        self.close();
        true
    }

    /// Close without reporting a date
    pub fn cancel(&mut self) {
        log::debug!("Move-out picker cancelled");
        self.close();
    }

    fn close(&mut self) {
        self.is_open = false;
        self.close_list();
    }

    fn close_list(&mut self) {
        self.open_list = None;
        self.scroll_target = None;
    }

    fn toggle_list(&mut self, list: PickerList) {
        if self.open_list == Some(list) {
            self.close_list();
            return;
        }

        self.open_list = Some(list);
        self.scroll_target = match list {
            PickerList::Month => Some(self.displayed.month0() as usize),
            PickerList::Year => {
                let year = self.displayed.year();
                self.year_options().iter().position(|&y| y == year)
            }
        };
    }

    fn set_displayed(&mut self, month: DisplayedMonth) {
        if month != self.displayed || self.grid.is_empty() {
            log::debug!("Move-out picker showing {}", month.label());
            self.displayed = month;
            self.grid = build_month_grid(month.year(), month.month0());
        }
    }
}
