//! egui rendering of the move-out modal.

use super::state::{MoveOutHandler, MoveOutModalState, PickerList};
use crate::models::calendar_day::MONTH_NAMES;
use chrono::NaiveDate;
use egui::{Align, RichText};

const DAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// What happened in the modal this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutAction {
    None,
    /// The date was handed to the handler and the modal closed
    MovedOut(NaiveDate),
    Cancelled,
}

/// Render the move-out modal if it is open
pub fn render_move_out_modal<H: MoveOutHandler + ?Sized>(
    ctx: &egui::Context,
    state: &mut MoveOutModalState,
    handler: &mut H,
) -> MoveOutAction {
    if !state.is_open() {
        return MoveOutAction::None;
    }

    let mut action = MoveOutAction::None;
    let mut window_open = true;

    egui::Window::new("Select move-out date")
        .collapsible(false)
        .resizable(false)
        .auto_sized()
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut window_open)
        .show(ctx, |ui| {
            render_header(ui, state);

            match state.open_list() {
                Some(PickerList::Month) => render_month_list(ui, state),
                Some(PickerList::Year) => render_year_list(ui, state),
                None => render_grid(ui, state),
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.cancel();
                    action = MoveOutAction::Cancelled;
                }

                let confirm = ui.add_enabled(state.can_confirm(), egui::Button::new("Move out"));
                if confirm.clicked() {
                    if let Some(date) = state.selected_date() {
                        if state.confirm(handler) {
                            action = MoveOutAction::MovedOut(date);
                        }
                    }
                }
            });
        });

    if !window_open && state.is_open() {
        state.cancel();
        action = MoveOutAction::Cancelled;
    }

    action
}

/// Month/year dropdown toggles between previous/next arrows
fn render_header(ui: &mut egui::Ui, state: &mut MoveOutModalState) {
    let displayed = state.displayed_month();

    ui.horizontal(|ui| {
        if ui.small_button("◀").on_hover_text("Previous month").clicked() {
            state.previous_month();
        }

        let month_open = state.open_list() == Some(PickerList::Month);
        if ui.selectable_label(month_open, displayed.month_name()).clicked() {
            state.toggle_month_list();
        }

        let year_open = state.open_list() == Some(PickerList::Year);
        if ui
            .selectable_label(year_open, displayed.year().to_string())
            .clicked()
        {
            state.toggle_year_list();
        }

        if ui.small_button("▶").on_hover_text("Next month").clicked() {
            state.next_month();
        }
    });
}

fn render_grid(ui: &mut egui::Ui, state: &mut MoveOutModalState) {
    let cells = state.grid().to_vec();

    egui::Grid::new("move_out_grid")
        .num_columns(7)
        .spacing([4.0, 2.0])
        .min_col_width(28.0)
        .show(ui, |ui| {
            for name in &DAY_NAMES {
                ui.label(RichText::new(*name).small().strong());
            }
            ui.end_row();

            for week in cells.chunks(7) {
                for day in week {
                    let label = day.day_number.to_string();
                    let text = if day.in_displayed_month {
                        RichText::new(label)
                    } else {
                        RichText::new(label).weak()
                    };

                    if ui.selectable_label(state.is_selected(day), text).clicked() {
                        state.select_day(day);
                    }
                }
                ui.end_row();
            }
        });
}

fn render_month_list(ui: &mut egui::Ui, state: &mut MoveOutModalState) {
    let target = state.take_scroll_target();
    let current = state.displayed_month().month0() as usize;

    egui::ScrollArea::vertical()
        .max_height(180.0)
        .show(ui, |ui| {
            for (index, name) in MONTH_NAMES.iter().enumerate() {
                let response = ui.selectable_label(index == current, *name);
                if target == Some(index) {
                    response.scroll_to_me(Some(Align::Center));
                }
                if response.clicked() {
                    state.choose_month(index as u32);
                }
            }
        });
}

fn render_year_list(ui: &mut egui::Ui, state: &mut MoveOutModalState) {
    let target = state.take_scroll_target();
    let current = state.displayed_month().year();

    egui::ScrollArea::vertical()
        .max_height(180.0)
        .show(ui, |ui| {
            for (index, year) in state.year_options().into_iter().enumerate() {
                let response = ui.selectable_label(year == current, year.to_string());
                if target == Some(index) {
                    response.scroll_to_me(Some(Align::Center));
                }
                if response.clicked() {
                    state.choose_year(year);
                }
            }
        });
}
