mod ledger_view;
mod lifecycle;

use crate::models::ledger::Ledger;
use crate::ui_egui::move_out::{MoveOutHandler, MoveOutModalState};
use chrono::NaiveDate;

/// Receives the date confirmed in the move-out modal
#[derive(Debug, Default)]
pub struct ScheduledMoveOut {
    pub date: Option<NaiveDate>,
}

impl MoveOutHandler for ScheduledMoveOut {
    fn on_move_out(&mut self, date: NaiveDate) {
        log::info!("Move-out scheduled for {}", date);
        self.date = Some(date);
    }
}

pub struct PortalApp {
    ledger: Ledger,
    move_out: MoveOutModalState,
    scheduled: ScheduledMoveOut,
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
