use super::{PortalApp, ScheduledMoveOut};
use crate::models::ledger::Ledger;
use crate::models::settings::Settings;
use crate::ui_egui::move_out::{render_move_out_modal, MoveOutAction, MoveOutModalState};
use crate::utils::date::today;

impl PortalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings, ledger: Ledger) -> Self {
        log::info!(
            "Loaded ledger for {} with {} transactions",
            ledger.property,
            ledger.transactions.len()
        );

        Self {
            move_out: MoveOutModalState::new(today(), settings),
            ledger,
            scheduled: ScheduledMoveOut::default(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_ledger(ui);
        });

        match render_move_out_modal(ctx, &mut self.move_out, &mut self.scheduled) {
            MoveOutAction::MovedOut(date) => log::debug!("Move-out modal closed with {}", date),
            MoveOutAction::Cancelled => log::debug!("Move-out modal dismissed"),
            MoveOutAction::None => {}
        }
    }

    pub(super) fn open_move_out(&mut self) {
        self.move_out.open(today());
    }
}
