//! Rent ledger screen: summary figures plus the move-out entry point.

use super::PortalApp;
use crate::models::ledger::format_cents;
use egui::RichText;

impl PortalApp {
    pub(super) fn render_ledger(&mut self, ui: &mut egui::Ui) {
        let summary = self.ledger.summary();

        ui.heading(&self.ledger.property);
        ui.label(format!("Tenant: {}", self.ledger.tenant));
        ui.separator();

        egui::Grid::new("ledger_summary")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("Charged");
                ui.label(format_cents(summary.total_charged));
                ui.end_row();

                ui.label("Paid");
                ui.label(format_cents(summary.total_paid));
                ui.end_row();

                ui.label("Credits");
                ui.label(format_cents(summary.total_credits));
                ui.end_row();

                ui.label(RichText::new("Balance due").strong());
                ui.label(RichText::new(format_cents(summary.balance_due)).strong());
                ui.end_row();
            });

        ui.separator();

        if let Some(date) = self.scheduled.date {
            ui.label(format!("Move-out scheduled for {}", date.format("%B %-d, %Y")));
        }

        ui.horizontal(|ui| {
            if ui.button("Share").clicked() {
                self.ledger.share();
            }
            if ui.button("Move out").clicked() {
                self.open_move_out();
            }
        });
    }
}
