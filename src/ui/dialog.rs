// src/ui/dialog.rs
use eframe::egui;

use super::ViewAction;
use crate::analysis::AnalysisError;

/// Centered spinner shown over the form while a request is in flight.
pub fn show_loading_overlay(ctx: &egui::Context) -> Option<ViewAction> {
    let mut action = None;

    egui::Window::new("loading_overlay")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 140.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.add(egui::Spinner::new().size(36.0));
                ui.add_space(8.0);
                ui.strong("AI Agents Analyzing Your Case");
                ui.label("This may take a few moments...");
                ui.add_space(8.0);
                if ui.button("Cancel").clicked() {
                    action = Some(ViewAction::Cancel);
                }
            });
        });

    action
}

/// Blocking message window. Returns true once dismissed.
pub fn show_notice(ctx: &egui::Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    dismissed
}

pub fn show_failure(ui: &mut egui::Ui, error: &AnalysisError) -> Option<ViewAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(560.0);
        ui.add_space(48.0);
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("⚠").size(32.0).color(egui::Color32::from_rgb(245, 158, 11)));
                ui.heading(error.title());
                ui.add_space(4.0);
                ui.label(error.to_string());
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Try Again").clicked() {
                        action = Some(ViewAction::TryAgain);
                    }
                    if ui.button("Retry Now").clicked() {
                        action = Some(ViewAction::Retry);
                    }
                });
            });
        });
    });

    action
}
