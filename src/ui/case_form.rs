// src/ui/case_form.rs
use eframe::egui;

use super::ViewAction;
use crate::state::AnalysisController;

pub fn show_case_form(ui: &mut egui::Ui, controller: &mut AnalysisController) -> Option<ViewAction> {
    let mut action = None;
    let enabled = controller.can_submit();
    let input = controller.input_mut();

    egui::ScrollArea::vertical()
        .id_source("case_form_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(720.0);
                ui.add_space(24.0);

                ui.label(egui::RichText::new("⚖").size(40.0));
                ui.heading("Sigma Tech AI Assistant");
                ui.label(
                    "Provide your case details below and our AI agents will analyze \
                     your arbitration scenario from multiple perspectives",
                );
                ui.add_space(16.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());

                    ui.strong("Case Scenario & Background");
                    ui.add_enabled(
                        enabled,
                        egui::TextEdit::multiline(&mut input.scenario)
                            .desired_rows(6)
                            .desired_width(f32::INFINITY)
                            .hint_text(
                                "Describe the dispute, key events, timeline, parties involved, \
                                 and any relevant contract terms or agreements...",
                            ),
                    );
                    ui.add_space(12.0);

                    ui.strong("Specific Question or Analysis Request");
                    ui.add_enabled(
                        enabled,
                        egui::TextEdit::multiline(&mut input.question)
                            .desired_rows(6)
                            .desired_width(f32::INFINITY)
                            .hint_text(
                                "What specific analysis do you need? e.g., 'Assess the strength \
                                 of our breach of contract claim and potential damages'",
                            ),
                    );
                    ui.add_space(12.0);

                    let button = egui::Button::new("🧠 Analyze Case with AI Agents")
                        .min_size(egui::vec2(ui.available_width(), 36.0));
                    if ui.add_enabled(enabled, button).clicked() {
                        action = Some(ViewAction::Submit);
                    }
                });
            });
        });

    action
}
