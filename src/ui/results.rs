// src/ui/results.rs
use eframe::egui;

use super::markup::show_formatted;
use super::ViewAction;
use crate::analysis::{AgentCard, AnalysisOutcome};

const ACCENT_WIDTH: f32 = 4.0;

pub fn show_results(ui: &mut egui::Ui, outcome: &AnalysisOutcome, summary_chars: usize) -> Option<ViewAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("⬅ New Analysis").clicked() {
            action = Some(ViewAction::NewAnalysis);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("💾 Save Report...").clicked() {
                action = Some(ViewAction::SaveReport);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Header & case summary
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.heading("AI Agent Analysis Complete");
                    ui.label("Our specialized AI agents have analyzed your case from multiple perspectives");
                });
                ui.add_space(8.0);
                ui.small("CASE SUMMARY");
                ui.strong("Commercial Arbitration Case Analysis");
                ui.label(outcome.report.summary(summary_chars));
            });
            ui.add_space(12.0);

            ui.columns(2, |columns| {
                for (idx, card) in outcome.cards.iter().enumerate() {
                    let column = &mut columns[idx % 2];
                    show_agent_card(column, card);
                    column.add_space(12.0);
                }
            });

            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.heading("Final case report");
                ui.add_space(4.0);
                ui.label(&outcome.report.final_report);
            });
        });

    action
}

fn show_agent_card(ui: &mut egui::Ui, card: &AgentCard) {
    let [r, g, b] = card.agent.accent;
    let accent = egui::Color32::from_rgb(r, g, b);

    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin {
            left: 12.0 + ACCENT_WIDTH,
            right: 8.0,
            top: 8.0,
            bottom: 8.0,
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(card.agent.name);
            ui.small(card.agent.role);
            ui.add_space(8.0);

            match &card.analysis {
                Some(analysis) => {
                    ui.small("THOUGHT PROCESS");
                    if analysis.thought.trim().is_empty() {
                        ui.weak("No thought process provided");
                    } else {
                        ui.label(egui::RichText::new(&analysis.thought).italics());
                    }
                    ui.add_space(8.0);

                    ui.small("ANALYSIS OUTPUT");
                    show_formatted(ui, &analysis.output);
                }
                None => {
                    ui.weak("No analysis returned for this agent");
                }
            }
        })
        .response;

    let rect = response.rect;
    ui.painter().rect_filled(
        egui::Rect::from_min_max(rect.left_top(), egui::pos2(rect.left() + ACCENT_WIDTH, rect.bottom())),
        2.0,
        accent,
    );
}
