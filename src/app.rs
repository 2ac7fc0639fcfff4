// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;

use crate::config::UiSettings;
use crate::file::{FileHandler, ReportFileHandler};
use crate::state::{AnalysisController, ViewState};
use crate::ui::{case_form, dialog, results, ViewAction};

pub struct ArbitrationApp {
    controller: AnalysisController,
    report_handler: ReportFileHandler,
    summary_chars: usize,
    error_message: Option<String>,
}

impl ArbitrationApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: AnalysisController, ui_settings: &UiSettings) -> Self {
        // Settled requests wake the UI without waiting for input
        let ctx = cc.egui_ctx.clone();
        let controller = controller.with_repaint_hook(Arc::new(move || ctx.request_repaint()));

        Self {
            controller,
            report_handler: ReportFileHandler::new(ui_settings.summary_chars),
            summary_chars: ui_settings.summary_chars,
            error_message: None,
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) -> Option<ViewAction> {
        let mut action = None;
        let has_results = matches!(self.controller.view(), ViewState::Results(_));

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Analysis").clicked() {
                    action = Some(ViewAction::NewAnalysis);
                    ui.close_menu();
                }
                if ui
                    .add_enabled(has_results, egui::Button::new("Save Report..."))
                    .clicked()
                {
                    action = Some(ViewAction::SaveReport);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });

        action
    }

    fn handle_action(&mut self, action: ViewAction) {
        tracing::debug!(?action, view = self.controller.view().name(), "Handling view action");
        match action {
            ViewAction::Submit => {
                // Rejections are surfaced through the controller's notice
                let _ = self.controller.submit();
            }
            ViewAction::Cancel => self.controller.cancel(),
            ViewAction::NewAnalysis => self.controller.reset(),
            ViewAction::TryAgain => self.controller.dismiss_failure(),
            ViewAction::Retry => {
                let _ = self.controller.retry();
            }
            ViewAction::SaveReport => self.save_report(),
        }
    }

    fn save_report(&mut self) {
        let ViewState::Results(outcome) = self.controller.view() else {
            return;
        };

        let file_dialog = FileDialog::new()
            .add_filter("HTML files", &["html"])
            .set_title("Save Report As")
            .set_file_name("case-analysis.html");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = self.report_handler.save(outcome, &path) {
                tracing::error!(error = %e, "Failed to save report");
                self.error_message = Some(format!("{:#}", e));
            }
        }
    }
}

impl eframe::App for ArbitrationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();

        let mut action = egui::TopBottomPanel::top("top_panel")
            .show(ctx, |ui| self.show_menu(ui))
            .inner;

        let view_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                match self.controller.view() {
                    ViewState::Results(outcome) => {
                        return results::show_results(ui, outcome, self.summary_chars);
                    }
                    ViewState::Failed(error) => return dialog::show_failure(ui, error),
                    ViewState::Input | ViewState::Loading => {}
                }
                case_form::show_case_form(ui, &mut self.controller)
            })
            .inner;
        action = action.or(view_action);

        if self.controller.is_loading() {
            action = action.or(dialog::show_loading_overlay(ctx));
        }

        // Validation notice blocks until acknowledged
        if let Some(notice) = self.controller.notice().map(str::to_owned) {
            if dialog::show_notice(ctx, "Missing Information", &notice) {
                self.controller.dismiss_notice();
            }
        }

        let error_msg = self.error_message.clone();
        if let Some(error) = error_msg {
            if dialog::show_notice(ctx, "Error", &error) {
                self.error_message = None;
            }
        }

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
