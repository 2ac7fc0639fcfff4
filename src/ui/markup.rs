// src/ui/markup.rs
use eframe::egui;
use egui::text::LayoutJob;

use crate::format::{format_inline, Inline};

pub fn formatted_job(ui: &egui::Ui, text: &str) -> LayoutJob {
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let normal = ui.visuals().text_color();
    let strong = ui.visuals().strong_text_color();

    let mut job = LayoutJob::default();
    for span in format_inline(text) {
        match span {
            Inline::LineBreak => job.append(
                "\n",
                0.0,
                egui::TextFormat {
                    font_id: font_id.clone(),
                    color: normal,
                    ..Default::default()
                },
            ),
            Inline::Text {
                text,
                strong: is_strong,
                emphasis,
            } => job.append(
                &text,
                0.0,
                egui::TextFormat {
                    font_id: font_id.clone(),
                    color: if is_strong { strong } else { normal },
                    italics: emphasis,
                    ..Default::default()
                },
            ),
        }
    }
    job.wrap.max_width = ui.available_width();
    job
}

pub fn show_formatted(ui: &mut egui::Ui, text: &str) {
    let job = formatted_job(ui, text);
    ui.label(job);
}
