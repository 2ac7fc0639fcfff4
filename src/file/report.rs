// src/file/report.rs
use super::FileHandler;
use crate::analysis::AnalysisOutcome;
use crate::format::{escape_html, format_inline_html};
use anyhow::{Context, Result};
use chrono::prelude::*;
use std::fs;
use std::path::Path;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto;color:#1f2937}\
.card{border-left:4px solid;padding:0.5em 1em;margin:1em 0;background:#f9fafb}\
.role{color:#6b7280;font-size:0.85em}.thought{font-style:italic;color:#4b5563}\
.missing{color:#9ca3af}.literal{white-space:pre-wrap}footer{color:#9ca3af;font-size:0.8em}";

/// Writes a finished analysis as a standalone HTML page.
#[derive(Debug)]
pub struct ReportFileHandler {
    summary_chars: usize,
}

impl ReportFileHandler {
    pub fn new(summary_chars: usize) -> Self {
        Self { summary_chars }
    }

    pub fn render(&self, outcome: &AnalysisOutcome, generated: DateTime<Local>) -> String {
        let report = &outcome.report;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Case Analysis Report</title>\n");
        html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

        html.push_str("<h1>Commercial Arbitration Case Analysis</h1>\n");
        html.push_str(&format!(
            "<section>\n<h2>Case Summary</h2>\n<p>{}</p>\n<h2>Question</h2>\n<p>{}</p>\n</section>\n",
            escape_html(&report.summary(self.summary_chars)),
            escape_html(&report.user_prompt),
        ));

        html.push_str("<section>\n<h2>Agent Analysis</h2>\n");
        for card in &outcome.cards {
            let [r, g, b] = card.agent.accent;
            html.push_str(&format!(
                "<div class=\"card\" style=\"border-color:rgb({},{},{})\">\n<h3>{}</h3>\n<div class=\"role\">{}</div>\n",
                r,
                g,
                b,
                escape_html(card.agent.name),
                escape_html(card.agent.role),
            ));
            match &card.analysis {
                Some(analysis) => {
                    if !analysis.thought.is_empty() {
                        html.push_str(&format!(
                            "<p class=\"thought\">{}</p>\n",
                            format_inline_html(&analysis.thought)
                        ));
                    }
                    html.push_str(&format!("<p>{}</p>\n", format_inline_html(&analysis.output)));
                }
                None => html.push_str("<p class=\"missing\">No analysis returned for this agent.</p>\n"),
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");

        html.push_str(&format!(
            "<section>\n<h2>Final Case Report</h2>\n<p class=\"literal\">{}</p>\n</section>\n",
            escape_html(&report.final_report)
        ));
        html.push_str(&format!(
            "<footer>Generated {}</footer>\n</body>\n</html>\n",
            generated.format("%Y-%m-%d %H:%M:%S")
        ));

        html
    }
}

impl FileHandler<AnalysisOutcome> for ReportFileHandler {
    fn save(&self, data: &AnalysisOutcome, path: &Path) -> Result<()> {
        let content = self.render(data, Local::now());
        fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved analysis report");
        Ok(())
    }
}
