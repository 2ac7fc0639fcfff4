// src/format/inline.rs
use regex::{Captures, Regex};
use std::sync::OnceLock;

// Private-use code points mark span boundaries between the rewrite passes.
// They are stripped from the input first so text can never forge them.
const STRONG_OPEN: char = '\u{E000}';
const STRONG_CLOSE: char = '\u{E001}';
const EM_OPEN: char = '\u{E002}';
const EM_CLOSE: char = '\u{E003}';

/// A styled run of analysis text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text {
        text: String,
        strong: bool,
        emphasis: bool,
    },
    LineBreak,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            strong: false,
            emphasis: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            strong: true,
            emphasis: false,
        }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            strong: false,
            emphasis: true,
        }
    }
}

fn strong_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*([^\n\r\u{2028}\u{2029}]*?)\*\*").expect("static pattern"))
}

fn emphasis_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*([^\n\r\u{2028}\u{2029}]*?)\*").expect("static pattern"))
}

fn is_marker(c: char) -> bool {
    matches!(c, STRONG_OPEN | STRONG_CLOSE | EM_OPEN | EM_CLOSE)
}

/// Splits analysis text into styled spans.
///
/// Rules run in order over the whole string: `**X**` becomes strong,
/// then any remaining `*X*` becomes emphasis, then each `\n` becomes a
/// line break. Matching is non-greedy and never crosses a line
/// terminator (`\n`, `\r`, U+2028, U+2029);
/// unpaired asterisks stay literal. Total for every input.
pub fn format_inline(text: &str) -> Vec<Inline> {
    let cleaned: String = text.chars().filter(|c| !is_marker(*c)).collect();

    let marked = strong_pattern().replace_all(&cleaned, |caps: &Captures| {
        format!("{}{}{}", STRONG_OPEN, &caps[1], STRONG_CLOSE)
    });
    let marked = emphasis_pattern().replace_all(&marked, |caps: &Captures| {
        format!("{}{}{}", EM_OPEN, &caps[1], EM_CLOSE)
    });

    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut strong = false;
    let mut emphasis = false;

    for c in marked.chars() {
        if !is_marker(c) && c != '\n' {
            buf.push(c);
            continue;
        }
        if !buf.is_empty() {
            spans.push(Inline::Text {
                text: std::mem::take(&mut buf),
                strong,
                emphasis,
            });
        }
        match c {
            STRONG_OPEN => strong = true,
            STRONG_CLOSE => strong = false,
            EM_OPEN => emphasis = true,
            EM_CLOSE => emphasis = false,
            _ => spans.push(Inline::LineBreak),
        }
    }
    if !buf.is_empty() {
        spans.push(Inline::Text {
            text: buf,
            strong,
            emphasis,
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_italic_and_breaks() {
        assert_eq!(
            format_inline("**a** and *b*\nc"),
            vec![
                Inline::strong("a"),
                Inline::plain(" and "),
                Inline::emphasis("b"),
                Inline::LineBreak,
                Inline::plain("c"),
            ]
        );
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(format_inline("").is_empty());
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(format_inline("2 * 3 = 6"), vec![Inline::plain("2 * 3 = 6")]);
        assert_eq!(
            format_inline("*open\nclose*"),
            vec![
                Inline::plain("*open"),
                Inline::LineBreak,
                Inline::plain("close*"),
            ]
        );
    }

    #[test]
    fn markers_do_not_span_line_terminators() {
        assert_eq!(format_inline("*a\rb*"), vec![Inline::plain("*a\rb*")]);
        assert_eq!(
            format_inline("*a\u{2028}b* **c**"),
            vec![Inline::plain("*a\u{2028}b* "), Inline::strong("c")]
        );
    }

    #[test]
    fn emphasis_inside_strong() {
        assert_eq!(
            format_inline("**a *b* c**"),
            vec![
                Inline::strong("a "),
                Inline::Text {
                    text: "b".into(),
                    strong: true,
                    emphasis: true,
                },
                Inline::strong(" c"),
            ]
        );
    }

    #[test]
    fn matching_is_non_greedy() {
        assert_eq!(
            format_inline("**x** y **z**"),
            vec![Inline::strong("x"), Inline::plain(" y "), Inline::strong("z")]
        );
    }

    #[test]
    fn marker_code_points_in_input_are_dropped() {
        assert_eq!(
            format_inline("a\u{E000}b\u{E001}"),
            vec![Inline::plain("ab")]
        );
    }

    #[test]
    fn bullet_list_from_service() {
        let spans = format_inline("**High Risk Issues:**\n• Delay in notice");
        assert_eq!(spans[0], Inline::strong("High Risk Issues:"));
        assert_eq!(spans[1], Inline::LineBreak);
        assert_eq!(spans[2], Inline::plain("• Delay in notice"));
    }
}
