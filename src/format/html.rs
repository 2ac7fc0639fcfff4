// src/format/html.rs
use super::inline::{format_inline, Inline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Strong,
    Em,
}

impl Tag {
    fn open(self) -> &'static str {
        match self {
            Tag::Strong => "<strong>",
            Tag::Em => "<em>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Tag::Strong => "</strong>",
            Tag::Em => "</em>",
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders spans as markup. Text is always escaped; the only tags ever
/// emitted are `<strong>`, `<em>` and `<br>`, properly nested.
pub fn to_html(spans: &[Inline]) -> String {
    let mut out = String::new();
    let mut open: Vec<Tag> = Vec::new();

    for span in spans {
        match span {
            Inline::LineBreak => {
                close_from(&mut out, &mut open, 0);
                out.push_str("<br>");
            }
            Inline::Text {
                text,
                strong,
                emphasis,
            } => {
                let wanted = |tag: &Tag| match tag {
                    Tag::Strong => *strong,
                    Tag::Em => *emphasis,
                };
                if let Some(idx) = open.iter().position(|t| !wanted(t)) {
                    close_from(&mut out, &mut open, idx);
                }
                for tag in [Tag::Strong, Tag::Em] {
                    if wanted(&tag) && !open.contains(&tag) {
                        out.push_str(tag.open());
                        open.push(tag);
                    }
                }
                out.push_str(&escape_html(text));
            }
        }
    }
    close_from(&mut out, &mut open, 0);

    out
}

fn close_from(out: &mut String, open: &mut Vec<Tag>, idx: usize) {
    while open.len() > idx {
        if let Some(tag) = open.pop() {
            out.push_str(tag.close());
        }
    }
}

pub fn format_inline_html(text: &str) -> String {
    to_html(&format_inline(text))
}
