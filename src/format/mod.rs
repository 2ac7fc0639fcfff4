// src/format/mod.rs
pub mod html;
pub mod inline;

pub use html::{escape_html, format_inline_html, to_html};
pub use inline::{format_inline, Inline};
