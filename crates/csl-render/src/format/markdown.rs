//! CommonMark output.
//!
//! Italic and bold use native emphasis markers. In the default flavour,
//! channels without native syntax fall back to inline HTML. The pure
//! flavour never emits HTML and drops those channels instead.

use super::html::span_open;
use super::{Format, RenderOptions, write_entry_with_suffix};
use crate::token::{DisplayGroupToken, DisplayKind, Token};
use csl_model::{ChannelValue, FontStyle, FontVariant, FontWeight, TextDecoration, VerticalAlign};

pub(crate) struct MarkdownFormat {
    pub(crate) pure: bool,
}

enum Markup {
    Native(&'static str),
    Html(&'static str, &'static str),
    Span,
}

impl MarkdownFormat {
    fn markup(&self, value: ChannelValue) -> Option<Markup> {
        use ChannelValue as V;

        match value {
            V::FontStyle(FontStyle::Italic) => Some(Markup::Native("*")),
            V::FontWeight(FontWeight::Bold) => Some(Markup::Native("**")),
            V::FontStyle(FontStyle::Oblique) if self.pure => Some(Markup::Native("*")),
            _ if self.pure => None,
            V::FontStyle(FontStyle::Oblique)
            | V::FontWeight(FontWeight::Light)
            | V::FontVariant(FontVariant::SmallCaps)
            | V::TextDecoration(TextDecoration::Underline) => Some(Markup::Span),
            V::VerticalAlign(VerticalAlign::Sup) => Some(Markup::Html("<sup>", "</sup>")),
            V::VerticalAlign(VerticalAlign::Sub) => Some(Markup::Html("<sub>", "</sub>")),
            // explicit resets have no markdown representation
            V::FontStyle(FontStyle::Normal)
            | V::FontWeight(FontWeight::Normal)
            | V::FontVariant(FontVariant::Normal)
            | V::TextDecoration(TextDecoration::None)
            | V::VerticalAlign(VerticalAlign::Baseline) => None,
        }
    }
}

/// Backslash-escape every ASCII punctuation character. CommonMark allows
/// any of them to be escaped, which also keeps entities like `&amp;` literal.
pub(crate) fn escape_markdown(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_punctuation() {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

impl Format for MarkdownFormat {
    fn open_span(&self, value: ChannelValue) -> Option<String> {
        match self.markup(value)? {
            Markup::Native(marker) => Some(marker.to_string()),
            Markup::Html(open, _) => Some(open.to_string()),
            Markup::Span => Some(span_open(value)),
        }
    }

    fn close_span(&self, value: ChannelValue) -> Option<String> {
        match self.markup(value)? {
            Markup::Native(marker) => Some(marker.to_string()),
            Markup::Html(_, close) => Some(close.to_string()),
            Markup::Span => Some("</span>".to_string()),
        }
    }

    fn escape(&self, text: &str) -> String {
        escape_markdown(text)
    }

    fn link(&self, label: &str, target: &str) -> String {
        let label = label.replace('[', "\\[").replace(']', "\\]");
        let target = target.replace('<', "\\<").replace('>', "\\>");
        format!("[{}](<{}>)", label, target)
    }

    fn display_group(&self, group: &DisplayGroupToken, _at_start: bool) -> String {
        if self.pure {
            match (group.open, group.kind) {
                (true, DisplayKind::Block | DisplayKind::Indent) => "\n".to_string(),
                _ => String::new(),
            }
        } else if group.open {
            format!("<div class=\"{}\">", group.kind.css_class())
        } else {
            "</div>".to_string()
        }
    }

    fn bibliography_entry(&self, tokens: &[Token], options: &RenderOptions) -> String {
        write_entry_with_suffix(self, tokens, options, "\n\n")
    }
}
