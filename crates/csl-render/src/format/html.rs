//! HTML output using inline-styled spans.

use super::{Format, RenderOptions, spans};
use crate::token::{DisplayGroupToken, Token};
use csl_model::{ChannelValue, FontWeight, VerticalAlign};

pub(crate) struct HtmlFormat;

/// Escape text for HTML content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// The CSS declaration for a channel value.
pub(crate) fn css(value: ChannelValue) -> String {
    match value {
        ChannelValue::FontStyle(v) => format!("font-style: {}", v.as_str()),
        ChannelValue::FontWeight(v) => {
            let weight = match v {
                FontWeight::Light => "100",
                _ => v.as_str(),
            };
            format!("font-weight: {}", weight)
        }
        ChannelValue::FontVariant(v) => format!("font-variant: {}", v.as_str()),
        ChannelValue::TextDecoration(v) => format!("text-decoration: {}", v.as_str()),
        ChannelValue::VerticalAlign(v) => {
            let align = match v {
                VerticalAlign::Sup => "super",
                VerticalAlign::Sub => "sub",
                VerticalAlign::Baseline => "baseline",
            };
            format!("vertical-align: {}", align)
        }
    }
}

pub(crate) fn span_open(value: ChannelValue) -> String {
    format!("<span style=\"{}\">", css(value))
}

impl Format for HtmlFormat {
    fn open_span(&self, value: ChannelValue) -> Option<String> {
        Some(span_open(value))
    }

    fn close_span(&self, _value: ChannelValue) -> Option<String> {
        Some("</span>".to_string())
    }

    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }

    fn link(&self, label: &str, target: &str) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            escape_html(target),
            escape_html(label)
        )
    }

    fn display_group(&self, group: &DisplayGroupToken, _at_start: bool) -> String {
        if group.open {
            format!("<div class=\"{}\">", group.kind.css_class())
        } else {
            "</div>".to_string()
        }
    }

    fn bibliography_entry(&self, tokens: &[Token], options: &RenderOptions) -> String {
        let body = if options.second_field_align && !tokens.is_empty() {
            let split = tokens
                .iter()
                .position(|t| !t.first_field())
                .unwrap_or(tokens.len());
            format!(
                "\n    <div class=\"csl-left-margin\">{}</div><div class=\"csl-right-inline\">{}</div>\n  ",
                spans::write_tokens(self, &tokens[..split], options),
                spans::write_tokens(self, &tokens[split..], options)
            )
        } else {
            spans::write_tokens(self, tokens, options)
        };
        format!("  <div class=\"csl-entry\">{}</div>\n", body)
    }

    fn bibliography_markup(&self) -> (&'static str, &'static str) {
        ("<div class=\"csl-bib-body\">\n", "</div>")
    }
}
