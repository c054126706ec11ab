//! The span-stack pass shared by all formats.
//!
//! Each token carries a full set of formatting channels. The writer keeps
//! a stack of the channel values currently open. Before a token is
//! written, the stack is cut back to the longest bottom run that the token
//! still agrees with, and the token's remaining channels are opened in
//! [`Channel::ORDER`]. Spans therefore always nest properly, and a channel
//! opened later never outlives one opened earlier.

use super::{Format, RenderOptions, doi_target};
use crate::token::{TextKind, TextToken, Token};
use csl_model::{Channel, ChannelValue, FormattingAttributes};

struct SpanWriter<'a> {
    format: &'a dyn Format,
    open: Vec<ChannelValue>,
    out: String,
}

impl<'a> SpanWriter<'a> {
    fn new(format: &'a dyn Format) -> Self {
        Self {
            format,
            open: Vec::new(),
            out: String::new(),
        }
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(value) = self.open.pop() {
                if let Some(markup) = self.format.close_span(value) {
                    self.out.push_str(&markup);
                }
            }
        }
    }

    fn adjust(&mut self, attrs: FormattingAttributes) {
        let keep = self
            .open
            .iter()
            .position(|value| attrs.get(value.channel()) != Some(*value))
            .unwrap_or(self.open.len());
        if keep < self.open.len() {
            tracing::trace!(
                closing = self.open.len() - keep,
                "formatting changed, closing spans"
            );
        }
        self.close_to(keep);

        for channel in Channel::ORDER {
            let Some(value) = attrs.get(channel) else {
                continue;
            };
            if self.open.iter().any(|v| v.channel() == channel) {
                continue;
            }
            if let Some(markup) = self.format.open_span(value) {
                self.out.push_str(&markup);
            }
            self.open.push(value);
        }
    }

    fn write_text(&mut self, token: &TextToken, options: &RenderOptions) {
        if token.content.is_empty() {
            return;
        }
        self.adjust(token.attrs);

        let text = match token.kind {
            TextKind::Url if options.convert_links => {
                self.format.link(&token.content, &token.content)
            }
            TextKind::Doi if options.convert_links => {
                self.format.link(&token.content, &doi_target(&token.content))
            }
            _ => self.format.escape(&token.content),
        };
        self.out.push_str(&text);
    }

    fn finish(mut self) -> String {
        self.close_to(0);
        self.out
    }
}

/// Write tokens in buffer order.
pub(crate) fn write_tokens(format: &dyn Format, tokens: &[Token], options: &RenderOptions) -> String {
    let mut writer = SpanWriter::new(format);
    for token in tokens {
        match token {
            Token::Text(text) => writer.write_text(text, options),
            Token::DisplayGroup(group) => {
                writer.close_to(0);
                let markup = format.display_group(group, writer.out.is_empty());
                writer.out.push_str(&markup);
            }
        }
    }
    writer.finish()
}
