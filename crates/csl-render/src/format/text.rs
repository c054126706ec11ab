//! Plain text output. Formatting channels produce no markup.

use super::{Format, RenderOptions, write_entry_with_suffix};
use crate::token::{DisplayGroupToken, DisplayKind, Token};
use csl_model::ChannelValue;

pub(crate) struct TextFormat;

impl Format for TextFormat {
    fn open_span(&self, _value: ChannelValue) -> Option<String> {
        None
    }

    fn close_span(&self, _value: ChannelValue) -> Option<String> {
        None
    }

    fn escape(&self, text: &str) -> String {
        text.to_string()
    }

    fn link(&self, label: &str, _target: &str) -> String {
        label.to_string()
    }

    fn display_group(&self, group: &DisplayGroupToken, at_start: bool) -> String {
        if group.open && group.kind == DisplayKind::Block && !at_start {
            "\n".to_string()
        } else {
            String::new()
        }
    }

    fn bibliography_entry(&self, tokens: &[Token], options: &RenderOptions) -> String {
        write_entry_with_suffix(self, tokens, options, "\n")
    }
}
