//! Output formats.
//!
//! Every format runs the same span-stack pass over a post-processed token
//! buffer (see [`spans`]). The formats differ only in how they spell an
//! opened or closed formatting channel, how they escape text, how they
//! write links and display groups, and how they wrap bibliography entries.

mod html;
mod markdown;
mod spans;
mod text;

use crate::buffer::TokenBuffer;
use crate::postprocess::post_process;
use crate::token::{DisplayGroupToken, Token};
use crate::Error;
use csl_model::{ChannelValue, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[serde(rename = "text")]
    PlainText,
    Html,
    /// CommonMark with inline HTML for channels that have no native syntax.
    Markdown,
    /// CommonMark without any inline HTML.
    MarkdownPure,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::PlainText => "text",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::MarkdownPure => "markdown-pure",
        }
    }

    fn formatter(self) -> &'static dyn Format {
        static TEXT: text::TextFormat = text::TextFormat;
        static HTML: html::HtmlFormat = html::HtmlFormat;
        static MARKDOWN: markdown::MarkdownFormat = markdown::MarkdownFormat { pure: false };
        static MARKDOWN_PURE: markdown::MarkdownFormat = markdown::MarkdownFormat { pure: true };

        match self {
            OutputFormat::PlainText => &TEXT,
            OutputFormat::Html => &HTML,
            OutputFormat::Markdown => &MARKDOWN,
            OutputFormat::MarkdownPure => &MARKDOWN_PURE,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::PlainText),
            "html" => Ok(OutputFormat::Html),
            "markdown" => Ok(OutputFormat::Markdown),
            "markdown-pure" => Ok(OutputFormat::MarkdownPure),
            other => Err(Error::UnknownOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options controlling a render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Render `Url` and `Doi` tokens as links.
    pub convert_links: bool,
    /// Move `.` and `,` that follow a closing quote inside it.
    pub punctuation_in_quote: bool,
    /// Split bibliography entries into a left margin and the rest.
    pub second_field_align: bool,
}

impl RenderOptions {
    /// Take locale-dependent options from a locale.
    pub fn with_locale(mut self, locale: &Locale) -> Self {
        self.punctuation_in_quote = locale.punctuation_in_quote();
        self
    }
}

/// How one output format spells things.
pub(crate) trait Format: Sync {
    /// Markup opening a formatting channel, or `None` if the channel has
    /// no representation in this format.
    fn open_span(&self, value: ChannelValue) -> Option<String>;

    fn close_span(&self, value: ChannelValue) -> Option<String>;

    fn escape(&self, text: &str) -> String;

    /// A hyperlink. Both arguments are unescaped.
    fn link(&self, label: &str, target: &str) -> String;

    /// Markup for a display group boundary. `at_start` is true when
    /// nothing has been written yet.
    fn display_group(&self, group: &DisplayGroupToken, at_start: bool) -> String;

    /// Wrap a formatted bibliography entry.
    fn bibliography_entry(&self, tokens: &[Token], options: &RenderOptions) -> String;

    /// Text placed before and after all bibliography entries.
    fn bibliography_markup(&self) -> (&'static str, &'static str) {
        ("", "")
    }
}

fn write_entry_with_suffix(
    format: &dyn Format,
    tokens: &[Token],
    options: &RenderOptions,
    suffix: &str,
) -> String {
    let mut result = spans::write_tokens(format, tokens, options);
    if !tokens.is_empty() {
        result.push_str(suffix);
    }
    result
}

/// Render a token buffer.
///
/// Post-processing runs first, then the span-stack pass of the chosen
/// format.
pub fn render(buffer: &TokenBuffer, format: OutputFormat, options: &RenderOptions) -> String {
    let processed = post_process(buffer, options.punctuation_in_quote);
    spans::write_tokens(format.formatter(), processed.tokens(), options)
}

/// Render a citation.
pub fn format_citation(buffer: &TokenBuffer, format: OutputFormat, options: &RenderOptions) -> String {
    render(buffer, format, options)
}

/// Render one bibliography entry, including the format's entry markup.
pub fn format_bibliography_entry(
    buffer: &TokenBuffer,
    format: OutputFormat,
    options: &RenderOptions,
) -> String {
    let processed = post_process(buffer, options.punctuation_in_quote);
    format
        .formatter()
        .bibliography_entry(processed.tokens(), options)
}

/// Join formatted bibliography entries into a bibliography.
pub fn make_bibliography<S: AsRef<str>>(entries: &[S], format: OutputFormat) -> String {
    let (before, after) = format.formatter().bibliography_markup();
    let mut result = String::from(before);
    for entry in entries {
        result.push_str(entry.as_ref());
    }
    result.push_str(after);
    result
}

/// Prefix DOIs with the resolver unless they are already URLs.
pub(crate) fn doi_target(doi: &str) -> String {
    if doi.starts_with("http://") || doi.starts_with("https://") {
        doi.to_string()
    } else {
        format!("https://doi.org/{}", doi)
    }
}
