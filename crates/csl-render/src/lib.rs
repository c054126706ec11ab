//! Rendering primitives for CSL citations and bibliographies.
//!
//! A style walker evaluates [`Condition`](csl_model::Condition)s with
//! [`matches`], collects [`Token`]s into a [`TokenBuffer`], and finally
//! hands the buffer to [`render`]. Locators are split into labeled numbers
//! by [`number::parse`].
//!
//! # Example
//!
//! ```rust
//! use csl_model::{FontStyle, FontWeight, FormattingAttributes};
//! use csl_render::{OutputFormat, RenderOptions, TextKind, TokenBuffer, render};
//!
//! let mut buffer = TokenBuffer::new();
//! buffer.append_text("Hello ", TextKind::Text, FormattingAttributes::UNSET);
//! buffer.append_text(
//!     "world",
//!     TextKind::Text,
//!     FormattingAttributes::new()
//!         .with_font_style(FontStyle::Italic)
//!         .with_font_weight(FontWeight::Bold),
//! );
//!
//! let html = render(&buffer, OutputFormat::Html, &RenderOptions::default());
//! assert_eq!(
//!     html,
//!     "Hello <span style=\"font-style: italic\"><span style=\"font-weight: bold\">world</span></span>"
//! );
//! ```

pub mod buffer;
pub mod error;
pub mod eval;
pub mod format;
pub mod number;
pub mod postprocess;
pub mod token;

pub use buffer::TokenBuffer;
pub use error::{Error, Result};
pub use eval::{RenderContext, is_numeric, matches};
pub use format::{
    OutputFormat, RenderOptions, format_bibliography_entry, format_citation, make_bibliography,
    render,
};
pub use number::NumberElement;
pub use token::{DisplayGroupToken, DisplayKind, TextKind, TextToken, Token};
