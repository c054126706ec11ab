//! Renderable tokens.
//!
//! Tokens are immutable. Every transformation returns a new token.

use csl_model::FormattingAttributes;

/// What a text token represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    OpenQuote,
    CloseQuote,
    Prefix,
    Suffix,
    Delimiter,
    Url,
    Doi,
}

/// The kind of structural region a display group delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    Block,
    LeftMargin,
    RightInline,
    Indent,
}

impl DisplayKind {
    /// CSS class used for the region in HTML output.
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayKind::Block => "csl-block",
            DisplayKind::LeftMargin => "csl-left-margin",
            DisplayKind::RightInline => "csl-right-inline",
            DisplayKind::Indent => "csl-indent",
        }
    }
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    pub content: String,
    pub kind: TextKind,
    pub attrs: FormattingAttributes,
    pub first_field: bool,
}

impl TextToken {
    /// Same token with different content.
    pub fn with_text(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }
}

/// The opening or closing marker of a display group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGroupToken {
    pub open: bool,
    pub kind: DisplayKind,
    pub attrs: FormattingAttributes,
    pub first_field: bool,
}

/// A renderable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(TextToken),
    DisplayGroup(DisplayGroupToken),
}

impl Token {
    /// Unformatted text of the given kind.
    pub fn text(content: impl Into<String>, kind: TextKind) -> Self {
        Self::text_with(content, kind, FormattingAttributes::UNSET)
    }

    pub fn text_with(
        content: impl Into<String>,
        kind: TextKind,
        attrs: FormattingAttributes,
    ) -> Self {
        Token::Text(TextToken {
            content: content.into(),
            kind,
            attrs,
            first_field: false,
        })
    }

    pub fn open_group(kind: DisplayKind) -> Self {
        Token::DisplayGroup(DisplayGroupToken {
            open: true,
            kind,
            attrs: FormattingAttributes::UNSET,
            first_field: false,
        })
    }

    pub fn close_group(kind: DisplayKind) -> Self {
        Token::DisplayGroup(DisplayGroupToken {
            open: false,
            kind,
            attrs: FormattingAttributes::UNSET,
            first_field: false,
        })
    }

    pub fn attrs(&self) -> FormattingAttributes {
        match self {
            Token::Text(t) => t.attrs,
            Token::DisplayGroup(g) => g.attrs,
        }
    }

    pub fn first_field(&self) -> bool {
        match self {
            Token::Text(t) => t.first_field,
            Token::DisplayGroup(g) => g.first_field,
        }
    }

    /// Text content; empty for display groups.
    pub fn content(&self) -> &str {
        match self {
            Token::Text(t) => &t.content,
            Token::DisplayGroup(_) => "",
        }
    }

    /// Text kind, or `None` for display groups.
    pub fn kind(&self) -> Option<TextKind> {
        match self {
            Token::Text(t) => Some(t.kind),
            Token::DisplayGroup(_) => None,
        }
    }

    /// Same token with different text. Display groups are returned unchanged.
    pub fn with_text(&self, content: impl Into<String>) -> Self {
        match self {
            Token::Text(t) => Token::Text(t.with_text(content)),
            Token::DisplayGroup(g) => Token::DisplayGroup(*g),
        }
    }

    pub fn with_first_field(&self, first_field: bool) -> Self {
        match self {
            Token::Text(t) => Token::Text(TextToken {
                first_field,
                ..t.clone()
            }),
            Token::DisplayGroup(g) => Token::DisplayGroup(DisplayGroupToken { first_field, ..*g }),
        }
    }

    /// Place this token inside an enclosing formatting context.
    pub fn wrap_attrs(&self, outer: FormattingAttributes) -> Self {
        match self {
            Token::Text(t) => Token::Text(TextToken {
                attrs: FormattingAttributes::merge(outer, t.attrs),
                ..t.clone()
            }),
            Token::DisplayGroup(g) => Token::DisplayGroup(DisplayGroupToken {
                attrs: FormattingAttributes::merge(outer, g.attrs),
                ..*g
            }),
        }
    }
}
