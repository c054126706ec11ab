//! Ordered token sequences produced by one rendering pass.

use crate::token::{TextKind, Token};
use csl_model::FormattingAttributes;
use std::fmt;
use std::ops::Range;

/// An append-only sequence of tokens in rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn append(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Append a text token.
    pub fn append_text(
        &mut self,
        content: impl Into<String>,
        kind: TextKind,
        attrs: FormattingAttributes,
    ) -> &mut Self {
        self.append(Token::text_with(content, kind, attrs))
    }

    /// Append every token of another buffer.
    pub fn append_buffer(&mut self, other: &TokenBuffer) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Copy of this buffer in which every token sits inside `outer`.
    pub fn wrap(&self, outer: FormattingAttributes) -> TokenBuffer {
        self.tokens.iter().map(|t| t.wrap_attrs(outer)).collect()
    }

    /// Copy of a sub-range of this buffer.
    ///
    /// The range is clamped to the buffer length.
    pub fn copy(&self, range: Range<usize>) -> TokenBuffer {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        self.tokens[start..end].iter().cloned().collect()
    }

    /// Flag every token as part of a bibliography entry's first field.
    pub fn mark_first_field(&self) -> TokenBuffer {
        self.tokens
            .iter()
            .map(|t| t.with_first_field(true))
            .collect()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_first_field_set(&self) -> bool {
        self.tokens.iter().any(Token::first_field)
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl IntoIterator for TokenBuffer {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Concatenated text content, ignoring formatting and display groups.
impl fmt::Display for TokenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.content())?;
        }
        Ok(())
    }
}
