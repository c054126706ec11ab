//! Punctuation clean-up applied to a buffer before formatting.
//!
//! Affixes and delimiters are attached by independent parts of a style,
//! so a finished buffer often repeats punctuation ("Ed.." or "Title?.").
//! The passes here remove such collisions. They only ever shorten or drop
//! `Prefix`, `Suffix` and `Delimiter` tokens, with one exception: when the
//! locale puts punctuation inside quotes, a leading `.` or `,` after a
//! closing quote is moved in front of it.

use crate::buffer::TokenBuffer;
use crate::token::{TextKind, Token};

/// Run all clean-up passes and return the resulting buffer.
pub fn post_process(buffer: &TokenBuffer, punctuation_in_quote: bool) -> TokenBuffer {
    let mut tokens = buffer.tokens().to_vec();
    if punctuation_in_quote {
        move_punctuation_into_quotes(&mut tokens);
    }
    remove_overlapping_affixes(&mut tokens);
    merge_punctuation(&mut tokens);
    TokenBuffer::from(tokens)
}

fn is_affix(token: &Token) -> bool {
    matches!(
        token.kind(),
        Some(TextKind::Prefix | TextKind::Suffix | TextKind::Delimiter)
    )
}

fn previous_non_quote(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i)
        .rev()
        .find(|&j| tokens[j].kind() != Some(TextKind::CloseQuote))
}

fn move_punctuation_into_quotes(tokens: &mut Vec<Token>) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        if tokens[i].kind() == Some(TextKind::CloseQuote) {
            let next = &tokens[i + 1];
            let text = next.content();
            if text.starts_with(',') || text.starts_with('.') {
                let punctuation = next.with_text(&text[..1]);
                let rest = next.with_text(&text[1..]);
                tokens[i + 1] = rest;
                tokens.insert(i, punctuation);
                i += 1;
            }
        }
        i += 1;
    }
}

/// Number of bytes at the end of `a` that equal the start of `b`.
pub(crate) fn overlap(a: &str, b: &str) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let lower = a.len().saturating_sub(b.len());
    a.char_indices()
        .map(|(i, _)| i)
        .filter(|&i| i >= lower)
        .find(|&i| b.starts_with(&a[i..]))
        .map_or(0, |i| a.len() - i)
}

fn remove_overlapping_affixes(tokens: &mut Vec<Token>) {
    let mut i = 1;
    while i < tokens.len() {
        let Some(mut j) = previous_non_quote(tokens, i) else {
            i += 1;
            continue;
        };

        if is_affix(&tokens[i]) {
            let text = tokens[i].content().to_string();

            // collect as much preceding text as the affix is long
            let mut preceding = tokens[j].content().to_string();
            while preceding.len() < text.len() && j > 0 {
                j -= 1;
                preceding.insert_str(0, tokens[j].content());
            }

            let n = overlap(&preceding, &text);
            if n > 0 {
                let rest = &text[n..];
                if rest.is_empty() {
                    tokens.remove(i);
                    continue;
                }
                tokens[i] = tokens[i].with_text(rest);
            }
        }
        i += 1;
    }
}

fn merged(last: char, first: char) -> Option<char> {
    match (last, first) {
        ('!', '.' | ':') => Some('!'),
        ('?', '.' | ':') => Some('?'),
        (':' | ';', '!') => Some('!'),
        (':' | ';', '?') => Some('?'),
        (':', '.') => Some(':'),
        (';', ':' | '.') => Some(';'),
        _ => None,
    }
}

fn merge_punctuation(tokens: &mut Vec<Token>) {
    let mut i = 1;
    while i < tokens.len() {
        let Some(j) = previous_non_quote(tokens, i) else {
            i += 1;
            continue;
        };

        if is_affix(&tokens[i]) {
            let before = tokens[j].content();
            let after = tokens[i].content();
            if let (Some(last), Some(first)) = (before.chars().last(), after.chars().next()) {
                if let Some(replacement) = merged(last, first) {
                    let mut new_before = before[..before.len() - last.len_utf8()].to_string();
                    new_before.push(replacement);
                    let rest = after[first.len_utf8()..].to_string();

                    tokens[j] = tokens[j].with_text(new_before);
                    if rest.is_empty() {
                        tokens.remove(i);
                        continue;
                    }
                    tokens[i] = tokens[i].with_text(rest);
                }
            }
        }
        i += 1;
    }
}
