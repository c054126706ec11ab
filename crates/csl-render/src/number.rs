//! Parsing of free-text locators such as `"pp. 4-5"` or `"ch. 2, sec. 3"`.
//!
//! The input is split into groups. A new group starts at the beginning of
//! the input and after every `,` or `;` that is directly followed by a
//! label keyword. The separator between two groups is kept as its own
//! unlabeled element. Within a group, numerals are joined by list
//! separators (`,` `;` `&` `and`) or range separators (`-` `:`), and the
//! group is plural iff it contains at least one of them.
//!
//! [`parse`] never fails. Input it cannot make sense of comes back as a
//! single literal element holding the original string.

use csl_model::Label;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;

/// One parsed piece of a locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberElement {
    pub text: String,
    pub label: Option<Label>,
    pub plural: bool,
}

impl NumberElement {
    pub fn new(text: impl Into<String>, label: Option<Label>, plural: bool) -> Self {
        Self {
            text: text.into(),
            label,
            plural,
        }
    }

    /// An unlabeled, singular element.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, None, false)
    }
}

/// Label keywords, longest first so that `pp.` wins over `p.`.
///
/// Abbreviations carry their period. Full words must be followed by
/// whitespace.
static KEYWORDS: Lazy<Vec<(&'static str, Label)>> = Lazy::new(|| {
    let mut keywords = vec![
        ("appendix", Label::Appendix),
        ("appendices", Label::Appendix),
        ("app.", Label::Appendix),
        ("article", Label::ArticleLocator),
        ("articles", Label::ArticleLocator),
        ("art.", Label::ArticleLocator),
        ("book", Label::Book),
        ("books", Label::Book),
        ("bk.", Label::Book),
        ("bks.", Label::Book),
        ("chapter", Label::Chapter),
        ("chapters", Label::Chapter),
        ("ch.", Label::Chapter),
        ("chs.", Label::Chapter),
        ("chap.", Label::Chapter),
        ("chaps.", Label::Chapter),
        ("column", Label::Column),
        ("columns", Label::Column),
        ("col.", Label::Column),
        ("cols.", Label::Column),
        ("equation", Label::Equation),
        ("equations", Label::Equation),
        ("eq.", Label::Equation),
        ("eqs.", Label::Equation),
        ("figure", Label::Figure),
        ("figures", Label::Figure),
        ("fig.", Label::Figure),
        ("figs.", Label::Figure),
        ("folio", Label::Folio),
        ("folios", Label::Folio),
        ("fol.", Label::Folio),
        ("fols.", Label::Folio),
        ("issue", Label::Issue),
        ("issues", Label::Issue),
        ("line", Label::Line),
        ("lines", Label::Line),
        ("l.", Label::Line),
        ("ll.", Label::Line),
        ("note", Label::Note),
        ("notes", Label::Note),
        ("n.", Label::Note),
        ("nn.", Label::Note),
        ("number", Label::Number),
        ("numbers", Label::Number),
        ("no.", Label::Number),
        ("nos.", Label::Number),
        ("opus", Label::Opus),
        ("opera", Label::Opus),
        ("op.", Label::Opus),
        ("opp.", Label::Opus),
        ("page", Label::Page),
        ("pages", Label::Page),
        ("p.", Label::Page),
        ("pp.", Label::Page),
        ("paragraph", Label::Paragraph),
        ("paragraphs", Label::Paragraph),
        ("para.", Label::Paragraph),
        ("paras.", Label::Paragraph),
        ("¶", Label::Paragraph),
        ("¶¶", Label::Paragraph),
        ("part", Label::Part),
        ("parts", Label::Part),
        ("pt.", Label::Part),
        ("pts.", Label::Part),
        ("rule", Label::Rule),
        ("rules", Label::Rule),
        ("r.", Label::Rule),
        ("scene", Label::Scene),
        ("scenes", Label::Scene),
        ("sc.", Label::Scene),
        ("section", Label::Section),
        ("sections", Label::Section),
        ("sec.", Label::Section),
        ("secs.", Label::Section),
        ("§", Label::Section),
        ("§§", Label::Section),
        ("s.v.", Label::SubVerbo),
        ("s.vv.", Label::SubVerbo),
        ("supplement", Label::Supplement),
        ("supplements", Label::Supplement),
        ("supp.", Label::Supplement),
        ("table", Label::Table),
        ("tables", Label::Table),
        ("tbl.", Label::Table),
        ("verse", Label::Verse),
        ("verses", Label::Verse),
        ("v.", Label::Verse),
        ("vv.", Label::Verse),
        ("volume", Label::Volume),
        ("volumes", Label::Volume),
        ("vol.", Label::Volume),
        ("vols.", Label::Volume),
    ];
    keywords.sort_by_key(|(keyword, _)| Reverse(keyword.chars().count()));
    keywords
});

static DIGIT_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]*[0-9]+[A-Za-z]*$").expect("numeral pattern is valid"));

/// A decimal numeral with a letter suffix, which may be subdivided (`10a-b`).
static LETTERED_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[A-Za-z]+$").expect("lettered pattern is valid"));

static ROMAN_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[IVXLCDM]+|[ivxlcdm]+)$").expect("roman pattern is valid"));

/// Match a label keyword at the start of `s`.
///
/// Returns the label and the byte length of the keyword.
fn match_label(s: &str) -> Option<(Label, usize)> {
    KEYWORDS.iter().find_map(|&(keyword, label)| {
        let candidate = s.get(..keyword.len())?;
        if !candidate.eq_ignore_ascii_case(keyword) {
            return None;
        }
        let is_word = keyword.chars().all(|c| c.is_ascii_alphabetic());
        if is_word && !s[keyword.len()..].starts_with(char::is_whitespace) {
            return None;
        }
        Some((label, keyword.len()))
    })
}

fn is_numeral(word: &str) -> bool {
    let mut parts = word.split('.');
    let Some(first) = parts.next() else {
        return false;
    };
    if !(DIGIT_NUMERAL.is_match(first) || ROMAN_NUMERAL.is_match(first)) {
        return false;
    }
    parts.all(|part| {
        !part.is_empty()
            && (DIGIT_NUMERAL.is_match(part) || part.chars().all(|c| c.is_ascii_alphabetic()))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    Word(&'a str),
    Punct(char),
}

fn lex(content: &str) -> Option<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in content.char_indices() {
        if c.is_alphanumeric() || c == '.' {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            lexemes.push(Lexeme::Word(&content[start..i]));
        }
        match c {
            ',' | ';' | '&' | '-' | '–' | ':' => lexemes.push(Lexeme::Punct(c)),
            c if c.is_whitespace() => {}
            _ => return None,
        }
    }
    if let Some(start) = word_start {
        lexemes.push(Lexeme::Word(&content[start..]));
    }
    Some(lexemes)
}

/// Parse the numeral portion of a group into normalized text and a
/// plural flag. Returns `None` if the content is not purely numeric.
fn parse_numbers(content: &str) -> Option<(String, bool)> {
    let lexemes = lex(content)?;
    let mut iter = lexemes.into_iter().peekable();

    let mut text = String::new();
    let mut plural = false;

    let first = match iter.next()? {
        Lexeme::Word(w) if is_numeral(w) => w,
        _ => return None,
    };
    text.push_str(first);
    let mut previous = first;

    while let Some(lexeme) = iter.next() {
        let joiner = match lexeme {
            Lexeme::Punct(',') => {
                if matches!(iter.peek(), Some(Lexeme::Word(w)) if w.eq_ignore_ascii_case("and")) {
                    iter.next();
                    ", and "
                } else {
                    ", "
                }
            }
            Lexeme::Punct(';') => "; ",
            Lexeme::Punct('&') => " & ",
            Lexeme::Word(w) if w.eq_ignore_ascii_case("and") => " and ",
            Lexeme::Punct(c @ ('-' | '–' | ':')) => {
                // `10a-b` subdivides a numeral rather than spanning several
                if LETTERED_NUMERAL.is_match(previous) {
                    if let Some(Lexeme::Word(next)) = iter.peek().copied() {
                        if next.chars().all(|ch| ch.is_ascii_alphabetic()) {
                            iter.next();
                            text.push(c);
                            text.push_str(next);
                            previous = next;
                            continue;
                        }
                    }
                }
                if c == ':' { ":" } else { "–" }
            }
            _ => return None,
        };

        let atom = match iter.next()? {
            Lexeme::Word(w) if is_numeral(w) => w,
            _ => return None,
        };
        text.push_str(joiner);
        text.push_str(atom);
        plural = true;
        previous = atom;
    }

    Some((text, plural))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct Group<'a> {
    label: Option<Label>,
    content: &'a str,
}

/// Split the input into labeled groups and the separators between them.
fn split_groups(input: &str) -> (Vec<Group<'_>>, Vec<&'static str>) {
    let mut groups = Vec::new();
    let mut separators = Vec::new();

    let (mut label, mut start) = match match_label(input) {
        Some((label, len)) => (Some(label), len),
        None => (None, 0),
    };

    let mut pos = start;
    while let Some(c) = input[pos..].chars().next() {
        if c == ',' || c == ';' {
            let rest = input[pos + c.len_utf8()..].trim_start();
            if let Some((next_label, len)) = match_label(rest) {
                groups.push(Group {
                    label,
                    content: &input[start..pos],
                });
                separators.push(if c == ',' { ", " } else { "; " });
                label = Some(next_label);
                start = input.len() - rest.len() + len;
                pos = start;
                continue;
            }
        }
        pos += c.len_utf8();
    }
    groups.push(Group {
        label,
        content: &input[start..],
    });

    (groups, separators)
}

enum Piece {
    Element(NumberElement),
    Separator(&'static str),
}

fn fallback(input: &str, reason: &str) -> Vec<NumberElement> {
    tracing::debug!(input, reason, "locator kept as literal text");
    vec![NumberElement::literal(input)]
}

/// Parse a locator into labeled number elements.
pub fn parse(input: &str) -> Vec<NumberElement> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return fallback(input, "empty");
    }

    let (groups, separators) = split_groups(trimmed);
    let labeled = groups.iter().any(|g| g.label.is_some());

    let mut pieces: Vec<Piece> = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        let content = group
            .content
            .trim()
            .trim_end_matches([',', ';'])
            .trim_end();

        if group.label.is_some() && content.is_empty() {
            return fallback(input, "label without number");
        }

        let element = match parse_numbers(content) {
            Some((text, plural)) => NumberElement::new(text, group.label, plural),
            None if !labeled => return fallback(input, "not a number"),
            None => NumberElement::new(collapse_whitespace(content), group.label, false),
        };

        if i > 0 {
            pieces.push(Piece::Separator(separators[i - 1]));
        }
        merge_into(&mut pieces, element);
    }

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Element(element) => element,
            Piece::Separator(text) => NumberElement::literal(text),
        })
        .collect()
}

/// Push an element, merging it with the previous group when both carry
/// the same label.
fn merge_into(pieces: &mut Vec<Piece>, element: NumberElement) {
    if element.label.is_some() {
        if let [.., Piece::Element(previous), Piece::Separator(separator)] = pieces.as_mut_slice() {
            if previous.label == element.label {
                previous.text.push_str(*separator);
                previous.text.push_str(&element.text);
                previous.plural = true;
                pieces.pop();
                return;
            }
        }
    }
    pieces.push(Piece::Element(element));
}
