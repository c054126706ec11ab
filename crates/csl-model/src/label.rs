//! Locator labels.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The closed set of locator labels a number can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Appendix,
    ArticleLocator,
    Book,
    Canon,
    Chapter,
    Column,
    Elocation,
    Equation,
    Figure,
    Folio,
    Issue,
    Line,
    Note,
    Number,
    Opus,
    Page,
    Paragraph,
    Part,
    Rule,
    Scene,
    Section,
    SubVerbo,
    Supplement,
    Table,
    Timestamp,
    TitleLocator,
    Verse,
    Volume,
}

impl Label {
    pub const ALL: [Label; 28] = [
        Label::Appendix,
        Label::ArticleLocator,
        Label::Book,
        Label::Canon,
        Label::Chapter,
        Label::Column,
        Label::Elocation,
        Label::Equation,
        Label::Figure,
        Label::Folio,
        Label::Issue,
        Label::Line,
        Label::Note,
        Label::Number,
        Label::Opus,
        Label::Page,
        Label::Paragraph,
        Label::Part,
        Label::Rule,
        Label::Scene,
        Label::Section,
        Label::SubVerbo,
        Label::Supplement,
        Label::Table,
        Label::Timestamp,
        Label::TitleLocator,
        Label::Verse,
        Label::Volume,
    ];

    /// The CSL term name of this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Appendix => "appendix",
            Label::ArticleLocator => "article-locator",
            Label::Book => "book",
            Label::Canon => "canon",
            Label::Chapter => "chapter",
            Label::Column => "column",
            Label::Elocation => "elocation",
            Label::Equation => "equation",
            Label::Figure => "figure",
            Label::Folio => "folio",
            Label::Issue => "issue",
            Label::Line => "line",
            Label::Note => "note",
            Label::Number => "number",
            Label::Opus => "opus",
            Label::Page => "page",
            Label::Paragraph => "paragraph",
            Label::Part => "part",
            Label::Rule => "rule",
            Label::Scene => "scene",
            Label::Section => "section",
            Label::SubVerbo => "sub-verbo",
            Label::Supplement => "supplement",
            Label::Table => "table",
            Label::Timestamp => "timestamp",
            Label::TitleLocator => "title-locator",
            Label::Verse => "verse",
            Label::Volume => "volume",
        }
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Error::InvalidLabel(s.to_string()))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
