//! Locale data: terms, date formats and style options.
//!
//! A style sees the result of merging a chain of locales, most general
//! first: the root default, then the language locale, then any locale
//! overrides embedded in the style itself. [`Locale::merge`] combines two
//! links of that chain and [`Locale::merge_chain`] folds the whole chain.

use crate::node::Node;
use crate::{Error, Result};
use hashlink::LinkedHashMap;

/// Term form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermForm {
    Long,
    Short,
    Verb,
    VerbShort,
    Symbol,
}

impl TermForm {
    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "long" => Some(TermForm::Long),
            "short" => Some(TermForm::Short),
            "verb" => Some(TermForm::Verb),
            "verb-short" => Some(TermForm::VerbShort),
            "symbol" => Some(TermForm::Symbol),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TermForm::Long => "long",
            TermForm::Short => "short",
            TermForm::Verb => "verb",
            TermForm::VerbShort => "verb-short",
            TermForm::Symbol => "symbol",
        }
    }

    /// The form to try next when a term is not defined in this form.
    pub fn fallback(self) -> Option<TermForm> {
        match self {
            TermForm::Long => None,
            TermForm::Short | TermForm::Verb => Some(TermForm::Long),
            TermForm::VerbShort => Some(TermForm::Verb),
            TermForm::Symbol => Some(TermForm::Short),
        }
    }
}

/// A localized term with singular and plural text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub single: String,
    pub multiple: String,
}

impl Term {
    /// Create a term. The plural defaults to the singular.
    pub fn new(single: impl Into<String>, multiple: Option<String>) -> Self {
        let single = single.into();
        let multiple = multiple.unwrap_or_else(|| single.clone());
        Self { single, multiple }
    }

    pub fn get(&self, plural: bool) -> &str {
        if plural { &self.multiple } else { &self.single }
    }
}

/// One part of a localized date format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePart {
    /// `year`, `month` or `day`.
    pub name: String,
    pub form: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub range_delimiter: Option<String>,
}

/// A localized date format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormat {
    /// `text` or `numeric`.
    pub form: String,
    pub delimiter: Option<String>,
    pub parts: Vec<DatePart>,
}

/// Locale-level style options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOptions {
    pub punctuation_in_quote: bool,
}

/// Localized terms, date formats and style options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    /// Language tag such as `en-US`.
    pub lang: Option<String>,
    /// Date formats keyed by form.
    pub date_formats: LinkedHashMap<String, DateFormat>,
    /// Terms keyed by form, then by name.
    pub terms: LinkedHashMap<TermForm, LinkedHashMap<String, Term>>,
    pub style_options: Option<StyleOptions>,
}

impl Locale {
    pub fn new(lang: Option<String>) -> Self {
        Self {
            lang,
            ..Default::default()
        }
    }

    /// Add or replace a term.
    pub fn set_term(&mut self, name: impl Into<String>, form: TermForm, term: Term) {
        if !self.terms.contains_key(&form) {
            self.terms.insert(form, LinkedHashMap::new());
        }
        if let Some(by_name) = self.terms.get_mut(&form) {
            by_name.replace(name.into(), term);
        }
    }

    /// Look up a term, falling back to more general forms.
    pub fn term(&self, name: &str, form: TermForm, plural: bool) -> Option<&str> {
        let mut current = Some(form);
        while let Some(f) = current {
            if let Some(term) = self.terms.get(&f).and_then(|by_name| by_name.get(name)) {
                return Some(term.get(plural));
            }
            current = f.fallback();
        }
        None
    }

    pub fn date_format(&self, form: &str) -> Option<&DateFormat> {
        self.date_formats.get(form)
    }

    pub fn punctuation_in_quote(&self) -> bool {
        self.style_options
            .is_some_and(|options| options.punctuation_in_quote)
    }

    /// Overlay `overlay` on top of `base`.
    ///
    /// The language tag comes from `base`. Style options come from
    /// `overlay` when it has them. Date formats and terms are unions in
    /// which `overlay` replaces entries with the same key; terms are
    /// replaced per (form, name) pair.
    pub fn merge(base: &Locale, overlay: &Locale) -> Locale {
        let mut result = base.clone();

        result.style_options = overlay.style_options.or(base.style_options);

        for (form, format) in &overlay.date_formats {
            result.date_formats.replace(form.clone(), format.clone());
        }

        for (form, by_name) in &overlay.terms {
            for (name, term) in by_name {
                result.set_term(name.clone(), *form, term.clone());
            }
        }

        result
    }

    /// Merge an inheritance chain ordered most general first.
    ///
    /// Returns `None` for an empty chain.
    pub fn merge_chain<'a>(chain: impl IntoIterator<Item = &'a Locale>) -> Option<Locale> {
        let mut links = 0usize;
        let merged = chain.into_iter().fold(None, |acc: Option<Locale>, next| {
            links += 1;
            Some(match acc {
                None => next.clone(),
                Some(base) => Locale::merge(&base, next),
            })
        });
        tracing::debug!(links, "merged locale chain");
        merged
    }

    /// Build a locale from a `locale` element.
    pub fn from_node(node: &Node) -> Result<Locale> {
        if node.name != "locale" {
            return Err(Error::UnexpectedElement {
                expected: "locale".to_string(),
                found: node.name.clone(),
            });
        }

        let mut locale = Locale::new(
            node.get_attribute("lang")
                .or_else(|| node.get_attribute("xml:lang"))
                .map(str::to_string),
        );

        for child in node.all_children() {
            match child.name.as_str() {
                "style-options" => {
                    locale.style_options = Some(parse_style_options(child)?);
                }
                "date" => {
                    let format = parse_date_format(child)?;
                    locale.date_formats.replace(format.form.clone(), format);
                }
                "terms" => {
                    for term_node in child.get_children("term") {
                        let (name, form, term) = parse_term(term_node)?;
                        locale.set_term(name, form, term);
                    }
                }
                _ => {}
            }
        }

        Ok(locale)
    }
}

fn parse_bool(node: &Node, attribute: &str) -> Result<Option<bool>> {
    match node.get_attribute(attribute) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(Error::invalid_value(&node.name, attribute, other)),
    }
}

fn parse_style_options(node: &Node) -> Result<StyleOptions> {
    Ok(StyleOptions {
        punctuation_in_quote: parse_bool(node, "punctuation-in-quote")?.unwrap_or(false),
    })
}

fn parse_date_format(node: &Node) -> Result<DateFormat> {
    let form = node.require_attribute("form")?.to_string();

    let mut parts = Vec::new();
    for part in node.get_children("date-part") {
        parts.push(DatePart {
            name: part.require_attribute("name")?.to_string(),
            form: part.get_attribute("form").map(str::to_string),
            prefix: part.get_attribute("prefix").map(str::to_string),
            suffix: part.get_attribute("suffix").map(str::to_string),
            range_delimiter: part.get_attribute("range-delimiter").map(str::to_string),
        });
    }

    Ok(DateFormat {
        form,
        delimiter: node.get_attribute("delimiter").map(str::to_string),
        parts,
    })
}

fn parse_term(node: &Node) -> Result<(String, TermForm, Term)> {
    let name = node.require_attribute("name")?.to_string();

    let form = match node.get_attribute("form") {
        None => TermForm::Long,
        Some(value) => {
            TermForm::from_csl(value).ok_or_else(|| Error::invalid_value("term", "form", value))?
        }
    };

    let term = match node.get_child("single") {
        Some(single) => Term::new(
            single.text().unwrap_or_default(),
            node.get_child("multiple")
                .map(|m| m.text().unwrap_or_default().to_string()),
        ),
        None => Term::new(node.text().unwrap_or_default(), None),
    };

    Ok((name, form, term))
}
