//! Condition evaluation against a citation item.

use csl_model::{Condition, ConditionTest, MatchMode};
use once_cell::sync::Lazy;
use regex::Regex;

/// Per-item lookup capability supplied by the style walker.
pub trait RenderContext {
    /// Value of a variable, if the item has it.
    fn variable(&self, name: &str) -> Option<&str>;

    /// The item's CSL type (`book`, `article-journal`, ...).
    fn item_type(&self) -> &str;
}

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([a-zA-Z]*[0-9]+[a-zA-Z]*)(\s*([,\-&])\s*([a-zA-Z]*[0-9]+[a-zA-Z]*))*\s*$")
        .expect("numeric pattern is valid")
});

/// Whether a variable value counts as numeric: one or more numbers with
/// optional letter affixes, joined by `,`, `-` or `&`.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

fn combine(mode: MatchMode, mut results: impl Iterator<Item = bool>) -> bool {
    match mode {
        MatchMode::All => results.all(|r| r),
        MatchMode::Any => results.any(|r| r),
        MatchMode::None => !results.any(|r| r),
    }
}

/// Evaluate a condition.
pub fn matches(condition: &Condition, ctx: &dyn RenderContext) -> bool {
    match condition {
        Condition::Else => true,
        Condition::If { test: None, .. } => false,
        Condition::If {
            test: Some(test),
            match_mode,
        } => match test {
            ConditionTest::Type(types) => {
                let actual = ctx.item_type();
                combine(*match_mode, types.iter().map(|t| t == actual))
            }
            ConditionTest::Variable(names) => combine(
                *match_mode,
                names.iter().map(|n| ctx.variable(n).is_some()),
            ),
            ConditionTest::IsNumeric(names) => combine(
                *match_mode,
                names
                    .iter()
                    .map(|n| ctx.variable(n).is_some_and(is_numeric)),
            ),
        },
    }
}
