//! Static model for CSL rendering.
//!
//! This crate holds the values a style walker feeds into the renderer:
//!
//! - [`FormattingAttributes`] with its per-channel override merge
//! - [`Condition`]s guarding `<choose>` branches
//! - [`Locale`] tables with inheritance-chain merging
//! - the closed set of locator [`Label`]s
//!
//! Values are built either directly or from a pre-parsed [`Node`] tree.
//! Parsing XML is left to the caller.

pub mod condition;
pub mod error;
pub mod formatting;
pub mod label;
pub mod locale;
pub mod node;

pub use condition::{Condition, ConditionTest, MatchMode};
pub use error::{Error, Result};
pub use formatting::{
    Channel, ChannelValue, FontStyle, FontVariant, FontWeight, FormattingAttributes,
    TextDecoration, VerticalAlign,
};
pub use label::Label;
pub use locale::{DateFormat, DatePart, Locale, StyleOptions, Term, TermForm};
pub use node::{Attribute, Node};
