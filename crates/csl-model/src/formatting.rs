//! Formatting attributes.
//!
//! A [`FormattingAttributes`] value is a record of five independent
//! channels. Each channel is either unset (inherit from the enclosing
//! context) or holds one concrete value. The explicit reset values
//! (`normal`, `none`, `baseline`) count as concrete values: they override
//! an inherited value rather than inheriting it.

use crate::node::Node;
use crate::{Error, Result};

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
    Light,
}

/// Font variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Normal,
    SmallCaps,
}

/// Text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    None,
    Underline,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Baseline,
    Sup,
    Sub,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique];

    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(FontStyle::Normal),
            "italic" => Some(FontStyle::Italic),
            "oblique" => Some(FontStyle::Oblique),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

impl FontWeight {
    pub const ALL: [FontWeight; 3] = [FontWeight::Normal, FontWeight::Bold, FontWeight::Light];

    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            "light" => Some(FontWeight::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Light => "light",
        }
    }
}

impl FontVariant {
    pub const ALL: [FontVariant; 2] = [FontVariant::Normal, FontVariant::SmallCaps];

    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(FontVariant::Normal),
            "small-caps" => Some(FontVariant::SmallCaps),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontVariant::Normal => "normal",
            FontVariant::SmallCaps => "small-caps",
        }
    }
}

impl TextDecoration {
    pub const ALL: [TextDecoration; 2] = [TextDecoration::None, TextDecoration::Underline];

    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "none" => Some(TextDecoration::None),
            "underline" => Some(TextDecoration::Underline),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
        }
    }
}

impl VerticalAlign {
    pub const ALL: [VerticalAlign; 3] = [
        VerticalAlign::Baseline,
        VerticalAlign::Sup,
        VerticalAlign::Sub,
    ];

    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "baseline" => Some(VerticalAlign::Baseline),
            "sup" => Some(VerticalAlign::Sup),
            "sub" => Some(VerticalAlign::Sub),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlign::Baseline => "baseline",
            VerticalAlign::Sup => "sup",
            VerticalAlign::Sub => "sub",
        }
    }
}

/// One formatting channel.
///
/// [`Channel::ORDER`] is the canonical order in which formatters open
/// spans, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    FontStyle,
    FontWeight,
    FontVariant,
    TextDecoration,
    VerticalAlign,
}

impl Channel {
    pub const ORDER: [Channel; 5] = [
        Channel::FontStyle,
        Channel::FontWeight,
        Channel::FontVariant,
        Channel::TextDecoration,
        Channel::VerticalAlign,
    ];
}

/// A concrete value for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelValue {
    FontStyle(FontStyle),
    FontWeight(FontWeight),
    FontVariant(FontVariant),
    TextDecoration(TextDecoration),
    VerticalAlign(VerticalAlign),
}

impl ChannelValue {
    pub fn channel(self) -> Channel {
        match self {
            ChannelValue::FontStyle(_) => Channel::FontStyle,
            ChannelValue::FontWeight(_) => Channel::FontWeight,
            ChannelValue::FontVariant(_) => Channel::FontVariant,
            ChannelValue::TextDecoration(_) => Channel::TextDecoration,
            ChannelValue::VerticalAlign(_) => Channel::VerticalAlign,
        }
    }
}

/// The set of formatting attributes carried by a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormattingAttributes {
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
    pub font_variant: Option<FontVariant>,
    pub text_decoration: Option<TextDecoration>,
    pub vertical_align: Option<VerticalAlign>,
}

impl FormattingAttributes {
    /// All channels unset.
    pub const UNSET: FormattingAttributes = FormattingAttributes {
        font_style: None,
        font_weight: None,
        font_variant: None,
        text_decoration: None,
        vertical_align: None,
    };

    pub fn new() -> Self {
        Self::UNSET
    }

    pub fn with_font_style(mut self, value: FontStyle) -> Self {
        self.font_style = Some(value);
        self
    }

    pub fn with_font_weight(mut self, value: FontWeight) -> Self {
        self.font_weight = Some(value);
        self
    }

    pub fn with_font_variant(mut self, value: FontVariant) -> Self {
        self.font_variant = Some(value);
        self
    }

    pub fn with_text_decoration(mut self, value: TextDecoration) -> Self {
        self.text_decoration = Some(value);
        self
    }

    pub fn with_vertical_align(mut self, value: VerticalAlign) -> Self {
        self.vertical_align = Some(value);
        self
    }

    /// Merge an inner attribute set into its enclosing one.
    ///
    /// Each channel takes the inner value when set and the outer value
    /// otherwise.
    pub fn merge(outer: Self, inner: Self) -> Self {
        Self {
            font_style: inner.font_style.or(outer.font_style),
            font_weight: inner.font_weight.or(outer.font_weight),
            font_variant: inner.font_variant.or(outer.font_variant),
            text_decoration: inner.text_decoration.or(outer.text_decoration),
            vertical_align: inner.vertical_align.or(outer.vertical_align),
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// The value held by one channel, if set.
    pub fn get(&self, channel: Channel) -> Option<ChannelValue> {
        match channel {
            Channel::FontStyle => self.font_style.map(ChannelValue::FontStyle),
            Channel::FontWeight => self.font_weight.map(ChannelValue::FontWeight),
            Channel::FontVariant => self.font_variant.map(ChannelValue::FontVariant),
            Channel::TextDecoration => self.text_decoration.map(ChannelValue::TextDecoration),
            Channel::VerticalAlign => self.vertical_align.map(ChannelValue::VerticalAlign),
        }
    }

    /// Read the formatting attributes of a style element.
    pub fn from_node(node: &Node) -> Result<Self> {
        fn read<T>(node: &Node, attribute: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>> {
            match node.get_attribute(attribute) {
                None => Ok(None),
                Some(value) => parse(value)
                    .map(Some)
                    .ok_or_else(|| Error::invalid_value(&node.name, attribute, value)),
            }
        }

        Ok(Self {
            font_style: read(node, "font-style", FontStyle::from_csl)?,
            font_weight: read(node, "font-weight", FontWeight::from_csl)?,
            font_variant: read(node, "font-variant", FontVariant::from_csl)?,
            text_decoration: read(node, "text-decoration", TextDecoration::from_csl)?,
            vertical_align: read(node, "vertical-align", VerticalAlign::from_csl)?,
        })
    }

    /// Every attribute combination, including the unset one.
    ///
    /// Used to check the merge laws and formatter output exhaustively.
    pub fn all_combinations() -> Vec<Self> {
        fn with_unset<T: Copy>(values: &[T]) -> Vec<Option<T>> {
            std::iter::once(None)
                .chain(values.iter().copied().map(Some))
                .collect()
        }

        let mut result = Vec::new();
        for font_style in with_unset(&FontStyle::ALL) {
            for font_weight in with_unset(&FontWeight::ALL) {
                for font_variant in with_unset(&FontVariant::ALL) {
                    for text_decoration in with_unset(&TextDecoration::ALL) {
                        for vertical_align in with_unset(&VerticalAlign::ALL) {
                            result.push(Self {
                                font_style,
                                font_weight,
                                font_variant,
                                text_decoration,
                                vertical_align,
                            });
                        }
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_inner_wins() {
        let outer = FormattingAttributes::new()
            .with_font_style(FontStyle::Italic)
            .with_font_weight(FontWeight::Bold);
        let inner = FormattingAttributes::new().with_font_style(FontStyle::Normal);

        let merged = FormattingAttributes::merge(outer, inner);
        assert_eq!(merged.font_style, Some(FontStyle::Normal));
        assert_eq!(merged.font_weight, Some(FontWeight::Bold));
        assert_eq!(merged.font_variant, None);
    }

    #[test]
    fn test_merge_identity_laws() {
        let unset = FormattingAttributes::UNSET;
        for x in FormattingAttributes::all_combinations() {
            assert_eq!(FormattingAttributes::merge(x, unset), x);
            assert_eq!(FormattingAttributes::merge(unset, x), x);
        }
    }

    #[test]
    fn test_merge_is_per_channel() {
        let all = FormattingAttributes::all_combinations();
        // 4 * 4 * 3 * 3 * 4 combinations
        assert_eq!(all.len(), 576);

        // a coarse sample of pairs keeps this fast while still crossing
        // every channel value with every other
        for a in all.iter().step_by(7) {
            for b in all.iter().step_by(5) {
                let m = FormattingAttributes::merge(*a, *b);
                for channel in Channel::ORDER {
                    let expected = b.get(channel).or(a.get(channel));
                    assert_eq!(m.get(channel), expected);
                }
            }
        }
    }

    #[test]
    fn test_from_node() {
        let node = Node::new("text")
            .with_attribute("font-style", "italic")
            .with_attribute("vertical-align", "sup")
            .with_attribute("prefix", "(");
        let attrs = FormattingAttributes::from_node(&node).unwrap();
        assert_eq!(
            attrs,
            FormattingAttributes::new()
                .with_font_style(FontStyle::Italic)
                .with_vertical_align(VerticalAlign::Sup)
        );
    }

    #[test]
    fn test_from_node_rejects_unknown_value() {
        let node = Node::new("text").with_attribute("font-weight", "heavy");
        let err = FormattingAttributes::from_node(&node).unwrap_err();
        assert_eq!(err, Error::invalid_value("text", "font-weight", "heavy"));
    }

    #[test]
    fn test_channel_value_channel() {
        for channel in Channel::ORDER {
            let attrs = FormattingAttributes::all_combinations()
                .into_iter()
                .find(|a| a.get(channel).is_some())
                .unwrap();
            assert_eq!(attrs.get(channel).map(ChannelValue::channel), Some(channel));
        }
    }
}
