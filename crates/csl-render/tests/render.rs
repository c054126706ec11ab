//! End-to-end rendering of token buffers in every output format.

use csl_model::{
    FontStyle, FontVariant, FontWeight, FormattingAttributes, TextDecoration, VerticalAlign,
};
use csl_render::{DisplayKind, OutputFormat, RenderOptions, TextKind, Token, TokenBuffer, render};

fn italic() -> FormattingAttributes {
    FormattingAttributes::new().with_font_style(FontStyle::Italic)
}

fn bold() -> FormattingAttributes {
    FormattingAttributes::new().with_font_weight(FontWeight::Bold)
}

fn text(buffer: &mut TokenBuffer, content: &str, attrs: FormattingAttributes) {
    buffer.append_text(content, TextKind::Text, attrs);
}

/// One token per channel value, in the order used by the format tests.
fn every_style() -> TokenBuffer {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "italic", italic());
    text(
        &mut buffer,
        "oblique",
        FormattingAttributes::new().with_font_style(FontStyle::Oblique),
    );
    text(
        &mut buffer,
        "smallcaps",
        FormattingAttributes::new().with_font_variant(FontVariant::SmallCaps),
    );
    text(&mut buffer, "bold", bold());
    text(
        &mut buffer,
        "underline",
        FormattingAttributes::new().with_text_decoration(TextDecoration::Underline),
    );
    text(
        &mut buffer,
        "superscript",
        FormattingAttributes::new().with_vertical_align(VerticalAlign::Sup),
    );
    text(
        &mut buffer,
        "subscript",
        FormattingAttributes::new().with_vertical_align(VerticalAlign::Sub),
    );
    buffer
}

fn nested() -> TokenBuffer {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "Undefined ", FormattingAttributes::UNSET);
    text(&mut buffer, "Italic ", italic());
    text(
        &mut buffer,
        "Both ",
        FormattingAttributes::merge(italic(), bold()),
    );
    text(&mut buffer, "Bold ", bold());
    buffer
}

#[test]
fn test_html_hello_world() {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "Hello ", FormattingAttributes::UNSET);
    text(&mut buffer, "world", FormattingAttributes::merge(italic(), bold()));

    let html = render(&buffer, OutputFormat::Html, &RenderOptions::default());
    assert_eq!(
        html,
        "Hello <span style=\"font-style: italic\"><span style=\"font-weight: bold\">world</span></span>"
    );
}

#[test]
fn test_html_nested_formatting() {
    let html = render(&nested(), OutputFormat::Html, &RenderOptions::default());
    insta::assert_snapshot!(
        html,
        @r#"Undefined <span style="font-style: italic">Italic <span style="font-weight: bold">Both </span></span><span style="font-weight: bold">Bold </span>"#
    );
}

#[test]
fn test_html_wrapped_in_outer_context() {
    let underline = FormattingAttributes::new().with_text_decoration(TextDecoration::Underline);
    let html = render(
        &nested().wrap(underline),
        OutputFormat::Html,
        &RenderOptions::default(),
    );
    insta::assert_snapshot!(
        html,
        @r#"<span style="text-decoration: underline">Undefined <span style="font-style: italic">Italic <span style="font-weight: bold">Both </span></span><span style="font-weight: bold">Bold </span></span>"#
    );
}

#[test]
fn test_html_every_style() {
    let html = render(&every_style(), OutputFormat::Html, &RenderOptions::default());
    insta::assert_snapshot!(
        html,
        @r#"<span style="font-style: italic">italic</span><span style="font-style: oblique">oblique</span><span style="font-variant: small-caps">smallcaps</span><span style="font-weight: bold">bold</span><span style="text-decoration: underline">underline</span><span style="vertical-align: super">superscript</span><span style="vertical-align: sub">subscript</span>"#
    );
}

#[test]
fn test_markdown_every_style() {
    let md = render(&every_style(), OutputFormat::Markdown, &RenderOptions::default());
    insta::assert_snapshot!(
        md,
        @r#"*italic*<span style="font-style: oblique">oblique</span><span style="font-variant: small-caps">smallcaps</span>**bold**<span style="text-decoration: underline">underline</span><sup>superscript</sup><sub>subscript</sub>"#
    );
}

#[test]
fn test_markdown_pure_every_style() {
    let md = render(
        &every_style(),
        OutputFormat::MarkdownPure,
        &RenderOptions::default(),
    );
    assert_eq!(md, "*italic**oblique*smallcaps**bold**underlinesuperscriptsubscript");
}

#[test]
fn test_plain_text_drops_formatting() {
    let plain = render(&nested(), OutputFormat::PlainText, &RenderOptions::default());
    assert_eq!(plain, "Undefined Italic Both Bold ");
}

#[test]
fn test_markdown_pure_url() {
    let mut buffer = TokenBuffer::new();
    buffer.append(Token::text("example.com", TextKind::Url));

    let plain = render(&buffer, OutputFormat::MarkdownPure, &RenderOptions::default());
    assert_eq!(plain, "example\\.com");

    let options = RenderOptions {
        convert_links: true,
        ..Default::default()
    };
    let linked = render(&buffer, OutputFormat::MarkdownPure, &options);
    assert_eq!(linked, "[example.com](<example.com>)");
}

#[test]
fn test_markdown_escapes_punctuation() {
    let mut buffer = TokenBuffer::new();
    buffer.append(Token::text(
        "1. this is not a list! \
         [and this is not a URL](http://example.com). \
         *not emphasized* and **not bold** \
         Not an HTML entity &amp; \
         <em>Not an HTML tag</em>",
        TextKind::Url,
    ));

    let expected = "1\\. this is not a list\\! \
                    \\[and this is not a URL\\]\\(http\\:\\/\\/example\\.com\\)\\. \
                    \\*not emphasized\\* and \\*\\*not bold\\*\\* \
                    Not an HTML entity \\&amp\\; \
                    \\<em\\>Not an HTML tag\\<\\/em\\>";
    for format in [OutputFormat::Markdown, OutputFormat::MarkdownPure] {
        assert_eq!(render(&buffer, format, &RenderOptions::default()), expected);
    }
}

#[test]
fn test_markdown_links_are_escaped() {
    let mut buffer = TokenBuffer::new();
    buffer.append(Token::text("https://example.com/a<)>b[c*]", TextKind::Url));
    let options = RenderOptions {
        convert_links: true,
        ..Default::default()
    };
    for format in [OutputFormat::Markdown, OutputFormat::MarkdownPure] {
        assert_eq!(
            render(&buffer, format, &options),
            "[https://example.com/a<)>b\\[c*\\]](<https://example.com/a\\<)\\>b[c*]>)"
        );
    }
}

#[test]
fn test_doi_links() {
    let mut buffer = TokenBuffer::new();
    buffer.append(Token::text("00.0000/00000000", TextKind::Doi));
    let convert = RenderOptions {
        convert_links: true,
        ..Default::default()
    };

    assert_eq!(
        render(&buffer, OutputFormat::Markdown, &RenderOptions::default()),
        "00\\.0000\\/00000000"
    );
    assert_eq!(
        render(&buffer, OutputFormat::Markdown, &convert),
        "[00.0000/00000000](<https://doi.org/00.0000/00000000>)"
    );
    assert_eq!(
        render(&buffer, OutputFormat::Html, &convert),
        "<a href=\"https://doi.org/00.0000/00000000\">00.0000/00000000</a>"
    );
    assert_eq!(
        render(&buffer, OutputFormat::Html, &RenderOptions::default()),
        "00.0000/00000000"
    );
    assert_eq!(
        render(&buffer, OutputFormat::PlainText, &convert),
        "00.0000/00000000"
    );
}

#[test]
fn test_html_escapes_text() {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "Smith & <Jones>", italic());
    assert_eq!(
        render(&buffer, OutputFormat::Html, &RenderOptions::default()),
        "<span style=\"font-style: italic\">Smith &amp; &lt;Jones&gt;</span>"
    );
}

#[test]
fn test_display_groups_close_spans() {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "Title", italic());
    buffer.append(Token::open_group(DisplayKind::Block));
    text(&mut buffer, "Body", italic());
    buffer.append(Token::close_group(DisplayKind::Block));

    assert_eq!(
        render(&buffer, OutputFormat::Html, &RenderOptions::default()),
        "<span style=\"font-style: italic\">Title</span><div class=\"csl-block\"><span style=\"font-style: italic\">Body</span></div>"
    );
    assert_eq!(
        render(&buffer, OutputFormat::PlainText, &RenderOptions::default()),
        "Title\nBody"
    );
    assert_eq!(
        render(&buffer, OutputFormat::MarkdownPure, &RenderOptions::default()),
        "*Title*\n*Body*"
    );
    assert_eq!(
        render(&buffer, OutputFormat::Markdown, &RenderOptions::default()),
        "*Title*<div class=\"csl-block\">*Body*</div>"
    );
}

#[test]
fn test_markdown_display_group_kinds() {
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "A", FormattingAttributes::UNSET);
    buffer.append(Token::open_group(DisplayKind::Indent));
    text(&mut buffer, "B", FormattingAttributes::UNSET);
    buffer.append(Token::close_group(DisplayKind::Indent));
    buffer.append(Token::open_group(DisplayKind::LeftMargin));
    text(&mut buffer, "C", FormattingAttributes::UNSET);
    buffer.append(Token::close_group(DisplayKind::LeftMargin));

    assert_eq!(
        render(&buffer, OutputFormat::Markdown, &RenderOptions::default()),
        "A<div class=\"csl-indent\">B</div><div class=\"csl-left-margin\">C</div>"
    );
    // only blocks and indents start a new line in pure markdown
    assert_eq!(
        render(&buffer, OutputFormat::MarkdownPure, &RenderOptions::default()),
        "A\nBC"
    );
}

#[test]
fn test_explicit_normal_overrides_inherited_style() {
    let mut inner = TokenBuffer::new();
    text(&mut inner, "Roman", FormattingAttributes::new().with_font_style(FontStyle::Normal));
    let mut buffer = TokenBuffer::new();
    text(&mut buffer, "In ", FormattingAttributes::UNSET);
    buffer.append_buffer(&inner.wrap(italic()));

    assert_eq!(
        render(&buffer, OutputFormat::Html, &RenderOptions::default()),
        "In <span style=\"font-style: normal\">Roman</span>"
    );
    assert_eq!(
        render(&buffer, OutputFormat::Markdown, &RenderOptions::default()),
        "In Roman"
    );
}

#[test]
fn test_empty_buffer_renders_empty() {
    for format in [
        OutputFormat::PlainText,
        OutputFormat::Html,
        OutputFormat::Markdown,
        OutputFormat::MarkdownPure,
    ] {
        assert_eq!(render(&TokenBuffer::new(), format, &RenderOptions::default()), "");
    }
}

#[test]
fn test_punctuation_in_quote_option() {
    let mut buffer = TokenBuffer::new();
    buffer
        .append(Token::text("“", TextKind::OpenQuote))
        .append(Token::text("Title", TextKind::Text))
        .append(Token::text("”", TextKind::CloseQuote))
        .append(Token::text(". ", TextKind::Suffix));

    let options = RenderOptions {
        punctuation_in_quote: true,
        ..Default::default()
    };
    assert_eq!(
        render(&buffer, OutputFormat::PlainText, &options),
        "“Title.” "
    );
    assert_eq!(
        render(&buffer, OutputFormat::PlainText, &RenderOptions::default()),
        "“Title”. "
    );
}
