use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typographic role for [`Text`].
pub enum TextVariant {
    /// Page or section title.
    Title,
    /// Supporting subtitle.
    Subtitle,
    /// Body copy (default).
    Body,
    /// De-emphasized copy.
    Muted,
}

impl Default for TextVariant {
    fn default() -> Self {
        Self::Body
    }
}

impl TextVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Title => "text--title",
            Self::Subtitle => "text--subtitle",
            Self::Body => "text--body",
            Self::Muted => "text--muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal alignment for [`Text`]; contributes no class when unset.
pub enum TextAlign {
    /// Align to the start.
    Start,
    /// Center text.
    Center,
    /// Align to the end.
    End,
}

impl TextAlign {
    fn class(self) -> &'static str {
        match self {
            Self::Start => "text--align-start",
            Self::Center => "text--align-center",
            Self::End => "text--align-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Root element for [`Text`].
pub enum TextTag {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<p>` (default).
    P,
    /// `<span>`.
    Span,
}

impl Default for TextTag {
    fn default() -> Self {
        Self::P
    }
}

impl TextTag {
    fn build(self) -> HtmlElement<AnyElement> {
        match self {
            Self::H1 => html::h1().into_any(),
            Self::H2 => html::h2().into_any(),
            Self::H3 => html::h3().into_any(),
            Self::P => html::p().into_any(),
            Self::Span => html::span().into_any(),
        }
    }
}

#[component]
/// Typography primitive.
pub fn Text(
    #[prop(default = TextVariant::Body)] variant: TextVariant,
    #[prop(optional)] align: Option<TextAlign>,
    #[prop(default = TextTag::P)] tag: TextTag,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([
        Some("text"),
        Some(variant.class()),
        align.map(TextAlign::class),
        class.as_deref(),
    ]);
    tag.build().attr("class", class).child(children())
}

#[component]
/// Styled anchor. Href, target and rel are forwarded verbatim.
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] rel: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([Some("link"), class.as_deref()]);
    html::a()
        .attr("href", href)
        .attr("target", target)
        .attr("rel", rel)
        .attr("class", class)
        .child(children())
}
