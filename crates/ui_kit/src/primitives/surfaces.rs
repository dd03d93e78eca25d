use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual treatment for [`Card`].
pub enum CardVariant {
    /// Filled card surface (default); contributes no extra token.
    Default,
    /// Border instead of fill.
    Outlined,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Outlined => "card--outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Internal padding scale for [`Card`].
pub enum CardPadding {
    /// No padding; caller lays out the interior.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl CardPadding {
    fn class(self) -> &'static str {
        match self {
            Self::None => "card--padding-none",
            Self::Sm => "card--padding-sm",
            Self::Md => "card--padding-md",
            Self::Lg => "card--padding-lg",
        }
    }
}

#[component]
/// Sectioning surface, optionally composed with [`CardHeader`],
/// [`CardBody`] and [`CardFooter`].
pub fn Card(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = CardPadding::Md)] padding: CardPadding,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([
        Some("card"),
        Some(variant.class()),
        Some(padding.class()),
        class.as_deref(),
    ]);
    html::section().attr("class", class).child(children())
}

#[component]
/// Fixed header slot of a [`Card`].
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([Some("card__header"), class.as_deref()]);
    html::div().attr("class", class).child(children())
}

#[component]
/// Main content slot of a [`Card`].
pub fn CardBody(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([Some("card__body"), class.as_deref()]);
    html::div().attr("class", class).child(children())
}

#[component]
/// Fixed footer slot of a [`Card`].
pub fn CardFooter(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([Some("card__footer"), class.as_deref()]);
    html::div().attr("class", class).child(children())
}
