use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Internal padding scale for [`Box`].
pub enum BoxPadding {
    /// No padding (default).
    None,
    /// Compact padding.
    Sm,
    /// Default spacing step.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for BoxPadding {
    fn default() -> Self {
        Self::None
    }
}

impl BoxPadding {
    fn class(self) -> &'static str {
        match self {
            Self::None => "box--padding-none",
            Self::Sm => "box--padding-sm",
            Self::Md => "box--padding-md",
            Self::Lg => "box--padding-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Background treatment for [`Box`].
pub enum BoxBackground {
    /// Transparent (default); contributes no class token.
    None,
    /// Page background.
    Default,
    /// Muted surface.
    Muted,
    /// Card surface.
    Card,
}

impl Default for BoxBackground {
    fn default() -> Self {
        Self::None
    }
}

impl BoxBackground {
    fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Default => "box--bg-default",
            Self::Muted => "box--bg-muted",
            Self::Card => "box--bg-card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Corner radius scale for [`Box`].
pub enum BoxRadius {
    /// Square corners (default).
    None,
    /// Slightly rounded.
    Sm,
    /// Default rounding.
    Md,
    /// Strongly rounded.
    Lg,
}

impl Default for BoxRadius {
    fn default() -> Self {
        Self::None
    }
}

impl BoxRadius {
    fn class(self) -> &'static str {
        match self {
            Self::None => "box--radius-none",
            Self::Sm => "box--radius-sm",
            Self::Md => "box--radius-md",
            Self::Lg => "box--radius-lg",
        }
    }
}

#[component]
/// Generic block-level container with padding, border, background and
/// radius variants.
pub fn Box(
    #[prop(default = BoxPadding::None)] padding: BoxPadding,
    #[prop(default = false)] border: bool,
    #[prop(default = BoxBackground::None)] background: BoxBackground,
    #[prop(default = BoxRadius::None)] radius: BoxRadius,
    #[prop(default = RootTag::Div)] tag: RootTag,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = cn([
        Some("box"),
        Some(padding.class()),
        border.then_some("box--border"),
        Some(background.class()),
        Some(radius.class()),
        class.as_deref(),
    ]);
    with_children(tag.build().attr("class", class), children)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Flow axis for [`Stack`].
pub enum StackDirection {
    /// Vertical flow (default).
    Column,
    /// Horizontal flow.
    Row,
}

impl Default for StackDirection {
    fn default() -> Self {
        Self::Column
    }
}

impl StackDirection {
    fn class(self) -> &'static str {
        match self {
            Self::Column => "stack--column",
            Self::Row => "stack--row",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gap scale for [`Stack`].
pub enum StackGap {
    /// Tightest gap.
    Xs,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
    /// Largest gap.
    Xl,
}

impl Default for StackGap {
    fn default() -> Self {
        Self::Md
    }
}

impl StackGap {
    fn class(self) -> &'static str {
        match self {
            Self::Xs => "stack--gap-xs",
            Self::Sm => "stack--gap-sm",
            Self::Md => "stack--gap-md",
            Self::Lg => "stack--gap-lg",
            Self::Xl => "stack--gap-xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment for [`Stack`]; contributes no class when unset.
pub enum StackAlign {
    /// Align to the start.
    Start,
    /// Center items.
    Center,
    /// Align to the end.
    End,
    /// Stretch to fill.
    Stretch,
}

impl StackAlign {
    fn class(self) -> &'static str {
        match self {
            Self::Start => "stack--align-start",
            Self::Center => "stack--align-center",
            Self::End => "stack--align-end",
            Self::Stretch => "stack--align-stretch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution for [`Stack`]; contributes no class when unset.
pub enum StackJustify {
    /// Pack to the start.
    Start,
    /// Center items.
    Center,
    /// Pack to the end.
    End,
    /// Space between items.
    Between,
}

impl StackJustify {
    fn class(self) -> &'static str {
        match self {
            Self::Start => "stack--justify-start",
            Self::Center => "stack--justify-center",
            Self::End => "stack--justify-end",
            Self::Between => "stack--justify-between",
        }
    }
}

#[component]
/// One-dimensional flex layout. `wrap` only applies to row direction.
pub fn Stack(
    #[prop(default = StackDirection::Column)] direction: StackDirection,
    #[prop(default = StackGap::Md)] gap: StackGap,
    #[prop(optional)] align: Option<StackAlign>,
    #[prop(optional)] justify: Option<StackJustify>,
    #[prop(default = false)] wrap: bool,
    #[prop(default = RootTag::Div)] tag: RootTag,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = cn([
        Some("stack"),
        Some(direction.class()),
        Some(gap.class()),
        align.map(StackAlign::class),
        justify.map(StackJustify::class),
        (direction == StackDirection::Row && wrap).then_some("stack--wrap"),
        class.as_deref(),
    ]);
    with_children(tag.build().attr("class", class), children)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Max-width step for [`Container`].
pub enum ContainerSize {
    /// 640px.
    Sm,
    /// 768px.
    Md,
    /// 1024px (default).
    Lg,
    /// 1280px.
    Xl,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::Lg
    }
}

impl ContainerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "container--sm",
            Self::Md => "container--md",
            Self::Lg => "container--lg",
            Self::Xl => "container--xl",
        }
    }
}

#[component]
/// Width-limited page container.
pub fn Container(
    #[prop(default = ContainerSize::Lg)] size: ContainerSize,
    #[prop(default = false)] centered: bool,
    #[prop(default = false)] fluid: bool,
    #[prop(default = RootTag::Div)] tag: RootTag,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = cn([
        Some("container"),
        Some(size.class()),
        centered.then_some("container--centered"),
        fluid.then_some("container--fluid"),
        class.as_deref(),
    ]);
    with_children(tag.build().attr("class", class), children)
}
