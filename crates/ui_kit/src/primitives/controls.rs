use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual emphasis for [`Button`].
pub enum ButtonVariant {
    /// Primary action (default).
    Primary,
    /// Secondary action.
    Secondary,
    /// Quiet, borderless action.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "button--primary",
            Self::Secondary => "button--secondary",
            Self::Ghost => "button--ghost",
            Self::Danger => "button--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing step for [`Button`].
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "button--sm",
            Self::Md => "button--md",
            Self::Lg => "button--lg",
        }
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! { <span class="button__spinner" aria-hidden="true"></span> }
}

#[component]
/// Button primitive with loading state and optional icon slots.
///
/// `disabled` or `loading` makes the control non-interactive and exposes
/// the disabled/busy accessibility state. While loading, a single spinner
/// replaces both icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = false)] loading: bool,
    #[prop(default = false)] disabled: bool,
    #[prop(optional)] left_icon: Option<ViewFn>,
    #[prop(optional)] right_icon: Option<ViewFn>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let is_disabled = disabled || loading;
    let aria_disabled = if is_disabled { "true" } else { "false" };
    let aria_busy = if loading { "true" } else { "false" };
    let class = cn([
        Some("button"),
        Some(variant.class()),
        Some(size.class()),
        loading.then_some("button--loading"),
        class.as_deref(),
    ]);

    html::button()
        .attr("type", button_type)
        .attr("class", class)
        .attr("disabled", is_disabled)
        .attr("aria-disabled", aria_disabled)
        .attr("aria-busy", aria_busy)
        .child(loading.then(|| view! { <Spinner /> }))
        .child((!loading).then(|| {
            left_icon.map(|icon| view! { <span class="button__icon-left">{icon.run()}</span> })
        }))
        .child(children())
        .child((!loading).then(|| {
            right_icon.map(|icon| view! { <span class="button__icon-right">{icon.run()}</span> })
        }))
}
