use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing step for [`Input`].
pub enum InputSize {
    /// Dense input.
    Sm,
    /// Default input.
    Md,
    /// Large input.
    Lg,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Md
    }
}

impl InputSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "input--sm",
            Self::Md => "input--md",
            Self::Lg => "input--lg",
        }
    }
}

fn input_class(size: InputSize, invalid: bool, class: Option<&str>) -> String {
    cn([
        Some("input"),
        Some(size.class()),
        invalid.then_some("input--invalid"),
        class,
    ])
}

#[component]
/// Text input primitive.
pub fn Input(
    #[prop(default = InputSize::Md)] size: InputSize,
    #[prop(default = false)] invalid: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] described_by: Option<String>,
    #[prop(default = false)] required: bool,
    #[prop(default = false)] disabled: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    html::input()
        .attr("type", input_type)
        .attr("class", input_class(size, invalid, class.as_deref()))
        .attr("id", id)
        .attr("name", name)
        .attr("value", value)
        .attr("placeholder", placeholder)
        .attr("autocomplete", autocomplete)
        .attr("aria-describedby", described_by)
        .attr("aria-invalid", invalid.then_some("true"))
        .attr("aria-required", required.then_some("true"))
        .attr("disabled", disabled)
}

/// Attribute record [`Field`] injects onto its form control.
///
/// The record is applied last, so it overrides any conflicting attribute
/// the control already set.
#[derive(Debug, Clone)]
pub struct ControlAttrs {
    /// Control id, also referenced by the field label.
    pub id: String,
    /// Form-data name; unset when the field got neither id nor name.
    pub name: Option<String>,
    /// Space-joined ids of the error/hint elements describing the control.
    pub described_by: Option<String>,
    /// Whether an error message is present.
    pub invalid: bool,
    /// Whether the field is required.
    pub required: bool,
}

impl ControlAttrs {
    /// Merges the record onto an element, overriding conflicting attributes.
    pub fn apply<El>(self, el: HtmlElement<El>) -> HtmlElement<El>
    where
        El: ElementDescriptor + 'static,
    {
        el.attr("id", self.id)
            .attr("name", self.name)
            .attr("aria-describedby", self.described_by)
            .attr("aria-invalid", self.invalid.then_some("true"))
            .attr("aria-required", self.required.then_some("true"))
    }
}

/// Caller-supplied control constructor; receives the computed
/// [`ControlAttrs`] and returns the rendered control.
pub type ControlBuilder = std::boxed::Box<dyn FnOnce(ControlAttrs) -> View>;

static FIELD_ID: AtomicUsize = AtomicUsize::new(0);

fn next_field_id() -> String {
    format!("field-{}", FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

struct FieldConfig {
    label: Option<String>,
    label_suffix: Option<ViewFn>,
    hint: Option<String>,
    error: Option<String>,
    required: bool,
    id: Option<String>,
    name: Option<String>,
    control: Option<ControlBuilder>,
    class: Option<String>,
}

fn render_field(cfg: FieldConfig) -> View {
    // id falls back to name, then to a generated one; name falls back to id.
    let control_id = match (&cfg.id, &cfg.name) {
        (Some(id), _) => id.clone(),
        (None, Some(name)) => name.clone(),
        (None, None) => next_field_id(),
    };
    let control_name = cfg.name.or(cfg.id);

    let invalid = cfg.error.is_some();
    let mut described_by_parts = Vec::new();
    if invalid {
        described_by_parts.push(format!("{control_id}-error"));
    }
    // Error wins over hint: the hint is neither rendered nor referenced
    // while an error message is present.
    if cfg.hint.is_some() && !invalid {
        described_by_parts.push(format!("{control_id}-hint"));
    }
    let described_by = if described_by_parts.is_empty() {
        None
    } else {
        Some(described_by_parts.join(" "))
    };

    let attrs = ControlAttrs {
        id: control_id.clone(),
        name: control_name,
        described_by,
        invalid,
        required: cfg.required,
    };

    let control_view = match cfg.control {
        Some(build) => build(attrs),
        None => {
            let class = input_class(InputSize::Md, attrs.invalid, None);
            attrs
                .apply(html::input().attr("type", "text").attr("class", class))
                .into_view()
        }
    };

    let label_view = cfg.label.map(|text| {
        let text = if cfg.required {
            format!("{text} *")
        } else {
            text
        };
        let label_el = html::label()
            .attr("for", control_id.clone())
            .attr("class", "field__label")
            .child(text);
        match cfg.label_suffix {
            Some(suffix) => view! {
                <div class="field__label-row">
                    {label_el}
                    <span class="field__label-suffix">{suffix.run()}</span>
                </div>
            }
            .into_view(),
            None => label_el.into_view(),
        }
    });

    let hint_view = (!invalid)
        .then_some(cfg.hint)
        .flatten()
        .map(|hint_text| {
            view! { <span id=format!("{control_id}-hint") class="field__hint">{hint_text}</span> }
        });

    let error_view = cfg.error.map(|message| {
        view! {
            <span id=format!("{control_id}-error") class="field__error" role="alert">
                {message}
            </span>
        }
    });

    let class = cn([Some("field"), cfg.class.as_deref()]);
    html::div()
        .attr("class", class)
        .child(label_view)
        .child(control_view)
        .child(hint_view)
        .child(error_view)
        .into_view()
}

#[component]
/// Labeled form field wrapper with accessibility wiring.
///
/// Computes the control id (explicit id, else name, else generated),
/// derives the form-data name from whichever of id/name was supplied, and
/// injects id/name/`aria-describedby`/`aria-invalid`/`aria-required` onto
/// the control. A caller-supplied `control` builder receives the computed
/// [`ControlAttrs`]; without one, a default text [`Input`] is rendered.
pub fn Field(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_suffix: Option<ViewFn>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: Option<String>,
    #[prop(default = false)] required: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] control: Option<ControlBuilder>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    render_field(FieldConfig {
        label,
        label_suffix,
        hint,
        error,
        required,
        id,
        name,
        control,
        class,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Internal padding scale for [`Form`].
pub enum FormPadding {
    /// No padding; contributes no class token.
    None,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for FormPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl FormPadding {
    fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Md => "form--padding-md",
            Self::Lg => "form--padding-lg",
        }
    }
}

#[component]
/// Native form boundary with a padding variant. Method and action are
/// forwarded verbatim.
pub fn Form(
    #[prop(default = FormPadding::Md)] padding: FormPadding,
    #[prop(optional, into)] method: Option<String>,
    #[prop(optional, into)] action: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn([Some("form"), Some(padding.class()), class.as_deref()]);
    html::form()
        .attr("method", method)
        .attr("action", action)
        .attr("class", class)
        .child(children())
}

#[component]
/// Vertical field group: a column [`Stack`] with a large gap.
pub fn FormGroup(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Stack gap=StackGap::Lg class=class.unwrap_or_default()>
            {children()}
        </Stack>
    }
}

#[component]
/// One named field of a [`FormState`] bound to a [`Field`] + [`Input`]
/// pair. Value and error come from the state; no validation happens here.
pub fn FormField(
    /// Form state owning the field values and errors.
    state: FormState,
    /// Field name within the form state and submitted form data.
    #[prop(into)]
    name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_suffix: Option<ViewFn>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(default = false)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = InputSize::Md)] size: InputSize,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(default = false)] disabled: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let field = state.field(&name);
    let error = field.error.clone();
    let value = field.value;

    let control: ControlBuilder = std::boxed::Box::new(move |attrs: ControlAttrs| {
        let class = input_class(size, attrs.invalid, None);
        let el = html::input()
            .attr("type", input_type)
            .attr("class", class)
            .attr("value", value)
            .attr("placeholder", placeholder)
            .attr("autocomplete", autocomplete)
            .attr("disabled", disabled);
        attrs.apply(el).into_view()
    });

    render_field(FieldConfig {
        label,
        label_suffix,
        hint,
        error,
        required,
        id: None,
        name: Some(field.name),
        control: Some(control),
        class,
    })
}
