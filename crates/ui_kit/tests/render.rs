//! Server-side rendering checks for the primitive set.

use leptos::ssr::render_to_string;
use leptos::*;
use ui_kit::prelude::*;

fn render(f: impl FnOnce() -> View + 'static) -> String {
    render_to_string(f).to_string()
}

#[test]
fn box_defaults_compose_base_and_default_variant_classes() {
    let html = render(|| view! { <Box>"content"</Box> }.into_view());
    assert!(
        html.contains(r#"class="box box--padding-none box--radius-none""#),
        "unexpected box classes: {html}"
    );
}

#[test]
fn box_caller_class_is_last_token() {
    let html = render(|| {
        view! {
            <Box padding=BoxPadding::Md border=true background=BoxBackground::Muted class="x">
                "content"
            </Box>
        }
        .into_view()
    });
    assert!(
        html.contains(r#"class="box box--padding-md box--border box--bg-muted box--radius-none x""#),
        "caller class must come last: {html}"
    );
}

#[test]
fn stack_defaults_and_row_wrap() {
    let html = render(|| view! { <Stack>"a"</Stack> }.into_view());
    assert!(html.contains(r#"class="stack stack--column stack--gap-md""#));

    let html = render(|| {
        view! { <Stack direction=StackDirection::Row wrap=true>"a"</Stack> }.into_view()
    });
    assert!(html.contains("stack--row"));
    assert!(html.contains("stack--wrap"));

    // wrap is ignored for column direction
    let html = render(|| view! { <Stack wrap=true>"a"</Stack> }.into_view());
    assert!(!html.contains("stack--wrap"));
}

#[test]
fn container_renders_size_and_flags() {
    let html = render(|| {
        view! { <Container size=ContainerSize::Md centered=true>"c"</Container> }.into_view()
    });
    assert!(html.contains(r#"class="container container--md container--centered""#));
}

#[test]
fn card_default_variant_contributes_no_token() {
    let html = render(|| view! { <Card>"c"</Card> }.into_view());
    assert!(html.contains(r#"class="card card--padding-md""#));
    assert!(html.contains("<section"));

    let html = render(|| {
        view! {
            <Card variant=CardVariant::Outlined padding=CardPadding::None>
                <CardHeader>"h"</CardHeader>
                <CardBody>"b"</CardBody>
                <CardFooter>"f"</CardFooter>
            </Card>
        }
        .into_view()
    });
    assert!(html.contains(r#"class="card card--outlined card--padding-none""#));
    assert!(html.contains(r#"class="card__header""#));
    assert!(html.contains(r#"class="card__body""#));
    assert!(html.contains(r#"class="card__footer""#));
}

#[test]
fn text_renders_tag_variant_and_align() {
    let html = render(|| {
        view! {
            <Text tag=TextTag::H1 variant=TextVariant::Title align=TextAlign::Center>
                "Home"
            </Text>
        }
        .into_view()
    });
    assert!(html.contains("<h1"));
    assert!(html.contains(r#"class="text text--title text--align-center""#));
}

#[test]
fn link_forwards_href_and_merges_class() {
    let html =
        render(|| view! { <Link href="/docs" class="quiet">"Docs"</Link> }.into_view());
    assert!(html.contains(r#"href="/docs""#));
    assert!(html.contains(r#"class="link quiet""#));
}

#[test]
fn button_defaults() {
    let html = render(|| view! { <Button>"Go"</Button> }.into_view());
    assert!(html.contains(r#"class="button button--primary button--md""#));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains(r#"aria-disabled="false""#));
    assert!(html.contains(r#"aria-busy="false""#));
    assert!(!html.contains("disabled "));
    assert!(!html.contains("button__spinner"));
}

#[test]
fn loading_button_suppresses_icons_and_disables() {
    let html = render(|| {
        view! {
            <Button
                loading=true
                left_icon=ViewFn::from(|| view! { <span class="icon">"*"</span> })
                right_icon=ViewFn::from(|| view! { <span class="icon">"*"</span> })
            >
                "Login"
            </Button>
        }
        .into_view()
    });
    assert!(html.contains("button--loading"));
    assert!(html.contains("disabled"));
    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(html.contains(r#"aria-busy="true""#));
    assert_eq!(html.matches("button__spinner").count(), 1);
    assert!(!html.contains("button__icon-left"));
    assert!(!html.contains("button__icon-right"));
}

#[test]
fn non_loading_button_renders_icon_slots() {
    let html = render(|| {
        view! {
            <Button left_icon=ViewFn::from(|| view! { <span>"*"</span> })>"Go"</Button>
        }
        .into_view()
    });
    assert!(html.contains("button__icon-left"));
    assert!(!html.contains("button__spinner"));
}

#[test]
fn input_invalid_flag_sets_class_and_aria() {
    let html = render(|| view! { <Input invalid=true /> }.into_view());
    assert!(html.contains(r#"class="input input--md input--invalid""#));
    assert!(html.contains(r#"aria-invalid="true""#));

    let html = render(|| view! { <Input /> }.into_view());
    assert!(!html.contains("aria-invalid"));
}

#[test]
fn field_id_derivation_from_name_or_id() {
    let html = render(|| view! { <Field name="email" label="Email" /> }.into_view());
    assert!(html.contains(r#"id="email""#), "{html}");
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"for="email""#));

    let html = render(|| view! { <Field id="email" /> }.into_view());
    assert!(html.contains(r#"id="email""#));
    // name falls back to the explicit id
    assert!(html.contains(r#"name="email""#));
}

#[test]
fn field_generated_ids_are_distinct_across_renders() {
    let extract = |html: &str| -> String {
        let start = html.find(r#"id="field-"#).expect("generated id") + 4;
        let rest = &html[start..];
        let end = rest.find('"').expect("closing quote");
        rest[..end].to_owned()
    };
    let first = extract(&render(|| view! { <Field /> }.into_view()));
    let second = extract(&render(|| view! { <Field /> }.into_view()));
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn field_error_wins_over_hint() {
    let html = render(|| {
        view! { <Field name="email" hint="h" error="e" /> }.into_view()
    });
    assert!(html.contains(r#"aria-describedby="email-error""#), "{html}");
    assert!(!html.contains("email-hint"));
    assert!(!html.contains("field__hint"));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains(r#"aria-invalid="true""#));
}

#[test]
fn field_hint_renders_without_error() {
    let html = render(|| view! { <Field name="email" hint="h" /> }.into_view());
    assert!(html.contains(r#"aria-describedby="email-hint""#));
    assert!(html.contains(r#"class="field__hint""#));
    assert!(!html.contains("field__error"));
    assert!(!html.contains("aria-invalid"));
}

#[test]
fn field_required_marks_label_and_control() {
    let html = render(|| {
        view! { <Field name="email" label="Email" required=true /> }.into_view()
    });
    assert!(html.contains("Email *"));
    assert!(html.contains(r#"aria-required="true""#));
}

#[test]
fn field_injects_attrs_into_supplied_control() {
    let control: ControlBuilder = std::boxed::Box::new(|attrs: ControlAttrs| {
        attrs
            .apply(leptos::html::input().attr("type", "email"))
            .into_view()
    });
    let html = render(move || {
        view! { <Field name="email" error="bad" control=control /> }.into_view()
    });
    assert!(html.contains(r#"id="email""#), "{html}");
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"aria-describedby="email-error""#));
    assert!(html.contains(r#"aria-invalid="true""#));
}

#[test]
fn form_padding_and_forwarding() {
    let html = render(|| {
        view! { <Form method="post" action="/">"x"</Form> }.into_view()
    });
    assert!(html.contains(r#"class="form form--padding-md""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"action="/""#));

    let html = render(|| view! { <Form padding=FormPadding::None>"x"</Form> }.into_view());
    assert!(html.contains(r#"class="form""#));
}

#[test]
fn form_group_is_a_large_gap_column_stack() {
    let html = render(|| view! { <FormGroup>"x"</FormGroup> }.into_view());
    assert!(html.contains(r#"class="stack stack--column stack--gap-lg""#));
}

#[test]
fn form_field_binds_state_value_and_error() {
    let state = FormState::new()
        .with_value("email", "a@b.com")
        .with_error("email", "Email inválido");
    let html = render(move || {
        view! {
            <FormField
                state=state
                name="email"
                label="Email"
                input_type="email"
                required=true
                autocomplete="email"
            />
        }
        .into_view()
    });
    assert!(html.contains(r#"value="a@b.com""#), "{html}");
    assert!(html.contains("Email inválido"));
    assert!(html.contains(r#"aria-invalid="true""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"autocomplete="email""#));
    assert!(html.contains(r#"type="email""#));
}
