//! Login screen, shown on `/` for anonymous visitors and on `/login`.

use leptos::*;
use ui_kit::prelude::*;

/// Login screen under the index route's metadata.
pub(crate) fn index_login_page(state: FormState) -> String {
    super::shell("Dev Vault", "Bem-vindo ao Dev Vault", &login_screen(state))
}

/// Login screen under the dedicated `/login` metadata.
pub(crate) fn login_page(state: FormState) -> String {
    super::shell("Login", "Login to your Acme Inc account", &login_screen(state))
}

fn login_screen(state: FormState) -> String {
    leptos::ssr::render_to_string(move || {
        view! {
            <main class="login-screen">
                <Container size=ContainerSize::Md>
                    <LoginForm state=state />
                </Container>
            </main>
        }
    })
    .to_string()
}

#[component]
fn LoginForm(state: FormState) -> impl IntoView {
    let form_error = state.form_error().map(str::to_owned);
    let submitting = state.is_submitting();
    let email_state = state.clone();
    let password_state = state;

    view! {
        <Stack gap=StackGap::Lg class="login-form">
            <Card padding=CardPadding::None class="login-form__card">
                <Form padding=FormPadding::Md method="post" action="/">
                    <FormGroup>
                        <Stack gap=StackGap::Sm align=StackAlign::Center>
                            <Text tag=TextTag::H1 variant=TextVariant::Title>
                                "Welcome back"
                            </Text>
                            <Text variant=TextVariant::Subtitle align=TextAlign::Center>
                                "Login to your Acme Inc account"
                            </Text>
                        </Stack>
                        {form_error
                            .map(|message| {
                                view! { <p class="form__error" role="alert">{message}</p> }
                            })}
                        <FormField
                            state=email_state
                            name="email"
                            label="Email"
                            input_type="email"
                            required=true
                            autocomplete="email"
                            placeholder="voce@exemplo.com"
                        />
                        <FormField
                            state=password_state
                            name="password"
                            label="Senha"
                            input_type="password"
                            required=true
                            autocomplete="current-password"
                        />
                        <Button button_type="submit" loading=submitting>"Login"</Button>
                    </FormGroup>
                </Form>
                <Box background=BoxBackground::Muted class="login-form__image-panel">
                    <img src="/logo.png" alt="" class="login-form__image"/>
                </Box>
            </Card>
        </Stack>
    }
}
