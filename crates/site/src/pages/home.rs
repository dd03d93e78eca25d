//! Home screen shown to authenticated visitors.

use leptos::*;
use ui_kit::prelude::*;

pub(crate) fn home_page() -> String {
    let body = leptos::ssr::render_to_string(|| view! { <HomePage /> }).to_string();
    super::shell("Dev Vault", "Bem-vindo ao Dev Vault", &body)
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Container size=ContainerSize::Md centered=true>
                <Stack gap=StackGap::Lg>
                    <Stack gap=StackGap::Sm>
                        <Text tag=TextTag::H1 variant=TextVariant::Title>"Home"</Text>
                        <Text variant=TextVariant::Subtitle>"Bem-vindo ao Dev Vault"</Text>
                    </Stack>
                    <form method="post" action="/" class="home__logout">
                        <input type="hidden" name="_action" value="logout"/>
                        <Button button_type="submit" variant=ButtonVariant::Secondary>
                            "Sair"
                        </Button>
                    </form>
                </Stack>
            </Container>
        </main>
    }
}
