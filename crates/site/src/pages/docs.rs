//! Living documentation gallery for the primitive set.

use leptos::*;
use ui_kit::prelude::*;

pub(crate) fn docs_page() -> String {
    let body = leptos::ssr::render_to_string(|| view! { <DocsPage /> }).to_string();
    super::shell(
        "UI Kit",
        "Guia de uso dos componentes do Dev Vault",
        &body,
    )
}

#[component]
fn DocSection(
    #[prop(into)] title: String,
    /// One-line guidance on when to reach for this primitive.
    #[prop(into)]
    when: String,
    /// Usage snippet shown under the examples.
    #[prop(into)]
    how: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card padding=CardPadding::Md class="docs__section">
            <CardHeader>
                <Stack gap=StackGap::Xs>
                    <Text tag=TextTag::H2 variant=TextVariant::Title>{title}</Text>
                    <Text variant=TextVariant::Muted>{when}</Text>
                </Stack>
            </CardHeader>
            <CardBody>
                <Stack gap=StackGap::Md>{children()}</Stack>
            </CardBody>
            <CardFooter>
                <pre class="docs__usage"><code>{how}</code></pre>
            </CardFooter>
        </Card>
    }
}

#[component]
fn DocsPage() -> impl IntoView {
    let demo_state = FormState::new()
        .with_value("email", "voce@exemplo.com")
        .with_error("password", "Informe a senha");

    view! {
        <main class="docs">
            <Container size=ContainerSize::Lg centered=true>
                <Stack gap=StackGap::Xl>
                    <Stack gap=StackGap::Sm>
                        <Text tag=TextTag::H1 variant=TextVariant::Title>"UI Kit"</Text>
                        <Text variant=TextVariant::Subtitle>
                            "Primitivos de interface do Dev Vault, com exemplos de uso."
                        </Text>
                    </Stack>

                    <DocSection
                        title="Container"
                        when="Limita a largura do conteúdo de uma página ou seção."
                        how="<Container size=ContainerSize::Md centered=true>...</Container>"
                    >
                        <Container size=ContainerSize::Sm centered=true class="docs__demo">
                            <Text>"Conteúdo limitado a 640px."</Text>
                        </Container>
                    </DocSection>

                    <DocSection
                        title="Stack"
                        when="Distribui filhos em coluna ou linha com espaçamento uniforme."
                        how="<Stack direction=StackDirection::Row gap=StackGap::Sm wrap=true>...</Stack>"
                    >
                        <Stack direction=StackDirection::Row gap=StackGap::Sm wrap=true>
                            <Box padding=BoxPadding::Sm border=true>"um"</Box>
                            <Box padding=BoxPadding::Sm border=true>"dois"</Box>
                            <Box padding=BoxPadding::Sm border=true>"três"</Box>
                        </Stack>
                    </DocSection>

                    <DocSection
                        title="Box"
                        when="Bloco genérico com padding, borda, fundo e raio configuráveis."
                        how="<Box padding=BoxPadding::Md border=true background=BoxBackground::Muted radius=BoxRadius::Md>...</Box>"
                    >
                        <Box
                            padding=BoxPadding::Md
                            border=true
                            background=BoxBackground::Muted
                            radius=BoxRadius::Md
                        >
                            "Superfície neutra."
                        </Box>
                    </DocSection>

                    <DocSection
                        title="Text e Link"
                        when="Tipografia com papel semântico independente da tag."
                        how="<Text tag=TextTag::H3 variant=TextVariant::Title>...</Text>"
                    >
                        <Text tag=TextTag::H3 variant=TextVariant::Title>"Título"</Text>
                        <Text variant=TextVariant::Subtitle>"Subtítulo"</Text>
                        <Text>"Corpo de texto padrão."</Text>
                        <Text variant=TextVariant::Muted>"Texto de apoio."</Text>
                        <Link href="/ui-kit-docs">"Um link estilizado"</Link>
                    </DocSection>

                    <DocSection
                        title="Card"
                        when="Superfície destacada com cabeçalho, corpo e rodapé opcionais."
                        how="<Card variant=CardVariant::Outlined><CardHeader>...</CardHeader><CardBody>...</CardBody></Card>"
                    >
                        <Card variant=CardVariant::Outlined>
                            <CardHeader>
                                <Text variant=TextVariant::Subtitle>"Cabeçalho"</Text>
                            </CardHeader>
                            <CardBody>
                                <Text>"Corpo do cartão."</Text>
                            </CardBody>
                            <CardFooter>
                                <Text variant=TextVariant::Muted>"Rodapé"</Text>
                            </CardFooter>
                        </Card>
                    </DocSection>

                    <DocSection
                        title="Button"
                        when="Ações. O estado loading troca os ícones por um spinner e desabilita o controle."
                        how="<Button variant=ButtonVariant::Secondary size=ButtonSize::Sm loading=submitting>...</Button>"
                    >
                        <Stack direction=StackDirection::Row gap=StackGap::Sm wrap=true>
                            <Button>"Primary"</Button>
                            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                            <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                            <Button variant=ButtonVariant::Danger>"Danger"</Button>
                        </Stack>
                        <Stack direction=StackDirection::Row gap=StackGap::Sm wrap=true>
                            <Button size=ButtonSize::Sm>"Pequeno"</Button>
                            <Button size=ButtonSize::Lg>"Grande"</Button>
                            <Button loading=true>"Enviando"</Button>
                            <Button disabled=true>"Desabilitado"</Button>
                        </Stack>
                    </DocSection>

                    <DocSection
                        title="Field"
                        when="Rotula um controle e conecta dica, erro e atributos ARIA pelo id."
                        how="<Field name=\"email\" label=\"Email\" hint=\"...\" required=true />"
                    >
                        <Field
                            name="docs-hint"
                            label="Com dica"
                            hint="A dica some quando há erro."
                        />
                        <Field
                            name="docs-error"
                            label="Com erro"
                            hint="Esta dica não aparece."
                            error="Valor inválido"
                            required=true
                        />
                    </DocSection>

                    <DocSection
                        title="Form, FormGroup e FormField"
                        when="Formulários ligados a um FormState construído pela rota."
                        how="<FormField state=state name=\"email\" label=\"Email\" input_type=\"email\" />"
                    >
                        <Form padding=FormPadding::None>
                            <FormGroup>
                                <FormField
                                    state=demo_state.clone()
                                    name="email"
                                    label="Email"
                                    input_type="email"
                                />
                                <FormField
                                    state=demo_state
                                    name="password"
                                    label="Senha"
                                    input_type="password"
                                />
                            </FormGroup>
                        </Form>
                    </DocSection>
                </Stack>
            </Container>
        </main>
    }
}
