//! Presentational and composite form primitives.
//!
//! Every primitive composes its class list in a fixed order: base token,
//! variant lookups in prop-declaration order, conditional flags, then the
//! caller-supplied `class` override last, so the caller always wins on
//! conflicting utility classes.

use leptos::html::{self, AnyElement, ElementDescriptor, HtmlElement};
use leptos::*;

use crate::class_name::cn;
use crate::form_state::FormState;

mod controls;
mod forms;
mod layout;
mod surfaces;
mod typography;

pub use controls::{Button, ButtonSize, ButtonVariant};
pub use forms::{
    ControlAttrs, ControlBuilder, Field, Form, FormField, FormGroup, FormPadding, Input, InputSize,
};
pub use layout::{
    Box, BoxBackground, BoxPadding, BoxRadius, Container, ContainerSize, Stack, StackAlign,
    StackDirection, StackGap, StackJustify,
};
pub use surfaces::{Card, CardBody, CardFooter, CardHeader, CardPadding, CardVariant};
pub use typography::{Link, Text, TextAlign, TextTag, TextVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Root element override for tag-polymorphic primitives.
pub enum RootTag {
    /// `<div>` (default).
    Div,
    /// `<section>`.
    Section,
    /// `<article>`.
    Article,
    /// `<aside>`.
    Aside,
    /// `<main>`.
    Main,
    /// `<header>`.
    Header,
    /// `<footer>`.
    Footer,
    /// `<nav>`.
    Nav,
    /// `<span>`.
    Span,
}

impl Default for RootTag {
    fn default() -> Self {
        Self::Div
    }
}

impl RootTag {
    fn build(self) -> HtmlElement<AnyElement> {
        match self {
            Self::Div => html::div().into_any(),
            Self::Section => html::section().into_any(),
            Self::Article => html::article().into_any(),
            Self::Aside => html::aside().into_any(),
            Self::Main => html::main().into_any(),
            Self::Header => html::header().into_any(),
            Self::Footer => html::footer().into_any(),
            Self::Nav => html::nav().into_any(),
            Self::Span => html::span().into_any(),
        }
    }
}

fn with_children(
    el: HtmlElement<AnyElement>,
    children: Option<Children>,
) -> HtmlElement<AnyElement> {
    match children {
        Some(children) => el.child(children()),
        None => el,
    }
}
