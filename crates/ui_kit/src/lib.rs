//! Reusable UI primitive library for Dev Vault pages.
//!
//! The crate owns the class-name joiner, the variant-to-class lookup
//! enums, the presentational primitives (Box, Stack, Container, Card,
//! Text, Link, Button) and the composite form primitives (Field, Input,
//! Form, FormGroup, FormField). Pages should compose these primitives
//! instead of emitting ad hoc markup or hand-written class strings.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_name;
mod form_state;
mod primitives;

pub use class_name::cn;
pub use form_state::{FieldState, FormState};
pub use primitives::{
    Box, BoxBackground, BoxPadding, BoxRadius, Button, ButtonSize, ButtonVariant, Card, CardBody,
    CardFooter, CardHeader, CardPadding, CardVariant, Container, ContainerSize, ControlAttrs,
    ControlBuilder, Field, Form, FormField, FormGroup, FormPadding, Input, InputSize, Link,
    RootTag, Stack, StackAlign, StackDirection, StackGap, StackJustify, Text, TextAlign, TextTag,
    TextVariant,
};

/// Convenience imports for page crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        cn, Box, BoxBackground, BoxPadding, BoxRadius, Button, ButtonSize, ButtonVariant, Card,
        CardBody, CardFooter, CardHeader, CardPadding, CardVariant, Container, ContainerSize,
        ControlAttrs, ControlBuilder, Field, FieldState, Form, FormField, FormGroup, FormPadding,
        FormState, Input, InputSize, Link, RootTag, Stack, StackAlign, StackDirection, StackGap,
        StackJustify, Text, TextAlign, TextTag, TextVariant,
    };
}
