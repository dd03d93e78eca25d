//! Dev Vault web front-end: routes, pages and server wiring.
//!
//! Pages are composed from [`ui_kit`] primitives and rendered to HTML
//! on the server; authentication state rides in the signed cookie
//! handled by the [`session`] crate.

pub mod config;
pub mod routes;
pub mod server;

mod assets;
mod error;
mod pages;
mod schema;
mod state;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use server::{build_router, start_server};
pub use state::AppState;
