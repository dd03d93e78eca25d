//! Server-rendered pages.
//!
//! Each page renders its body with the ui_kit primitives and wraps it
//! in the shared document shell.

mod docs;
mod home;
mod login;

pub(crate) use docs::docs_page;
pub(crate) use home::home_page;
pub(crate) use login::{index_login_page, login_page};

/// Wraps a rendered body in the document shell: doctype, metadata and
/// the stylesheet link.
fn shell(title: &str, description: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"pt-BR\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\"/>\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n",
            "<title>{title}</title>\n",
            "<meta name=\"description\" content=\"{description}\"/>\n",
            "<link rel=\"stylesheet\" href=\"/app.css\"/>\n",
            "</head>\n",
            "<body>{body}</body>\n",
            "</html>\n",
        ),
        title = title,
        description = description,
        body = body,
    )
}
