use thiserror::Error;

/// Site-level failures. Request handling itself is infallible; these
/// only surface during configuration and startup.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
