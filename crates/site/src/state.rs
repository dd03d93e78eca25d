use session::SessionCodec;

/// Application state cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Signed session cookie codec.
    pub codec: SessionCodec,
}
