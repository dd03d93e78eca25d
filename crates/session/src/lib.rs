//! Signed `auth` cookie codec.
//!
//! Authentication state lives entirely in a signed, HTTP-only cookie;
//! there is no server-side session store. Every request re-derives its
//! state by parsing the incoming `Cookie` header, so a tampered or
//! deleted cookie is indistinguishable from a logout. Parse and
//! signature failures always degrade to the anonymous value.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use cookie::time::OffsetDateTime;
use cookie::{Cookie, CookieJar, Key, SameSite};
use serde::{Deserialize, Serialize};

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth";

/// Session lifetime: one week.
const MAX_AGE: cookie::time::Duration = cookie::time::Duration::weeks(1);

/// Cookie-borne authentication payload.
///
/// Serializes to `{"loggedIn":true}` when logged in and to `{}` when
/// anonymous; absence of the flag is the sole anonymous state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    /// Whether the bearer is authenticated.
    #[serde(rename = "loggedIn", default, skip_serializing_if = "is_false")]
    pub logged_in: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl AuthData {
    /// The authenticated payload.
    pub fn logged_in() -> Self {
        Self { logged_in: true }
    }

    /// The anonymous payload.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Serializer/parser pair for the signed session cookie.
#[derive(Clone)]
pub struct SessionCodec {
    key: Key,
    secure: bool,
}

impl SessionCodec {
    /// Builds a codec from a signing secret (at least 32 bytes) and the
    /// production flag controlling the `Secure` cookie attribute.
    pub fn new(secret: &[u8], secure: bool) -> Self {
        Self {
            key: Key::derive_from(secret),
            secure,
        }
    }

    /// Derives the authentication state from an incoming `Cookie` header.
    ///
    /// A missing header, a malformed cookie, a bad signature and an
    /// unexpected payload all yield the anonymous state.
    pub fn get_auth(&self, cookie_header: Option<&str>) -> AuthData {
        let Some(header) = cookie_header else {
            return AuthData::anonymous();
        };
        let mut jar = CookieJar::new();
        for cookie in Cookie::split_parse_encoded(header.to_owned()).flatten() {
            jar.add_original(cookie);
        }
        let Some(cookie) = jar.signed(&self.key).get(AUTH_COOKIE) else {
            return AuthData::anonymous();
        };
        match serde_json::from_str::<AuthData>(cookie.value()) {
            Ok(data) if data.logged_in => data,
            _ => AuthData::anonymous(),
        }
    }

    /// Serializes a payload into a `Set-Cookie` header value with the
    /// fixed attribute set (path `/`, one-week max-age, SameSite=Lax,
    /// HttpOnly, Secure in production).
    pub fn serialize_auth(&self, data: AuthData) -> String {
        let payload = serde_json::to_string(&data).unwrap_or_else(|_| "{}".to_owned());
        let mut cookie = self.base_cookie(payload);
        cookie.set_max_age(MAX_AGE);

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie);
        jar.get(AUTH_COOKIE)
            .map(|signed| signed.encoded().to_string())
            .unwrap_or_default()
    }

    /// `Set-Cookie` header value that invalidates the session: an empty,
    /// already-expired cookie.
    pub fn clear_auth(&self) -> String {
        let mut cookie = self.base_cookie(String::new());
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
        cookie.encoded().to_string()
    }

    fn base_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(AUTH_COOKIE, value);
        cookie.set_path("/");
        cookie.set_same_site(SameSite::Lax);
        cookie.set_http_only(true);
        if self.secure {
            cookie.set_secure(true);
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn codec() -> SessionCodec {
        SessionCodec::new(SECRET, false)
    }

    #[test]
    fn round_trip_preserves_logged_in() {
        let codec = codec();
        let header = codec.serialize_auth(AuthData::logged_in());
        assert_eq!(codec.get_auth(Some(&header)), AuthData::logged_in());
    }

    #[test]
    fn missing_and_malformed_headers_are_anonymous() {
        let codec = codec();
        assert_eq!(codec.get_auth(None), AuthData::anonymous());
        assert_eq!(codec.get_auth(Some("")), AuthData::anonymous());
        assert_eq!(codec.get_auth(Some("garbage")), AuthData::anonymous());
        assert_eq!(
            codec.get_auth(Some("auth=not-a-signed-value")),
            AuthData::anonymous()
        );
    }

    #[test]
    fn tampered_signature_is_anonymous() {
        let codec = codec();
        let mut header = codec.serialize_auth(AuthData::logged_in());
        // flip the final character of the cookie pair
        let pair_end = header.find(';').unwrap_or(header.len());
        header.replace_range(
            pair_end - 1..pair_end,
            if &header[pair_end - 1..pair_end] == "A" {
                "B"
            } else {
                "A"
            },
        );
        assert_eq!(codec.get_auth(Some(&header)), AuthData::anonymous());
    }

    #[test]
    fn keys_do_not_cross_validate() {
        let header = codec().serialize_auth(AuthData::logged_in());
        let other = SessionCodec::new(b"ffffffffffffffffffffffffffffffff", false);
        assert_eq!(other.get_auth(Some(&header)), AuthData::anonymous());
    }

    #[test]
    fn serialized_cookie_carries_fixed_attributes() {
        let header = codec().serialize_auth(AuthData::logged_in());
        assert!(header.starts_with("auth="));
        assert!(header.contains("Path=/"));
        assert!(header.contains("Max-Age=604800"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("HttpOnly"));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn production_codec_sets_secure() {
        let codec = SessionCodec::new(SECRET, true);
        assert!(codec.serialize_auth(AuthData::logged_in()).contains("Secure"));
    }

    #[test]
    fn clear_auth_expires_the_cookie() {
        let header = codec().clear_auth();
        assert!(header.starts_with("auth="));
        assert!(header.contains("01 Jan 1970"));
        assert!(header.contains("HttpOnly"));
    }

    #[test]
    fn anonymous_payload_serializes_to_empty_object() {
        assert_eq!(
            serde_json::to_string(&AuthData::anonymous()).unwrap(),
            "{}"
        );
        assert_eq!(
            serde_json::to_string(&AuthData::logged_in()).unwrap(),
            r#"{"loggedIn":true}"#
        );
    }
}
