//! Best-effort bearer-token claim decoding.
//!
//! The token is an opaque credential as far as transport is concerned; this
//! module only mines it for display identity. Decoding is total: any malformed
//! input yields `None`, never an error, so a decode failure can never block
//! authentication.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claim fields the client knows how to use. Everything else in the payload
/// is ignored; every known field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    /// Subject identifier, preferring the standard `sub` claim over `id`.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.id.as_deref())
    }

    /// Display name, preferring `name` over `full_name`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.full_name.as_deref())
    }
}

/// Decode the claim set embedded in a three-segment bearer token.
///
/// Returns `None` for anything that is not `header.payload.signature` with a
/// base64url-encoded JSON object payload. Signature and header are not
/// inspected; the server is the only party that verifies tokens.
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };
    // Tokens are normally unpadded base64url; tolerate padded variants.
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&raw).ok()
}
