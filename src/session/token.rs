//! Reads the claims of a bearer token issued by the backend. The signature is
//! not checked here; the backend verifies every token it receives. The client
//! only needs the username to know which profile to load.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("token has no username")]
    MissingUsername,
}

fn b64d_json<T: for<'de> Deserialize<'de>>(s: &str) -> Result<T, Error> {
    // Some issuers pad their segments; the unpadded decoder rejects that.
    let bytes = Base64UrlUnpadded::decode_vec(s.trim_end_matches('=')).map_err(|_| Error::Base64)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// # Errors
///
/// Returns an error if the token does not have three segments, the payload is
/// not base64url JSON, or the username claim is empty.
pub fn decode_claims(token: &str) -> Result<TokenClaims, Error> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::TokenFormat);
    };

    let claims: TokenClaims = b64d_json(payload)?;
    if claims.username.trim().is_empty() {
        return Err(Error::MissingUsername);
    }
    Ok(claims)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Builds an unsigned token carrying the given claims.
    pub(crate) fn token_for(username: &str) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = json!({ "username": username, "isAdmin": false, "iat": 1_598_159_259 });
        let payload = Base64UrlUnpadded::encode_string(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_username_and_admin_flag() {
        let claims = decode_claims(&token_for("alice")).unwrap();
        assert_eq!(claims.username, "alice");
        assert!(!claims.is_admin);
        assert_eq!(claims.iat, Some(1_598_159_259));
    }

    #[test]
    fn decodes_the_sample_backend_token() {
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VybmFtZ\
                     SI6InRlc3R1c2VyIiwiaXNBZG1pbiI6ZmFsc2UsImlhdCI6MTU5ODE1OTI1OX0.\
                     FtrMwBQwe6Ue-glIFgz_Nf8XxRT2YecFCiSpYL0fCXc";
        let claims = decode_claims(token).unwrap();
        assert_eq!(claims.username, "testuser");
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(decode_claims("abc"), Err(Error::TokenFormat)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(Error::TokenFormat)));
        assert!(matches!(decode_claims(""), Err(Error::TokenFormat)));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert!(matches!(decode_claims("a.!!!.c"), Err(Error::Base64)));
    }

    #[test]
    fn rejects_payload_without_username() {
        let payload = Base64UrlUnpadded::encode_string(br#"{"username":"  "}"#);
        assert!(matches!(
            decode_claims(&format!("h.{payload}.s")),
            Err(Error::MissingUsername)
        ));
    }
}
