#![allow(dead_code)]

use base64ct::{Base64UrlUnpadded, Encoding};
use jobly::{
    api::{ApiConfig, JoblyApi},
    auth::AuthFlow,
    session::SessionStore,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Unsigned token carrying `username`, shaped like the backend's.
pub fn token_for(username: &str) -> String {
    let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = json!({ "username": username, "isAdmin": false, "iat": 1_598_159_259 });
    let payload = Base64UrlUnpadded::encode_string(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}

pub fn user_json(username: &str) -> Value {
    json!({
        "username": username,
        "firstName": "Alice",
        "lastName": "Liddell",
        "email": format!("{username}@example.com"),
        "isAdmin": false,
        "applications": []
    })
}

pub fn gateway(server: &MockServer) -> JoblyApi {
    let config = ApiConfig::parse(&server.uri()).unwrap();
    JoblyApi::new(&config, SessionStore::new()).unwrap()
}

pub fn auth_flow(server: &MockServer) -> AuthFlow {
    AuthFlow::new(gateway(server))
}

/// Serves `users/{username}` for any bearer token.
pub async fn mount_user(server: &MockServer, username: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json(username) })))
        .mount(server)
        .await;
}

/// An auth flow whose session is already established for `username`.
pub async fn signed_in(server: &MockServer, username: &str) -> AuthFlow {
    mount_user(server, username).await;
    let auth = auth_flow(server);
    auth.restore(SecretString::from(token_for(username)))
        .await
        .unwrap();
    auth
}

pub fn authorization(request: &wiremock::Request) -> String {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
