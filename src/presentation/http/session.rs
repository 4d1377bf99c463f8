// src/presentation/http/session.rs
use crate::application::{
    dto::{AuthSnapshot, SessionUser},
    ports::credentials::{CredentialKey, CredentialProvider, bearer_token},
    services::ConsoleServices,
};
use crate::infrastructure::security::MemoryCredentialStore;
use axum::http::HeaderMap;
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::sync::Arc;

/// Request-scoped session placed in extensions once the guard has granted.
#[derive(Clone)]
pub struct ConsoleSession {
    pub credentials: Arc<dyn CredentialProvider>,
    pub user: SessionUser,
}

/// Seed a credential store from cookies named after the storage keys and an
/// optional bearer header, which takes the admin slot.
pub fn credentials_from_headers(headers: &HeaderMap) -> MemoryCredentialStore {
    let store = MemoryCredentialStore::new();
    if let Some(cookies) = headers.typed_get::<Cookie>() {
        for key in CredentialKey::ALL {
            if let Some(value) = cookies.get(key.storage_key()) {
                store.set(key, value.to_string());
            }
        }
    }
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        store.set(CredentialKey::AdminToken, header.token().to_string());
    }
    store
}

/// Resolve who is signed in by asking the trust boundary about the stored token.
///
/// The trust boundary is this console's only identity source, so a token it
/// refuses yields no session at all: the guard then sees a signed-out caller
/// and the route redirects to login. Its later reconfirmation can only deny
/// for a session that resolved moments earlier.
pub async fn load_session(
    services: &ConsoleServices,
    credentials: &dyn CredentialProvider,
) -> AuthSnapshot {
    let Some(token) = bearer_token(credentials) else {
        return AuthSnapshot::signed_out();
    };
    match services.trust_boundary().validate_token(&token).await {
        Ok(identity) => AuthSnapshot::signed_in(identity.into()),
        Err(err) => {
            tracing::debug!(error = %err, "could not resolve session");
            AuthSnapshot::signed_out()
        }
    }
}
