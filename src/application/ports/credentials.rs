// src/application/ports/credentials.rs

/// Keys the console keeps in persisted client storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    AdminToken,
    BlogToken,
    BlogAdminRole,
    AdminRole,
}

impl CredentialKey {
    pub const ALL: [Self; 4] = [
        Self::AdminToken,
        Self::BlogToken,
        Self::BlogAdminRole,
        Self::AdminRole,
    ];

    /// Name of the key in browser storage and cookies.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::AdminToken => "adminToken",
            Self::BlogToken => "blogToken",
            Self::BlogAdminRole => "blogAdminRole",
            Self::AdminRole => "adminRole",
        }
    }
}

/// Access to persisted client credentials.
pub trait CredentialProvider: Send + Sync {
    fn get(&self, key: CredentialKey) -> Option<String>;
    fn set(&self, key: CredentialKey, value: String);
    fn clear(&self, key: CredentialKey);
}

fn non_empty(provider: &dyn CredentialProvider, key: CredentialKey) -> Option<String> {
    provider.get(key).filter(|value| !value.trim().is_empty())
}

/// Bearer token to present to the backend: the admin token, else the blog token.
pub fn bearer_token(provider: &dyn CredentialProvider) -> Option<String> {
    non_empty(provider, CredentialKey::AdminToken)
        .or_else(|| non_empty(provider, CredentialKey::BlogToken))
}

/// Role remembered from a previous login, used when the session user has none.
pub fn stored_role(provider: &dyn CredentialProvider) -> Option<String> {
    non_empty(provider, CredentialKey::BlogAdminRole)
        .or_else(|| non_empty(provider, CredentialKey::AdminRole))
}

/// Drop both bearer tokens after the backend refused them.
pub fn clear_tokens(provider: &dyn CredentialProvider) {
    provider.clear(CredentialKey::AdminToken);
    provider.clear(CredentialKey::BlogToken);
}
