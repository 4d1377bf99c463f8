// src/application/ports/mod.rs
pub mod blog;
pub mod credentials;
pub mod slug;
pub mod trust;

// Aliases used where ports are injected
pub type BlogGatewayPort = dyn blog::BlogGateway;
pub type SaveHookPort = dyn blog::SaveHook;
pub type CredentialProviderPort = dyn credentials::CredentialProvider;
pub type TrustBoundaryPort = dyn trust::TrustBoundary;
pub type SlugGeneratorPort = dyn slug::SlugGenerator;
