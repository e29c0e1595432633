//! Attribute and audit derivation for federated authentication.
//!
//! Two derivations sit at the heart of the crate:
//!
//! - [`assertion::compose`] builds the ordered attribute list placed in an
//!   outbound SAML assertion for a recipient service provider.
//! - [`audit::AuditDescriptorBuilder`] builds the `key=value` detail strings
//!   attached to audit records for user mutations.
//!
//! Both are synchronous and reach the outside world only through the
//! [`assertion::ProfileLookup`], [`auth::TokenClaimsDecoder`] and
//! [`audit::AuditRecordSink`] traits.

pub mod assertion;
pub mod audit;
pub mod auth;
pub mod config;
pub mod diagnostics;
pub mod models;
pub mod observability;
