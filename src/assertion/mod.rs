//! Outbound assertion attribute composition.
//!
//! Given an authenticated principal, its authorities and the recipient's
//! attribute configuration, this module produces the ordered attribute list
//! attached to a SAML assertion:
//!
//! ```text
//! 1. authorities                      (all authority names, input order)
//! 2. email, id, name, origin, zoneId  (always, even when blank)
//! 3. static attributes                (recipient configuration order)
//! 4. mapped profile fields            (given_name, family_name, phone_number, email)
//! ```
//!
//! Names are not deduplicated across stages.

mod attribute;
pub mod builder;
mod compose;
mod lookup;
mod registry;
mod service;
pub mod values;

pub use attribute::{ATTRNAME_FORMAT_BASIC, AssertionAttribute};
pub use builder::{AUTHORITIES_ATTRIBUTE, AttributeListBuilder};
pub use compose::{ComposeError, MappedField, compose};
pub use lookup::{InMemoryProfileLookup, ProfileLookup, ProfileLookupError};
pub use registry::ServiceProviderRegistry;
pub use service::{AssertionAttributeService, AssertionError};
