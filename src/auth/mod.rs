mod principal;
pub mod token;

pub use principal::{ActingContext, AuthenticatedPrincipal, UNKNOWN};
#[cfg(feature = "jwt")]
pub use token::JwtClaimsDecoder;
pub use token::{TokenClaims, TokenClaimsDecoder, TokenDecodeError};
